/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod build_tool;
pub mod console;
pub mod filesystem;
pub mod network;
