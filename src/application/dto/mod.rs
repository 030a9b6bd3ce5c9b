/// Data Transfer Objects for application layer
///
/// DTOs carry the scan's inputs and results between the CLI and the use
/// cases, keeping the domain layer free of configuration concerns.
mod pom_collection;
mod scan_request;
mod scan_summary;

pub use pom_collection::PomCollection;
pub use scan_request::ScanRequest;
pub use scan_summary::ScanSummary;
