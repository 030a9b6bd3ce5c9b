/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the outbound ports:
/// GitLab over HTTP, Maven as a child process, the local disk and stderr.
pub mod outbound;
