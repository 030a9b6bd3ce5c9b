/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with GitLab, the build tool, the local disk and the console.
pub mod dependency_resolver;
pub mod file_materializer;
pub mod progress_reporter;
pub mod report_sink;
pub mod source_control_repository;

pub use dependency_resolver::{DependencyResolution, DependencyResolver, ResolutionFailure};
pub use file_materializer::FileMaterializer;
pub use progress_reporter::ProgressReporter;
pub use report_sink::ReportSink;
pub use source_control_repository::SourceControlRepository;
