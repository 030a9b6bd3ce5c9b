/// Mock implementations for testing
mod mock_dependency_resolver;
mod mock_progress_reporter;
mod mock_report_sink;
mod mock_source_control;

#[allow(unused_imports)]
pub use mock_dependency_resolver::MockDependencyResolver;
#[allow(unused_imports)]
pub use mock_progress_reporter::MockProgressReporter;
#[allow(unused_imports)]
pub use mock_report_sink::MockReportSink;
#[allow(unused_imports)]
pub use mock_source_control::MockSourceControl;
