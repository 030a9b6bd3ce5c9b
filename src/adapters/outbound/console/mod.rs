/// Console adapters for operator-facing diagnostics
mod progress_reporter;

pub use progress_reporter::StderrProgressReporter;
