use crate::dependency_scan::services::ProjectSelector;
use std::path::PathBuf;

/// ScanRequest - Input of the repository scan use case
#[derive(Debug)]
pub struct ScanRequest {
    /// Root directory under which poms are materialized
    pub local_base_dir: PathBuf,
    /// Which groups and projects to visit
    pub selector: ProjectSelector,
    /// Abort the whole run when a pom download fails, instead of skipping the branch
    pub abort_on_fetch_error: bool,
}

impl ScanRequest {
    /// Request that scans every group and project and aborts on download failures
    pub fn new(local_base_dir: impl Into<PathBuf>) -> Self {
        Self {
            local_base_dir: local_base_dir.into(),
            selector: ProjectSelector::all(),
            abort_on_fetch_error: true,
        }
    }

    pub fn with_selector(mut self, selector: ProjectSelector) -> Self {
        self.selector = selector;
        self
    }

    pub fn with_abort_on_fetch_error(mut self, abort: bool) -> Self {
        self.abort_on_fetch_error = abort;
        self
    }
}
