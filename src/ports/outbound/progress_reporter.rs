/// ProgressReporter port for reporting progress during a scan
///
/// This port abstracts diagnostics (e.g., to stderr) so the use cases can
/// tell the operator which group, project and branch they are working on,
/// and why something was skipped.
pub trait ProgressReporter {
    /// Reports an informational message
    fn report(&self, message: &str);

    /// Reports progress through a known number of units
    ///
    /// # Arguments
    /// * `current` - Units completed so far
    /// * `total` - Total expected units
    /// * `message` - Optional label for the unit in progress
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a recoverable problem; the scan continues
    fn report_warning(&self, message: &str);

    /// Reports a failure
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
