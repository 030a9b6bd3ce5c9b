use crate::dependency_scan::domain::ReportRow;
use crate::shared::Result;

/// ReportSink port receiving the flattened dependency report
///
/// The header is the sink's concern; callers only push rows. Rows may be
/// buffered until `flush` is called.
pub trait ReportSink {
    fn write_row(&mut self, row: &ReportRow) -> Result<()>;

    /// Persists every buffered row
    fn flush(&mut self) -> Result<()>;
}
