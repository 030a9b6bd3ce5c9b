use crate::dependency_scan::domain::{ReportRow, REPORT_HEADER};
use crate::ports::outbound::ReportSink;
use crate::shared::error::FlowError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// CsvReportWriter adapter writing the dependency report as CSV
///
/// This adapter implements the ReportSink port. The header row is written
/// and flushed as soon as the writer is created, so even a scan that finds
/// nothing leaves a valid report behind.
pub struct CsvReportWriter<W: Write> {
    writer: csv::Writer<W>,
    destination: PathBuf,
}

impl CsvReportWriter<File> {
    /// Creates (or truncates) the report file at `path`
    ///
    /// # Errors
    /// Returns `FlowError::ReportWriteError` if the parent directory is
    /// missing, the path is a symbolic link, or the file cannot be created.
    pub fn create(path: &Path) -> Result<Self> {
        Self::validate_destination(path)?;

        let file = File::create(path).map_err(|e| FlowError::ReportWriteError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        Self::with_destination(file, path.to_path_buf())
    }

    fn validate_destination(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if parent != Path::new("") && !parent.exists() {
                return Err(FlowError::ReportWriteError {
                    path: path.to_path_buf(),
                    details: format!("Parent directory does not exist: {}", parent.display()),
                }
                .into());
            }
        }

        validate_not_symlink(path, "write").map_err(|e| FlowError::ReportWriteError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        Ok(())
    }
}

impl<W: Write> CsvReportWriter<W> {
    /// Wraps any writer; `destination` is only used in error messages
    pub fn with_destination(inner: W, destination: PathBuf) -> Result<Self> {
        let mut report = Self {
            writer: csv::Writer::from_writer(inner),
            destination,
        };
        report.write_record(&REPORT_HEADER)?;
        report.flush()?;
        Ok(report)
    }

    /// Flushes and returns the underlying writer
    pub fn into_inner(self) -> Result<W> {
        let destination = self.destination;
        self.writer.into_inner().map_err(|e| {
            FlowError::ReportWriteError {
                path: destination,
                details: e.error().to_string(),
            }
            .into()
        })
    }

    fn write_record(&mut self, fields: &[&str]) -> Result<()> {
        self.writer
            .write_record(fields)
            .map_err(|e| self.report_error(e))
    }

    fn report_error(&self, e: impl ToString) -> anyhow::Error {
        FlowError::ReportWriteError {
            path: self.destination.clone(),
            details: e.to_string(),
        }
        .into()
    }
}

impl<W: Write> ReportSink for CsvReportWriter<W> {
    fn write_row(&mut self, row: &ReportRow) -> Result<()> {
        self.write_record(&row.fields())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush().map_err(|e| self.report_error(e))
    }
}
