/// Filesystem adapters for pom materialization and the CSV report
mod csv_report_writer;
mod file_materializer;

pub use csv_report_writer::CsvReportWriter;
pub use file_materializer::FileSystemMaterializer;
