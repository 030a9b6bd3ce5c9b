use maven_flow::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock ReportSink that keeps rows in memory
///
/// Clones share storage, so a test can keep a handle after moving the sink
/// into a use case.
#[derive(Default, Clone)]
pub struct MockReportSink {
    rows: Arc<Mutex<Vec<ReportRow>>>,
    flushes: Arc<Mutex<usize>>,
}

#[allow(dead_code)]
impl MockReportSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> Vec<ReportRow> {
        self.rows.lock().unwrap().clone()
    }

    pub fn flush_count(&self) -> usize {
        *self.flushes.lock().unwrap()
    }
}

impl ReportSink for MockReportSink {
    fn write_row(&mut self, row: &ReportRow) -> Result<()> {
        self.rows.lock().unwrap().push(row.clone());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        *self.flushes.lock().unwrap() += 1;
        Ok(())
    }
}
