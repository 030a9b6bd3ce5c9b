use chrono::{DateTime, Utc};
use uuid::Uuid;

/// ScanSummary - Counters and timing of one scan run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSummary {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub groups_scanned: usize,
    pub projects_scanned: usize,
    pub branches_scanned: usize,
    /// Branches abandoned because listing or collecting their poms failed
    pub branches_skipped: usize,
    /// Branches without a `pom.xml` at the repository root
    pub branches_without_root_pom: usize,
    /// Branches whose build-tool run produced no result
    pub resolutions_failed: usize,
    pub rows_written: usize,
}

impl ScanSummary {
    pub fn start() -> Self {
        Self {
            run_id: Uuid::new_v4(),
            started_at: Utc::now(),
            finished_at: None,
            groups_scanned: 0,
            projects_scanned: 0,
            branches_scanned: 0,
            branches_skipped: 0,
            branches_without_root_pom: 0,
            resolutions_failed: 0,
            rows_written: 0,
        }
    }

    pub fn finish(mut self) -> Self {
        self.finished_at = Some(Utc::now());
        self
    }

    /// Wall-clock duration in whole seconds, once finished
    pub fn elapsed_seconds(&self) -> Option<i64> {
        self.finished_at
            .map(|finished| (finished - self.started_at).num_seconds())
    }

    /// One-line description for the completion message
    pub fn describe(&self) -> String {
        format!(
            "Scanned {} group(s), {} project(s), {} branch(es): {} row(s) written, \
             {} branch(es) without root pom, {} skipped, {} resolution(s) failed",
            self.groups_scanned,
            self.projects_scanned,
            self.branches_scanned,
            self.rows_written,
            self.branches_without_root_pom,
            self.branches_skipped,
            self.resolutions_failed
        )
    }
}
