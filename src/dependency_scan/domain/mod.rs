pub mod coordinate;
pub mod pom_locations;
pub mod report_row;
pub mod source_control;

pub use coordinate::{DependencyCoordinate, POM_FILE_NAME};
pub use pom_locations::PomLocations;
pub use report_row::{ReportRow, REPORT_HEADER};
pub use source_control::{Branch, Group, GroupKey, Project, TreeEntry, TreeEntryKind};
