use crate::dependency_scan::domain::PomLocations;

/// Result of collecting the pom files of one project branch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PomCollection {
    /// Whether a `pom.xml` exists at the repository root
    pub root_pom_found: bool,
    pub locations: PomLocations,
}
