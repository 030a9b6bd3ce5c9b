use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Where the pom files of one (project, branch) pair landed on disk
///
/// Root poms are registered under the key `"<project>.<branch>"`; every
/// materialized pom (root and sub-module) is also kept in write order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PomLocations {
    roots: HashMap<String, PathBuf>,
    materialized: Vec<PathBuf>,
}

impl PomLocations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the lookup key for a project/branch pair
    pub fn key(project_name: &str, branch_name: &str) -> String {
        format!("{}.{}", project_name, branch_name)
    }

    /// Records a materialized sub-module pom
    pub fn record(&mut self, path: PathBuf) {
        self.materialized.push(path);
    }

    /// Records a materialized root pom for the given project/branch
    pub fn record_root(&mut self, project_name: &str, branch_name: &str, path: PathBuf) {
        self.roots
            .insert(Self::key(project_name, branch_name), path.clone());
        self.materialized.push(path);
    }

    pub fn root_pom(&self, project_name: &str, branch_name: &str) -> Option<&Path> {
        self.roots
            .get(&Self::key(project_name, branch_name))
            .map(PathBuf::as_path)
    }

    pub fn materialized(&self) -> &[PathBuf] {
        &self.materialized
    }

    pub fn len(&self) -> usize {
        self.materialized.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materialized.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_format() {
        assert_eq!(PomLocations::key("billing", "main"), "billing.main");
    }

    #[test]
    fn test_root_lookup() {
        let mut locations = PomLocations::new();
        locations.record(PathBuf::from("/poms/g/billing/main/core/pom.xml"));
        locations.record_root("billing", "main", PathBuf::from("/poms/g/billing/main/pom.xml"));

        assert_eq!(
            locations.root_pom("billing", "main"),
            Some(Path::new("/poms/g/billing/main/pom.xml"))
        );
        assert_eq!(locations.root_pom("billing", "develop"), None);
        assert_eq!(locations.len(), 2);
    }

    #[test]
    fn test_submodule_never_becomes_root() {
        let mut locations = PomLocations::new();
        locations.record(PathBuf::from("/poms/g/billing/main/core/pom.xml"));

        assert!(locations.root_pom("billing", "main").is_none());
        assert!(!locations.is_empty());
    }
}
