use crate::dependency_scan::domain::DependencyCoordinate;
use async_trait::async_trait;
use std::path::Path;

/// Why a dependency resolution produced nothing
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolutionFailure {
    pub reason: String,
    pub stdout: String,
    pub stderr: String,
}

impl ResolutionFailure {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            ..Self::default()
        }
    }

    pub fn with_output(mut self, stdout: String, stderr: String) -> Self {
        self.stdout = stdout;
        self.stderr = stderr;
        self
    }
}

/// Outcome of resolving one root pom
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependencyResolution {
    Resolved(Vec<DependencyCoordinate>),
    Failed(ResolutionFailure),
}

impl DependencyResolution {
    /// Coordinates found, or none when the resolution failed
    pub fn into_coordinates(self) -> Vec<DependencyCoordinate> {
        match self {
            DependencyResolution::Resolved(coordinates) => coordinates,
            DependencyResolution::Failed(_) => Vec::new(),
        }
    }
}

/// DependencyResolver port for materializing a dependency tree
///
/// Implementations run a build tool against a root pom and parse what it
/// writes. Resolution never fails as a `Result`: one broken module must not
/// stop an organization-wide scan, so every failure is reported as
/// `DependencyResolution::Failed` and callers log it and move on.
#[async_trait]
pub trait DependencyResolver: Send + Sync {
    /// Resolves the dependency tree of the project rooted at `pom_path`
    ///
    /// # Arguments
    /// * `pom_path` - Path of the root `pom.xml`; its directory is the working directory
    /// * `output_file` - Where the raw tree text is written
    async fn resolve(&self, pom_path: &Path, output_file: &Path) -> DependencyResolution;
}
