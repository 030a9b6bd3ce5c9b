/// File name of a Maven build descriptor
pub const POM_FILE_NAME: &str = "pom.xml";

/// DependencyCoordinate value object for one resolved Maven dependency
///
/// Extracted from a single line of `mvn dependency:tree` text output.
/// `source_path` records which descriptor the coordinate was resolved from;
/// it is always the root `pom.xml` today and is kept so rows can later be
/// attributed to individual modules.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DependencyCoordinate {
    group_id: String,
    artifact_id: String,
    packaging: String,
    version: String,
    source_path: String,
}

impl DependencyCoordinate {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        packaging: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            packaging: packaging.into(),
            version: version.into(),
            source_path: POM_FILE_NAME.to_string(),
        }
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn packaging(&self) -> &str {
        &self.packaging
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn source_path(&self) -> &str {
        &self.source_path
    }
}

impl std::fmt::Display for DependencyCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.group_id, self.artifact_id, self.packaging, self.version
        )
    }
}
