use super::coordinate::DependencyCoordinate;

/// Column names of the dependency report, in output order
pub const REPORT_HEADER: [&str; 8] = [
    "GroupName",
    "ProjectName",
    "Branch",
    "GroupId",
    "ArtifactId",
    "Packaging",
    "Version",
    "SourcePath",
];

/// One line of the dependency report: a coordinate resolved for a branch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub group_name: String,
    pub project_name: String,
    pub branch_name: String,
    pub coordinate: DependencyCoordinate,
}

impl ReportRow {
    pub fn new(
        group_name: impl Into<String>,
        project_name: impl Into<String>,
        branch_name: impl Into<String>,
        coordinate: DependencyCoordinate,
    ) -> Self {
        Self {
            group_name: group_name.into(),
            project_name: project_name.into(),
            branch_name: branch_name.into(),
            coordinate,
        }
    }

    /// Field values in `REPORT_HEADER` order
    pub fn fields(&self) -> [&str; 8] {
        [
            self.group_name.as_str(),
            self.project_name.as_str(),
            self.branch_name.as_str(),
            self.coordinate.group_id(),
            self.coordinate.artifact_id(),
            self.coordinate.packaging(),
            self.coordinate.version(),
            self.coordinate.source_path(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_follow_header_order() {
        let row = ReportRow::new(
            "platform",
            "billing",
            "release/2.x",
            DependencyCoordinate::new("com.foo", "bar", "jar", "1.2.3"),
        );

        assert_eq!(
            row.fields(),
            [
                "platform",
                "billing",
                "release/2.x",
                "com.foo",
                "bar",
                "jar",
                "1.2.3",
                "pom.xml"
            ]
        );
        assert_eq!(row.fields().len(), REPORT_HEADER.len());
    }
}
