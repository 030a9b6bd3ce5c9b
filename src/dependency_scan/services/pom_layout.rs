use crate::dependency_scan::domain::POM_FILE_NAME;
use crate::shared::security::validate_remote_path;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// File the build tool writes its dependency tree to, next to the root pom
pub const TREE_OUTPUT_FILE_NAME: &str = "tree.txt";

/// PomLayout maps remote pom files onto the local working tree
///
/// Every pom lands at
/// `<base_dir>/<group>/<project>/<branch>/<repository-relative path>`,
/// so branches of the same project never overwrite each other and the
/// module structure of the repository is preserved for the build tool.
#[derive(Debug, Clone)]
pub struct PomLayout {
    base_dir: PathBuf,
}

impl PomLayout {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Local checkout directory of one branch
    ///
    /// # Errors
    /// Returns `FlowError::UnsafePath` if any remote name would escape the base directory
    pub fn branch_dir(&self, group_name: &str, project_name: &str, branch_name: &str) -> Result<PathBuf> {
        validate_remote_path(group_name, "group name")?;
        validate_remote_path(project_name, "project name")?;
        validate_remote_path(branch_name, "branch name")?;

        Ok(self
            .base_dir
            .join(group_name)
            .join(project_name)
            .join(branch_name))
    }

    /// Destination of a pom file given its repository-relative path
    pub fn pom_destination(
        &self,
        group_name: &str,
        project_name: &str,
        branch_name: &str,
        repository_path: &str,
    ) -> Result<PathBuf> {
        validate_remote_path(repository_path, "file path")?;
        Ok(self
            .branch_dir(group_name, project_name, branch_name)?
            .join(repository_path))
    }

    /// True when the repository-relative path is the project's root descriptor
    pub fn is_root_pom(repository_path: &str) -> bool {
        repository_path == POM_FILE_NAME
    }

    /// Dependency-tree output file that sits beside the given root pom
    pub fn tree_output_for(root_pom: &Path) -> PathBuf {
        match root_pom.parent() {
            Some(dir) => dir.join(TREE_OUTPUT_FILE_NAME),
            None => PathBuf::from(TREE_OUTPUT_FILE_NAME),
        }
    }
}
