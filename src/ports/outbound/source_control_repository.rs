use crate::dependency_scan::domain::{Branch, Group, Project, TreeEntry};
use crate::shared::Result;
use async_trait::async_trait;

/// SourceControlRepository port for reading the GitLab group hierarchy
///
/// This port abstracts the remote service that owns groups, projects,
/// branches and repository files. The scan only reads; nothing is ever
/// written back.
///
/// # Async Support
/// All methods are async. The scan awaits them one at a time, but
/// implementations must still be `Send + Sync` so the use case can run on a
/// multi-threaded runtime.
#[async_trait]
pub trait SourceControlRepository: Send + Sync {
    /// Lists every group visible to the configured token
    async fn list_groups(&self) -> Result<Vec<Group>>;

    /// Lists the direct sub-groups of a group (one level deep)
    async fn list_subgroups(&self, group_id: u64) -> Result<Vec<Group>>;

    /// Lists the projects that belong to a group
    async fn list_group_projects(&self, group_id: u64) -> Result<Vec<Project>>;

    /// Lists the branches of a project
    async fn list_branches(&self, project_id: u64) -> Result<Vec<Branch>>;

    /// Lists the full recursive file tree of a project at a branch or other ref
    async fn list_tree(&self, project_id: u64, git_ref: &str) -> Result<Vec<TreeEntry>>;

    /// Downloads the raw bytes of one file at a ref
    ///
    /// # Arguments
    /// * `file_path` - Repository-relative path, e.g. `module-a/pom.xml`
    /// * `git_ref` - Branch name, tag or commit
    async fn fetch_raw_file(&self, project_id: u64, file_path: &str, git_ref: &str)
        -> Result<Vec<u8>>;
}
