use async_trait::async_trait;
use maven_flow::prelude::*;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// Mock SourceControlRepository describing a small GitLab instance in memory
#[derive(Default)]
pub struct MockSourceControl {
    groups: Vec<Group>,
    subgroups: HashMap<u64, Vec<Group>>,
    projects: HashMap<u64, Vec<Project>>,
    branches: HashMap<u64, Vec<Branch>>,
    files: HashMap<(u64, String), Vec<(String, Vec<u8>)>>,
    fail_groups: bool,
    failing_subgroups: HashSet<u64>,
    failing_projects: HashSet<u64>,
    failing_branches: HashSet<u64>,
    failing_trees: HashSet<(u64, String)>,
    failing_files: HashSet<(u64, String)>,
    fetches: Mutex<Vec<(u64, String, String)>>,
}

#[allow(dead_code)]
impl MockSourceControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_group(mut self, id: u64, name: &str) -> Self {
        self.groups.push(group(id, name));
        self
    }

    pub fn with_subgroup(mut self, parent_id: u64, id: u64, name: &str) -> Self {
        self.subgroups
            .entry(parent_id)
            .or_default()
            .push(group(id, name));
        self
    }

    pub fn with_project(mut self, group_id: u64, id: u64, name: &str, branches: &[&str]) -> Self {
        self.projects.entry(group_id).or_default().push(Project {
            id,
            name: name.to_string(),
        });
        self.branches.insert(
            id,
            branches
                .iter()
                .map(|b| Branch {
                    name: b.to_string(),
                })
                .collect(),
        );
        self
    }

    /// Adds a file to the tree of `project_id` at `branch`
    pub fn with_file(mut self, project_id: u64, branch: &str, path: &str, content: &str) -> Self {
        self.files
            .entry((project_id, branch.to_string()))
            .or_default()
            .push((path.to_string(), content.as_bytes().to_vec()));
        self
    }

    pub fn failing_groups(mut self) -> Self {
        self.fail_groups = true;
        self
    }

    pub fn failing_subgroups(mut self, group_id: u64) -> Self {
        self.failing_subgroups.insert(group_id);
        self
    }

    pub fn failing_projects(mut self, group_id: u64) -> Self {
        self.failing_projects.insert(group_id);
        self
    }

    pub fn failing_branches(mut self, project_id: u64) -> Self {
        self.failing_branches.insert(project_id);
        self
    }

    pub fn failing_tree(mut self, project_id: u64, branch: &str) -> Self {
        self.failing_trees.insert((project_id, branch.to_string()));
        self
    }

    pub fn failing_file(mut self, project_id: u64, path: &str) -> Self {
        self.failing_files.insert((project_id, path.to_string()));
        self
    }

    /// Raw-file downloads as `(project_id, path, ref)`
    pub fn fetches(&self) -> Vec<(u64, String, String)> {
        self.fetches.lock().unwrap().clone()
    }
}

fn group(id: u64, name: &str) -> Group {
    Group {
        id,
        name: name.to_string(),
    }
}

fn unavailable(operation: &str) -> anyhow::Error {
    FlowError::SourceControl {
        operation: operation.to_string(),
        details: "HTTP 500 Internal Server Error".to_string(),
    }
    .into()
}

#[async_trait]
impl SourceControlRepository for MockSourceControl {
    async fn list_groups(&self) -> Result<Vec<Group>> {
        if self.fail_groups {
            return Err(unavailable("list groups"));
        }
        Ok(self.groups.clone())
    }

    async fn list_subgroups(&self, group_id: u64) -> Result<Vec<Group>> {
        if self.failing_subgroups.contains(&group_id) {
            return Err(unavailable(&format!("list sub-groups of group {}", group_id)));
        }
        Ok(self.subgroups.get(&group_id).cloned().unwrap_or_default())
    }

    async fn list_group_projects(&self, group_id: u64) -> Result<Vec<Project>> {
        if self.failing_projects.contains(&group_id) {
            return Err(unavailable(&format!("list projects of group {}", group_id)));
        }
        Ok(self.projects.get(&group_id).cloned().unwrap_or_default())
    }

    async fn list_branches(&self, project_id: u64) -> Result<Vec<Branch>> {
        if self.failing_branches.contains(&project_id) {
            return Err(unavailable(&format!("list branches of project {}", project_id)));
        }
        Ok(self.branches.get(&project_id).cloned().unwrap_or_default())
    }

    async fn list_tree(&self, project_id: u64, git_ref: &str) -> Result<Vec<TreeEntry>> {
        let key = (project_id, git_ref.to_string());
        if self.failing_trees.contains(&key) {
            return Err(unavailable(&format!("list tree of project {}", project_id)));
        }
        Ok(self
            .files
            .get(&key)
            .map(|files| {
                files
                    .iter()
                    .map(|(path, _)| TreeEntry {
                        name: path.rsplit('/').next().unwrap_or(path).to_string(),
                        kind: TreeEntryKind::Blob,
                        path: path.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn fetch_raw_file(
        &self,
        project_id: u64,
        file_path: &str,
        git_ref: &str,
    ) -> Result<Vec<u8>> {
        self.fetches.lock().unwrap().push((
            project_id,
            file_path.to_string(),
            git_ref.to_string(),
        ));

        if self
            .failing_files
            .contains(&(project_id, file_path.to_string()))
        {
            return Err(unavailable(&format!("download {}", file_path)));
        }

        self.files
            .get(&(project_id, git_ref.to_string()))
            .and_then(|files| files.iter().find(|(path, _)| path == file_path))
            .map(|(_, content)| content.clone())
            .ok_or_else(|| anyhow::anyhow!("404 File Not Found"))
    }
}
