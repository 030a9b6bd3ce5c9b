use serde::Deserialize;

/// A GitLab group (top-level or sub-group)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Group {
    pub id: u64,
    pub name: String,
}

impl Group {
    pub fn key(&self) -> GroupKey {
        GroupKey {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

/// Value key identifying a group in the group → projects mapping
///
/// Groups are compared by id and name, never by the identity of the
/// deserialized object, so the same group listed both as a top-level group
/// and as a sub-group collapses into one entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupKey {
    pub id: u64,
    pub name: String,
}

/// A GitLab project (repository)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub id: u64,
    pub name: String,
}

/// A branch of a project
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Branch {
    pub name: String,
}

/// Kind of entry in a repository tree listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreeEntryKind {
    /// Regular file
    Blob,
    /// Directory
    Tree,
    /// Git submodule
    Commit,
    #[serde(other)]
    Unknown,
}

/// One entry of a recursive repository tree listing
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TreeEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TreeEntryKind,
    /// Repository-relative path, e.g. `module-a/pom.xml`
    pub path: String,
}

impl TreeEntry {
    pub fn is_blob_named(&self, file_name: &str) -> bool {
        self.kind == TreeEntryKind::Blob && self.name == file_name
    }
}
