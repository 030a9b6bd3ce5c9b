/// Network adapters for the source-control API
mod gitlab_client;

pub use gitlab_client::{GitLabOptions, GitLabRepository};
