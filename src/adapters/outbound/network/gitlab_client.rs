use crate::dependency_scan::domain::{Branch, Group, Project, TreeEntry};
use crate::ports::outbound::SourceControlRepository;
use crate::shared::error::FlowError;
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

const API_PREFIX: &str = "/api/v4";
const TOKEN_HEADER: &str = "private-token";
const NEXT_PAGE_HEADER: &str = "x-next-page";

/// Hard stop for pagination in case a server keeps advertising pages
const MAX_PAGES: u32 = 10_000;

/// Connection settings for `GitLabRepository`
#[derive(Debug, Clone)]
pub struct GitLabOptions {
    /// Items requested per page on list endpoints (GitLab caps this at 100)
    pub per_page: u32,
    pub timeout: Duration,
    pub max_retries: u32,
    /// Base delay between retries; attempt `n` waits `n * retry_delay`
    pub retry_delay: Duration,
}

impl Default for GitLabOptions {
    fn default() -> Self {
        Self {
            per_page: 100,
            timeout: Duration::from_secs(30),
            max_retries: 3,
            retry_delay: Duration::from_millis(200),
        }
    }
}

/// GitLabRepository adapter for the GitLab REST API (v4)
///
/// This adapter implements the SourceControlRepository port. Every list
/// endpoint is followed through the `X-Next-Page` header, so large
/// instances are read completely instead of relying on one oversized page.
///
/// # Retries
/// Connection errors, `429 Too Many Requests` and `5xx` responses are
/// retried up to `max_retries` times. Other `4xx` responses fail at once.
pub struct GitLabRepository {
    client: reqwest::Client,
    api_url: String,
    options: GitLabOptions,
}

impl GitLabRepository {
    /// Creates a client for the instance at `base_url`
    ///
    /// `base_url` is the instance root (`https://gitlab.example.com`); an
    /// explicit `/api/v4` suffix is accepted too.
    pub fn new(base_url: &str, token: &str, options: GitLabOptions) -> Result<Self> {
        let mut token_value = HeaderValue::from_str(token).map_err(|_| FlowError::InvalidConfig {
            message: "The GitLab token contains characters that are not allowed in an HTTP header"
                .to_string(),
            hint: "Copy the personal access token again without surrounding whitespace".to_string(),
        })?;
        token_value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(TOKEN_HEADER, token_value);

        let user_agent = format!("maven-flow/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::Client::builder()
            .timeout(options.timeout)
            .user_agent(user_agent)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            api_url: Self::api_url(base_url),
            options,
        })
    }

    fn api_url(base_url: &str) -> String {
        let trimmed = base_url.trim_end_matches('/');
        if trimmed.ends_with(API_PREFIX) {
            trimmed.to_string()
        } else {
            format!("{}{}", trimmed, API_PREFIX)
        }
    }

    /// Fetches every page of a list endpoint
    ///
    /// # Arguments
    /// * `path` - Endpoint path below `/api/v4`
    /// * `query` - Extra query parameters, already encoded, joined with `&`
    /// * `operation` - Human-readable description used in errors
    async fn get_all_pages<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &str,
        operation: &str,
    ) -> Result<Vec<T>> {
        let mut items = Vec::new();
        let mut page: u32 = 1;

        loop {
            let separator = if query.is_empty() { "" } else { "&" };
            let url = format!(
                "{}{}?{}{}per_page={}&page={}",
                self.api_url, path, query, separator, self.options.per_page, page
            );

            let response = self.get_with_retry(&url, operation).await?;
            let next_page = Self::next_page(&response);

            let batch: Vec<T> = response.json().await.map_err(|e| FlowError::SourceControl {
                operation: operation.to_string(),
                details: format!("Unexpected response body: {}", e),
            })?;
            items.extend(batch);

            match next_page {
                Some(next) if next > page && next <= MAX_PAGES => page = next,
                _ => break,
            }
        }

        Ok(items)
    }

    fn next_page(response: &Response) -> Option<u32> {
        response
            .headers()
            .get(NEXT_PAGE_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<u32>().ok())
    }

    async fn get_with_retry(&self, url: &str, operation: &str) -> Result<Response> {
        let mut attempt: u32 = 0;

        loop {
            attempt += 1;
            let retries_left = attempt <= self.options.max_retries;

            match self.client.get(url).send().await {
                Ok(response) if response.status().is_success() => return Ok(response),
                Ok(response) if retries_left && Self::is_retryable(response.status()) => {}
                Ok(response) => return Err(Self::status_error(response, operation).await),
                Err(e) if retries_left && (e.is_connect() || e.is_timeout()) => {}
                Err(e) => {
                    return Err(FlowError::SourceControl {
                        operation: operation.to_string(),
                        details: e.to_string(),
                    }
                    .into())
                }
            }

            tokio::time::sleep(self.options.retry_delay * attempt).await;
        }
    }

    fn is_retryable(status: StatusCode) -> bool {
        status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
    }

    /// Builds an error from a non-success response, keeping GitLab's `message` field
    async fn status_error(response: Response, operation: &str) -> anyhow::Error {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|json| json.get("message").or_else(|| json.get("error")).cloned())
            .map(|value| match value {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            });

        let details = match message {
            Some(message) => format!("HTTP {}: {}", status, message),
            None => format!("HTTP {}", status),
        };

        FlowError::SourceControl {
            operation: operation.to_string(),
            details,
        }
        .into()
    }
}

#[async_trait]
impl SourceControlRepository for GitLabRepository {
    async fn list_groups(&self) -> Result<Vec<Group>> {
        self.get_all_pages("/groups", "", "list groups").await
    }

    async fn list_subgroups(&self, group_id: u64) -> Result<Vec<Group>> {
        self.get_all_pages(
            &format!("/groups/{}/subgroups", group_id),
            "",
            &format!("list sub-groups of group {}", group_id),
        )
        .await
    }

    async fn list_group_projects(&self, group_id: u64) -> Result<Vec<Project>> {
        self.get_all_pages(
            &format!("/groups/{}/projects", group_id),
            "",
            &format!("list projects of group {}", group_id),
        )
        .await
    }

    async fn list_branches(&self, project_id: u64) -> Result<Vec<Branch>> {
        self.get_all_pages(
            &format!("/projects/{}/repository/branches", project_id),
            "",
            &format!("list branches of project {}", project_id),
        )
        .await
    }

    async fn list_tree(&self, project_id: u64, git_ref: &str) -> Result<Vec<TreeEntry>> {
        let query = format!("recursive=true&ref={}", urlencoding::encode(git_ref));
        self.get_all_pages(
            &format!("/projects/{}/repository/tree", project_id),
            &query,
            &format!("list repository tree of project {} at '{}'", project_id, git_ref),
        )
        .await
    }

    async fn fetch_raw_file(
        &self,
        project_id: u64,
        file_path: &str,
        git_ref: &str,
    ) -> Result<Vec<u8>> {
        let operation = format!(
            "download '{}' of project {} at '{}'",
            file_path, project_id, git_ref
        );
        let url = format!(
            "{}/projects/{}/repository/files/{}/raw?ref={}",
            self.api_url,
            project_id,
            urlencoding::encode(file_path),
            urlencoding::encode(git_ref)
        );

        let response = self.get_with_retry(&url, &operation).await?;
        let bytes = response.bytes().await.map_err(|e| FlowError::SourceControl {
            operation,
            details: e.to_string(),
        })?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_appends_prefix() {
        assert_eq!(
            GitLabRepository::api_url("https://gitlab.example.com"),
            "https://gitlab.example.com/api/v4"
        );
        assert_eq!(
            GitLabRepository::api_url("https://gitlab.example.com/"),
            "https://gitlab.example.com/api/v4"
        );
    }

    #[test]
    fn test_api_url_keeps_explicit_prefix() {
        assert_eq!(
            GitLabRepository::api_url("http://git.internal/api/v4/"),
            "http://git.internal/api/v4"
        );
    }

    #[test]
    fn test_new_rejects_token_with_newline() {
        let result = GitLabRepository::new(
            "https://gitlab.example.com",
            "glpat-abc\n",
            GitLabOptions::default(),
        );
        assert!(result.is_err());
        let err = result.err().unwrap().to_string();
        assert!(err.contains("token"));
    }

    #[test]
    fn test_is_retryable() {
        assert!(GitLabRepository::is_retryable(StatusCode::BAD_GATEWAY));
        assert!(GitLabRepository::is_retryable(StatusCode::TOO_MANY_REQUESTS));
        assert!(!GitLabRepository::is_retryable(StatusCode::NOT_FOUND));
        assert!(!GitLabRepository::is_retryable(StatusCode::UNAUTHORIZED));
    }
}
