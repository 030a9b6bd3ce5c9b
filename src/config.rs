//! Configuration file support for maven-flow.
//!
//! Provides YAML-based configuration through `maven-flow.config.yml` files,
//! merging with command-line overrides, and validation into a [`ScanConfig`].

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::dependency_scan::services::ProjectSelector;
use crate::shared::error::FlowError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "maven-flow.config.yml";

pub const DEFAULT_BASE_DIR: &str = "./maven-flow/poms/";
pub const DEFAULT_MAVEN_BIN: &str = "mvn";
pub const DEFAULT_REPORT_PATH: &str = "data.csv";
pub const DEFAULT_PER_PAGE: u32 = 100;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// GitLab refuses larger pages
const MAX_PER_PAGE: u32 = 100;

/// Top-level configuration file schema.
///
/// Every field is optional; command-line flags are layered on top with
/// [`ConfigFile::merged_with`] and defaults fill the rest.
#[derive(Deserialize, Default)]
pub struct ConfigFile {
    pub base_url: Option<String>,
    pub token: Option<String>,
    pub base_dir: Option<PathBuf>,
    pub maven_bin: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub per_page: Option<u32>,
    pub request_timeout_secs: Option<u64>,
    pub abort_on_fetch_error: Option<bool>,
    pub groups: Option<Vec<String>>,
    pub projects: Option<Vec<String>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl fmt::Debug for ConfigFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigFile")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("base_dir", &self.base_dir)
            .field("maven_bin", &self.maven_bin)
            .field("output", &self.output)
            .field("per_page", &self.per_page)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("abort_on_fetch_error", &self.abort_on_fetch_error)
            .field("groups", &self.groups)
            .field("projects", &self.projects)
            .field("unknown_fields", &self.unknown_fields.keys())
            .finish()
    }
}

impl ConfigFile {
    /// Layers `overrides` on top of this file; any value set there wins.
    pub fn merged_with(self, overrides: ConfigFile) -> ConfigFile {
        ConfigFile {
            base_url: overrides.base_url.or(self.base_url),
            token: overrides.token.or(self.token),
            base_dir: overrides.base_dir.or(self.base_dir),
            maven_bin: overrides.maven_bin.or(self.maven_bin),
            output: overrides.output.or(self.output),
            per_page: overrides.per_page.or(self.per_page),
            request_timeout_secs: overrides.request_timeout_secs.or(self.request_timeout_secs),
            abort_on_fetch_error: overrides.abort_on_fetch_error.or(self.abort_on_fetch_error),
            groups: overrides.groups.or(self.groups),
            projects: overrides.projects.or(self.projects),
            unknown_fields: self.unknown_fields,
        }
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Validated settings of one scan run
#[derive(Clone)]
pub struct ScanConfig {
    pub base_url: String,
    pub auth_token: String,
    pub local_base_dir: PathBuf,
    pub tool_binary_path: PathBuf,
    pub report_path: PathBuf,
    pub per_page: u32,
    pub request_timeout: Duration,
    pub abort_on_fetch_error: bool,
    pub group_patterns: Vec<String>,
    pub project_patterns: Vec<String>,
}

impl fmt::Debug for ScanConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScanConfig")
            .field("base_url", &self.base_url)
            .field("auth_token", &"<redacted>")
            .field("local_base_dir", &self.local_base_dir)
            .field("tool_binary_path", &self.tool_binary_path)
            .field("report_path", &self.report_path)
            .field("per_page", &self.per_page)
            .field("request_timeout", &self.request_timeout)
            .field("abort_on_fetch_error", &self.abort_on_fetch_error)
            .field("group_patterns", &self.group_patterns)
            .field("project_patterns", &self.project_patterns)
            .finish()
    }
}

impl ScanConfig {
    /// Applies defaults and validates a merged configuration.
    ///
    /// # Errors
    /// `FlowError::InvalidConfig` when the base URL or token is missing or
    /// malformed, when `per_page` or the timeout is out of range, or when a
    /// selector pattern is rejected.
    pub fn resolve(file: ConfigFile) -> Result<Self> {
        let base_url = match file.base_url.map(|url| url.trim().to_string()) {
            Some(url) if !url.is_empty() => url,
            _ => {
                return Err(invalid(
                    "GitLab base URL is not set",
                    "Pass --base-url or set base_url in maven-flow.config.yml",
                ))
            }
        };
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(invalid(
                format!("GitLab base URL must start with http:// or https://, got '{}'", base_url),
                "Use the instance root, e.g. https://gitlab.example.com",
            ));
        }

        let auth_token = match file.token {
            Some(token) if !token.trim().is_empty() => token.trim().to_string(),
            _ => {
                return Err(invalid(
                    "GitLab access token is not set",
                    "Pass --token, export GITLAB_TOKEN, or set token in maven-flow.config.yml",
                ))
            }
        };

        let per_page = file.per_page.unwrap_or(DEFAULT_PER_PAGE);
        if per_page == 0 || per_page > MAX_PER_PAGE {
            return Err(invalid(
                format!("per_page must be between 1 and {}, got {}", MAX_PER_PAGE, per_page),
                "GitLab caps list pages at 100 items",
            ));
        }

        let timeout_secs = file
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(invalid(
                "request_timeout_secs must be greater than 0",
                "Use a timeout of a few seconds or more, e.g. 30",
            ));
        }

        let config = Self {
            base_url,
            auth_token,
            local_base_dir: file
                .base_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_BASE_DIR)),
            tool_binary_path: file
                .maven_bin
                .unwrap_or_else(|| PathBuf::from(DEFAULT_MAVEN_BIN)),
            report_path: file
                .output
                .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORT_PATH)),
            per_page,
            request_timeout: Duration::from_secs(timeout_secs),
            abort_on_fetch_error: file.abort_on_fetch_error.unwrap_or(true),
            group_patterns: file.groups.unwrap_or_default(),
            project_patterns: file.projects.unwrap_or_default(),
        };

        // Reject bad patterns before any request is made
        config.project_selector()?;

        Ok(config)
    }

    /// Builds a fresh selector from the configured patterns
    pub fn project_selector(&self) -> Result<ProjectSelector> {
        ProjectSelector::new(self.group_patterns.clone(), self.project_patterns.clone())
            .map_err(|e| invalid(format!("{:#}", e), "Fix the --group/--project patterns"))
    }
}

fn invalid(message: impl Into<String>, hint: impl Into<String>) -> anyhow::Error {
    FlowError::InvalidConfig {
        message: message.into(),
        hint: hint.into(),
    }
    .into()
}
