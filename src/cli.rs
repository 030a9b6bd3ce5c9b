use clap::Parser;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::config::ConfigFile;

/// Report the Maven dependencies of every branch in a GitLab instance
#[derive(Parser)]
#[command(name = "maven-flow")]
#[command(version)]
#[command(
    about = "Report the Maven dependencies of every branch in a GitLab instance",
    long_about = "Walks GitLab groups, sub-groups, projects and branches, mirrors every pom.xml \
                  to disk, runs `mvn dependency:tree` against each root pom, and writes the \
                  resolved dependencies to a CSV report."
)]
pub struct Args {
    /// Path to a config file (defaults to ./maven-flow.config.yml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// GitLab instance URL, e.g. https://gitlab.example.com
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// GitLab personal access token with read_api scope
    #[arg(long, env = "GITLAB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Directory under which pom files are mirrored
    #[arg(long, value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// Maven executable
    #[arg(long, value_name = "PATH")]
    pub maven_bin: Option<PathBuf>,

    /// CSV report path
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Only scan groups matching patterns (supports wildcards: *)
    /// Can be specified multiple times: -g "platform" -g "team-*"
    #[arg(short, long = "group", value_name = "PATTERN")]
    pub groups: Vec<String>,

    /// Only scan projects matching patterns (supports wildcards: *)
    /// Can be specified multiple times: -p "billing" -p "*-service"
    #[arg(short, long = "project", value_name = "PATTERN")]
    pub projects: Vec<String>,

    /// Items per page on GitLab list requests (1-100)
    #[arg(long, value_name = "N")]
    pub per_page: Option<u32>,

    /// Skip branches whose pom files cannot be downloaded instead of aborting
    #[arg(long)]
    pub skip_fetch_errors: bool,

    /// Only print warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Values given on the command line, in config-file shape
    pub fn overrides(&self) -> ConfigFile {
        ConfigFile {
            base_url: self.base_url.clone(),
            token: self.token.clone(),
            base_dir: self.base_dir.clone(),
            maven_bin: self.maven_bin.clone(),
            output: self.output.clone(),
            per_page: self.per_page,
            request_timeout_secs: None,
            abort_on_fetch_error: self.skip_fetch_errors.then_some(false),
            groups: non_empty(&self.groups),
            projects: non_empty(&self.projects),
            unknown_fields: HashMap::new(),
        }
    }
}

fn non_empty(patterns: &[String]) -> Option<Vec<String>> {
    if patterns.is_empty() {
        None
    } else {
        Some(patterns.to_vec())
    }
}
