use crate::dependency_scan::services::DependencyTreeParser;
use crate::ports::outbound::{DependencyResolution, DependencyResolver, ResolutionFailure};
use async_trait::async_trait;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::fs;
use tokio::process::Command;

/// MavenDependencyResolver adapter running `mvn dependency:tree`
///
/// This adapter implements the DependencyResolver port. It runs
///
/// ```text
/// <maven_bin> dependency:tree -Dverbose -DoutputFile=<output> -DoutputType=text
/// ```
///
/// with the pom's directory as working directory, waits for it without a
/// timeout, and parses the output file. Every failure turns into
/// `DependencyResolution::Failed` carrying the captured stdout and stderr.
pub struct MavenDependencyResolver {
    maven_bin: PathBuf,
}

impl MavenDependencyResolver {
    pub fn new(maven_bin: impl Into<PathBuf>) -> Self {
        Self {
            maven_bin: Self::locate_binary(maven_bin.into()),
        }
    }

    /// A bare program name is left to the PATH lookup. Any other relative
    /// path is anchored to our working directory, because the build runs
    /// inside the pom directory.
    fn locate_binary(maven_bin: PathBuf) -> PathBuf {
        if maven_bin.is_absolute() || maven_bin.components().count() < 2 {
            return maven_bin;
        }
        std::path::absolute(&maven_bin).unwrap_or(maven_bin)
    }

    /// Directory containing the pom, used as the build's working directory
    pub fn pom_directory(pom_path: &Path) -> PathBuf {
        match pom_path.parent() {
            Some(dir) if dir != Path::new("") => dir.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    /// Command-line arguments for the dependency plugin
    pub fn command_args(output_file: &Path) -> Vec<OsString> {
        let mut output_arg = OsString::from("-DoutputFile=");
        output_arg.push(output_file.as_os_str());

        vec![
            OsString::from("dependency:tree"),
            OsString::from("-Dverbose"),
            output_arg,
            OsString::from("-DoutputType=text"),
        ]
    }

    /// Maven resolves relative file parameters against the project directory,
    /// not against our working directory, so the output path must be absolute
    fn absolute_output(output_file: &Path) -> PathBuf {
        std::path::absolute(output_file).unwrap_or_else(|_| output_file.to_path_buf())
    }

    async fn remove_stale_output(output_file: &Path) -> Result<(), ResolutionFailure> {
        match fs::remove_file(output_file).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ResolutionFailure::new(format!(
                "Failed to remove stale dependency tree {}: {}",
                output_file.display(),
                e
            ))),
        }
    }

    async fn read_tree(output_file: &Path) -> DependencyResolution {
        let content = match fs::read(output_file).await {
            Ok(content) => content,
            Err(e) => {
                return DependencyResolution::Failed(ResolutionFailure::new(format!(
                    "Failed to open dependency tree {}: {}",
                    output_file.display(),
                    e
                )))
            }
        };

        match DependencyTreeParser::parse(content.as_slice()) {
            Ok(coordinates) => DependencyResolution::Resolved(coordinates),
            Err(e) => DependencyResolution::Failed(ResolutionFailure::new(format!(
                "Failed to read dependency tree {}: {}",
                output_file.display(),
                e
            ))),
        }
    }
}

#[async_trait]
impl DependencyResolver for MavenDependencyResolver {
    async fn resolve(&self, pom_path: &Path, output_file: &Path) -> DependencyResolution {
        let working_dir = Self::pom_directory(pom_path);
        let output_file = Self::absolute_output(output_file);

        if let Err(failure) = Self::remove_stale_output(&output_file).await {
            return DependencyResolution::Failed(failure);
        }

        let output = Command::new(&self.maven_bin)
            .args(Self::command_args(&output_file))
            .current_dir(&working_dir)
            .stdin(Stdio::null())
            .output()
            .await;

        let output = match output {
            Ok(output) => output,
            Err(e) => {
                return DependencyResolution::Failed(ResolutionFailure::new(format!(
                    "Failed to start {} in {}: {}",
                    self.maven_bin.display(),
                    working_dir.display(),
                    e
                )))
            }
        };

        if !output.status.success() {
            return DependencyResolution::Failed(
                ResolutionFailure::new(format!(
                    "{} dependency:tree exited with {} in {}",
                    self.maven_bin.display(),
                    output.status,
                    working_dir.display()
                ))
                .with_output(
                    String::from_utf8_lossy(&output.stdout).into_owned(),
                    String::from_utf8_lossy(&output.stderr).into_owned(),
                ),
            );
        }

        Self::read_tree(&output_file).await
    }
}
