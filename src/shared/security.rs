use crate::shared::error::FlowError;
use crate::shared::Result;
use std::fs;
use std::path::{Component, Path};

/// Maximum length of a single remote-supplied path (group, project, branch or
/// repository-relative file path)
pub const MAX_REMOTE_PATH_LENGTH: usize = 1024;

/// Validates a path segment that came from the source-control service
/// before it is joined under the local base directory.
///
/// Group names, project names, branch names and repository tree paths are all
/// controlled by whoever can push to the server. Joining them blindly would let
/// a branch called `../../outside` write files anywhere on disk.
///
/// # Errors
/// Returns `FlowError::UnsafePath` if the value:
/// - is empty or longer than `MAX_REMOTE_PATH_LENGTH`
/// - contains a NUL byte
/// - is absolute or carries a drive/root prefix
/// - contains a `..` segment
pub fn validate_remote_path(value: &str, description: &str) -> Result<()> {
    let reject = |reason: String| -> Result<()> {
        Err(FlowError::UnsafePath {
            path: value.to_string(),
            reason,
            hint: format!(
                "The {} reported by GitLab cannot be mapped safely under the local base directory",
                description
            ),
        }
        .into())
    };

    if value.is_empty() {
        return reject(format!("{} is empty", description));
    }

    if value.len() > MAX_REMOTE_PATH_LENGTH {
        return reject(format!(
            "{} is too long ({} bytes). Maximum allowed: {} bytes",
            description,
            value.len(),
            MAX_REMOTE_PATH_LENGTH
        ));
    }

    if value.contains('\0') {
        return reject(format!("{} contains a NUL byte", description));
    }

    for component in Path::new(value).components() {
        match component {
            Component::ParentDir => {
                return reject(format!(
                    "{} contains '..' which is not allowed",
                    description
                ))
            }
            Component::RootDir | Component::Prefix(_) => {
                return reject(format!("{} is an absolute path", description))
            }
            Component::CurDir | Component::Normal(_) => {}
        }
    }

    Ok(())
}

/// Validates that a path is not a symbolic link
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
/// A path that does not exist yet passes.
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => {
            anyhow::bail!(
                "Failed to read metadata for {} operation on {}: {}",
                operation,
                path.display(),
                e
            )
        }
    };

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        );
    }

    Ok(())
}
