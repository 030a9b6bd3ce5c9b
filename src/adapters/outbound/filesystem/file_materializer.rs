use crate::ports::outbound::FileMaterializer;
use crate::shared::error::FlowError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// FileSystemMaterializer adapter writing downloaded poms to local disk
///
/// This adapter implements the FileMaterializer port with create-or-truncate
/// semantics: parent directories are created as needed and an existing file
/// is replaced.
pub struct FileSystemMaterializer;

impl FileSystemMaterializer {
    pub fn new() -> Self {
        Self
    }

    fn write_error(destination: &Path, details: impl ToString) -> anyhow::Error {
        FlowError::FileWriteError {
            path: destination.to_path_buf(),
            details: details.to_string(),
        }
        .into()
    }
}

impl Default for FileSystemMaterializer {
    fn default() -> Self {
        Self::new()
    }
}

impl FileMaterializer for FileSystemMaterializer {
    fn materialize(&self, content: &[u8], destination: &Path) -> Result<()> {
        if let Some(parent) = destination.parent() {
            if parent != Path::new("") {
                fs::create_dir_all(parent).map_err(|e| {
                    Self::write_error(
                        destination,
                        format!("Failed to create directory {}: {}", parent.display(), e),
                    )
                })?;
            }
        }

        // Writing through a planted symlink would land outside the base directory
        validate_not_symlink(destination, "write")
            .map_err(|e| Self::write_error(destination, e))?;

        let mut file = File::create(destination).map_err(|e| Self::write_error(destination, e))?;
        file.write_all(content)
            .map_err(|e| Self::write_error(destination, e))?;
        file.flush().map_err(|e| Self::write_error(destination, e))?;

        Ok(())
    }
}
