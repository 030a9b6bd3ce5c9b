use crate::shared::Result;
use std::path::Path;

/// FileMaterializer port for writing downloaded files to local storage
pub trait FileMaterializer {
    /// Writes `content` to `destination`, creating parent directories
    ///
    /// Existing files are truncated and overwritten, so materializing the
    /// same pom twice is not an error.
    ///
    /// # Errors
    /// Returns an error if a directory or the file cannot be created or written
    fn materialize(&self, content: &[u8], destination: &Path) -> Result<()>;
}
