//! Destination for exported documents.

use std::path::PathBuf;

use crate::error::ExportError;

/// Accepts a finished file and stores it where the user can find it.
pub trait DownloadSink: Send + Sync {
    /// Store `contents` under `file_name` and return the final location.
    fn save(&self, file_name: &str, contents: &[u8]) -> Result<PathBuf, ExportError>;
}
