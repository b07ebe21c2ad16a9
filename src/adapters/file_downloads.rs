//! Downloads folder sink.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ExportError;
use crate::traits::DownloadSink;

/// Writes files into a directory, creating it on first use.
#[derive(Debug, Clone)]
pub struct DirectoryDownloads {
    dir: PathBuf,
}

impl DirectoryDownloads {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadSink for DirectoryDownloads {
    fn save(&self, file_name: &str, contents: &[u8]) -> Result<PathBuf, ExportError> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(|source| ExportError::PrepareTarget {
                path: self.dir.clone(),
                source,
            })?;
        }
        let path = self.dir.join(file_name);
        fs::write(&path, contents).map_err(|source| ExportError::Write {
            path: path.clone(),
            source,
        })?;
        tracing::info!("Saved download {:?} ({} bytes)", path, contents.len());
        Ok(path)
    }
}
