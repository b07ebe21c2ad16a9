//! In-memory download sink.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::error::ExportError;
use crate::traits::DownloadSink;

#[derive(Debug, Default)]
struct Inner {
    files: Vec<(String, Vec<u8>)>,
    fail_with: Option<String>,
}

/// Keeps "downloaded" files in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDownloads {
    inner: Arc<Mutex<Inner>>,
}

impl InMemoryDownloads {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent save fail with `message`.
    pub fn fail_with(&self, message: &str) {
        self.inner.lock().unwrap().fail_with = Some(message.to_string());
    }

    /// Saved files as `(name, contents)`, in save order.
    pub fn files(&self) -> Vec<(String, Vec<u8>)> {
        self.inner.lock().unwrap().files.clone()
    }

    /// Contents of the most recent file as UTF-8.
    pub fn last_text(&self) -> Option<String> {
        let inner = self.inner.lock().unwrap();
        inner
            .files
            .last()
            .map(|(_, bytes)| String::from_utf8_lossy(bytes).into_owned())
    }
}

impl DownloadSink for InMemoryDownloads {
    fn save(&self, file_name: &str, contents: &[u8]) -> Result<PathBuf, ExportError> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(message) = &inner.fail_with {
            return Err(ExportError::Rejected(message.clone()));
        }
        inner.files.push((file_name.to_string(), contents.to_vec()));
        Ok(PathBuf::from("memory").join(file_name))
    }
}
