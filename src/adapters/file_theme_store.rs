//! JSON file theme store.
//!
//! Stores `{"theme": "<preference>"}` in `theme.json` under the data directory.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::state::theme::ThemePreference;
use crate::traits::ThemeStore;

/// File name of the stored preference.
pub const THEME_FILE: &str = "theme.json";

#[derive(Debug, Serialize, Deserialize)]
struct ThemeFile {
    theme: ThemePreference,
}

/// Theme store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct FileThemeStore {
    path: PathBuf,
}

impl FileThemeStore {
    /// Store the preference in `<data_dir>/theme.json`.
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(THEME_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ThemeStore for FileThemeStore {
    fn load(&self) -> Result<Option<ThemePreference>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(&self.path).map_err(|source| StorageError::Read {
            path: self.path.clone(),
            source,
        })?;
        let file: ThemeFile = serde_json::from_str(&json)?;
        Ok(Some(file.theme))
    }

    fn save(&self, preference: ThemePreference) -> Result<(), StorageError> {
        let write_err = |source| StorageError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(write_err)?;
            }
        }

        let file = File::create(&self.path).map_err(write_err)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &ThemeFile { theme: preference })?;
        writer.flush().map_err(write_err)
    }
}
