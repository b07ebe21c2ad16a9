//! In-memory theme store.

use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::error::StorageError;
use crate::state::theme::ThemePreference;
use crate::traits::ThemeStore;

#[derive(Debug, Default)]
struct Inner {
    saved: Option<ThemePreference>,
    save_count: usize,
    load_should_fail: bool,
    save_should_fail: bool,
}

/// Theme store kept in memory, with switches to simulate IO failures.
#[derive(Debug, Clone, Default)]
pub struct InMemoryThemeStore {
    inner: Arc<Mutex<Inner>>,
}

impl InMemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_preference(preference: ThemePreference) -> Self {
        let store = Self::default();
        store.inner.lock().unwrap().saved = Some(preference);
        store
    }

    pub fn saved(&self) -> Option<ThemePreference> {
        self.inner.lock().unwrap().saved
    }

    pub fn save_count(&self) -> usize {
        self.inner.lock().unwrap().save_count
    }

    pub fn set_load_should_fail(&self, should_fail: bool) {
        self.inner.lock().unwrap().load_should_fail = should_fail;
    }

    pub fn set_save_should_fail(&self, should_fail: bool) {
        self.inner.lock().unwrap().save_should_fail = should_fail;
    }
}

fn simulated(op: &str) -> io::Error {
    io::Error::new(io::ErrorKind::Other, format!("simulated {} failure", op))
}

impl ThemeStore for InMemoryThemeStore {
    fn load(&self) -> Result<Option<ThemePreference>, StorageError> {
        let inner = self.inner.lock().unwrap();
        if inner.load_should_fail {
            return Err(StorageError::Read {
                path: PathBuf::from("memory"),
                source: simulated("load"),
            });
        }
        Ok(inner.saved)
    }

    fn save(&self, preference: ThemePreference) -> Result<(), StorageError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.save_should_fail {
            return Err(StorageError::Write {
                path: PathBuf::from("memory"),
                source: simulated("save"),
            });
        }
        inner.saved = Some(preference);
        inner.save_count += 1;
        Ok(())
    }
}
