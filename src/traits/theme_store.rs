//! Theme preference persistence.

use crate::error::StorageError;
use crate::state::theme::ThemePreference;

/// Durable key-value slot holding the theme preference.
///
/// Read once at startup and written on every change.
pub trait ThemeStore: Send + Sync {
    /// Load the stored preference, `Ok(None)` if nothing was saved yet.
    fn load(&self) -> Result<Option<ThemePreference>, StorageError>;

    /// Persist the preference, replacing any previous value.
    fn save(&self, preference: ThemePreference) -> Result<(), StorageError>;
}
