//! Theme preference state.
//!
//! The user picks light, dark or "system"; the effective theme is resolved at
//! read time against the host colour-scheme signal. The preference is the only
//! durable state in the application.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::traits::ThemeStore;

/// What the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemePreference {
    /// Menu order.
    pub const ALL: [ThemePreference; 3] = [
        ThemePreference::Light,
        ThemePreference::Dark,
        ThemePreference::System,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        }
    }

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            ThemePreference::Light => "Светлая",
            ThemePreference::Dark => "Темная",
            ThemePreference::System => "Системная",
        }
    }

    /// Adjective used in the «Установлена … тема» confirmation.
    pub fn adjective(self) -> &'static str {
        match self {
            ThemePreference::Light => "светлая",
            ThemePreference::Dark => "темная",
            ThemePreference::System => "системная",
        }
    }

    /// Resolve against the host signal.
    pub fn resolve(self, system: EffectiveTheme) -> EffectiveTheme {
        match self {
            ThemePreference::Light => EffectiveTheme::Light,
            ThemePreference::Dark => EffectiveTheme::Dark,
            ThemePreference::System => system,
        }
    }
}

/// The theme actually used for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EffectiveTheme {
    #[default]
    Light,
    Dark,
}

impl EffectiveTheme {
    pub fn is_dark(self) -> bool {
        self == EffectiveTheme::Dark
    }
}

/// Theme state owned by the application.
pub struct ThemeState {
    preference: ThemePreference,
    system: EffectiveTheme,
    store: Arc<dyn ThemeStore>,
}

impl std::fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeState")
            .field("preference", &self.preference)
            .field("system", &self.system)
            .finish_non_exhaustive()
    }
}

impl ThemeState {
    /// Read the saved preference once. A missing or unreadable value falls
    /// back to [`ThemePreference::System`].
    pub fn load(store: Arc<dyn ThemeStore>, system: EffectiveTheme) -> Self {
        let preference = match store.load() {
            Ok(Some(saved)) => saved,
            Ok(None) => ThemePreference::default(),
            Err(e) => {
                tracing::warn!("Failed to load theme preference: {}", e);
                ThemePreference::default()
            }
        };
        tracing::debug!(
            "Theme loaded: preference={} system={:?}",
            preference.as_str(),
            system
        );
        Self {
            preference,
            system,
            store,
        }
    }

    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    pub fn system(&self) -> EffectiveTheme {
        self.system
    }

    pub fn effective(&self) -> EffectiveTheme {
        self.preference.resolve(self.system)
    }

    /// Change the preference and persist it.
    ///
    /// The in-memory value changes even when persisting fails; the error is
    /// returned so the caller can decide whether to tell the user.
    pub fn set_preference(&mut self, preference: ThemePreference) -> Result<(), StorageError> {
        self.preference = preference;
        tracing::info!("Theme preference set to {}", preference.as_str());
        self.store.save(preference)
    }

    /// Feed a new host signal. Returns `true` if the effective theme changed.
    pub fn update_system(&mut self, system: EffectiveTheme) -> bool {
        if self.system == system {
            return false;
        }
        let before = self.effective();
        self.system = system;
        let changed = before != self.effective();
        if changed {
            tracing::debug!("Host colour scheme changed to {:?}", system);
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::InMemoryThemeStore;

    #[test]
    fn test_system_preference_follows_host() {
        assert_eq!(
            ThemePreference::System.resolve(EffectiveTheme::Dark),
            EffectiveTheme::Dark
        );
        assert_eq!(
            ThemePreference::System.resolve(EffectiveTheme::Light),
            EffectiveTheme::Light
        );
    }

    #[test]
    fn test_explicit_preference_ignores_host() {
        assert_eq!(
            ThemePreference::Light.resolve(EffectiveTheme::Dark),
            EffectiveTheme::Light
        );
        assert_eq!(
            ThemePreference::Dark.resolve(EffectiveTheme::Light),
            EffectiveTheme::Dark
        );
    }

    #[test]
    fn test_load_defaults_to_system() {
        let store = Arc::new(InMemoryThemeStore::new());
        let state = ThemeState::load(store, EffectiveTheme::Dark);
        assert_eq!(state.preference(), ThemePreference::System);
        assert_eq!(state.effective(), EffectiveTheme::Dark);
    }

    #[test]
    fn test_load_uses_saved_value() {
        let store = Arc::new(InMemoryThemeStore::with_preference(ThemePreference::Light));
        let state = ThemeState::load(store, EffectiveTheme::Dark);
        assert_eq!(state.effective(), EffectiveTheme::Light);
    }

    #[test]
    fn test_load_falls_back_when_store_fails() {
        let store = Arc::new(InMemoryThemeStore::new());
        store.set_load_should_fail(true);
        let state = ThemeState::load(store, EffectiveTheme::Light);
        assert_eq!(state.preference(), ThemePreference::System);
    }

    #[test]
    fn test_set_preference_persists() {
        let store = Arc::new(InMemoryThemeStore::new());
        let mut state = ThemeState::load(store.clone(), EffectiveTheme::Light);
        state.set_preference(ThemePreference::Dark).unwrap();
        assert_eq!(store.saved(), Some(ThemePreference::Dark));
        assert_eq!(store.save_count(), 1);
        assert!(state.effective().is_dark());
    }

    #[test]
    fn test_set_preference_keeps_value_when_save_fails() {
        let store = Arc::new(InMemoryThemeStore::new());
        store.set_save_should_fail(true);
        let mut state = ThemeState::load(store, EffectiveTheme::Light);
        assert!(state.set_preference(ThemePreference::Dark).is_err());
        assert_eq!(state.preference(), ThemePreference::Dark);
    }

    #[test]
    fn test_update_system_reports_effective_change() {
        let store = Arc::new(InMemoryThemeStore::new());
        let mut state = ThemeState::load(store, EffectiveTheme::Light);
        assert!(state.update_system(EffectiveTheme::Dark));
        assert!(!state.update_system(EffectiveTheme::Dark));

        state.set_preference(ThemePreference::Light).unwrap();
        // Host changes no longer matter for an explicit preference
        assert!(!state.update_system(EffectiveTheme::Light));
        assert_eq!(state.system(), EffectiveTheme::Light);
    }

    #[test]
    fn test_preference_serde_is_lowercase() {
        let json = serde_json::to_string(&ThemePreference::Dark).unwrap();
        assert_eq!(json, "\"dark\"");
        let parsed: ThemePreference = serde_json::from_str("\"system\"").unwrap();
        assert_eq!(parsed, ThemePreference::System);
    }
}
