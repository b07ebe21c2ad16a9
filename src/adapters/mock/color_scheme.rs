//! Settable host colour scheme.

use std::sync::{Arc, Mutex};

use crate::state::theme::EffectiveTheme;
use crate::traits::ColorSchemeProbe;

/// Reports whatever the test last set.
#[derive(Debug, Clone, Default)]
pub struct FixedColorScheme {
    scheme: Arc<Mutex<EffectiveTheme>>,
}

impl FixedColorScheme {
    pub fn new(scheme: EffectiveTheme) -> Self {
        Self {
            scheme: Arc::new(Mutex::new(scheme)),
        }
    }

    pub fn set(&self, scheme: EffectiveTheme) {
        *self.scheme.lock().unwrap() = scheme;
    }
}

impl ColorSchemeProbe for FixedColorScheme {
    fn detect(&self) -> EffectiveTheme {
        *self.scheme.lock().unwrap()
    }
}
