//! Host colour-scheme signal.

use crate::state::theme::EffectiveTheme;

/// Reports whether the host environment prefers a light or dark scheme.
///
/// Polled periodically while the app runs, so implementations should be cheap.
pub trait ColorSchemeProbe: Send + Sync {
    fn detect(&self) -> EffectiveTheme;
}
