//! Host colour scheme from the `COLORFGBG` environment variable.
//!
//! Terminals such as rxvt, Konsole and iTerm export `COLORFGBG="fg;bg"` (some
//! add a middle field). The background index decides the scheme: 0-6 and 8
//! are dark, 7 and 9-15 are light.

use crate::state::theme::EffectiveTheme;
use crate::traits::ColorSchemeProbe;

/// Name of the variable consulted.
pub const COLORFGBG: &str = "COLORFGBG";

/// Reads `COLORFGBG` on every poll.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvColorScheme;

impl ColorSchemeProbe for EnvColorScheme {
    fn detect(&self) -> EffectiveTheme {
        std::env::var(COLORFGBG)
            .ok()
            .and_then(|value| parse_colorfgbg(&value))
            .unwrap_or(EffectiveTheme::Light)
    }
}

/// Parse a `COLORFGBG` value. `None` if the background is not a number.
pub fn parse_colorfgbg(value: &str) -> Option<EffectiveTheme> {
    let background: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    match background {
        0..=6 | 8 => Some(EffectiveTheme::Dark),
        _ => Some(EffectiveTheme::Light),
    }
}
