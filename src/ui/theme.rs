//! Color palettes for the UI.
//!
//! One palette per effective theme. Render functions take the palette from
//! [`palette`] instead of hard-coding colors, so switching the preference
//! recolors the next frame.

use ratatui::style::Color;

use crate::state::notifications::NotificationKind;
use crate::state::subscription::SubscriptionStatus;
use crate::state::theme::EffectiveTheme;

/// Colors used by every screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background
    pub bg: Color,
    /// Card and dialog background
    pub surface: Color,
    /// Primary text
    pub fg: Color,
    /// Secondary text, placeholders, hints
    pub dim: Color,
    pub border: Color,
    /// Selection, links and the selected tab
    pub accent: Color,
    /// Outgoing chat bubble
    pub bubble_user: Color,
    /// Incoming chat bubble
    pub bubble_assistant: Color,
    /// Skeleton placeholder blocks
    pub skeleton: Color,
    pub success: Color,
    pub error: Color,
    pub info: Color,
    pub warning: Color,
}

pub const LIGHT: Palette = Palette {
    bg: Color::Rgb(249, 250, 251),
    surface: Color::Rgb(255, 255, 255),
    fg: Color::Rgb(17, 24, 39),
    dim: Color::Rgb(107, 114, 128),
    border: Color::Rgb(209, 213, 219),
    accent: Color::Rgb(37, 99, 235),
    bubble_user: Color::Rgb(219, 234, 254),
    bubble_assistant: Color::Rgb(243, 244, 246),
    skeleton: Color::Rgb(229, 231, 235),
    success: Color::Rgb(22, 163, 74),
    error: Color::Rgb(220, 38, 38),
    info: Color::Rgb(37, 99, 235),
    warning: Color::Rgb(217, 119, 6),
};

pub const DARK: Palette = Palette {
    bg: Color::Rgb(17, 24, 39),
    surface: Color::Rgb(31, 41, 55),
    fg: Color::Rgb(243, 244, 246),
    dim: Color::Rgb(156, 163, 175),
    border: Color::Rgb(75, 85, 99),
    accent: Color::Rgb(96, 165, 250),
    bubble_user: Color::Rgb(30, 58, 138),
    bubble_assistant: Color::Rgb(55, 65, 81),
    skeleton: Color::Rgb(55, 65, 81),
    success: Color::Rgb(74, 222, 128),
    error: Color::Rgb(248, 113, 113),
    info: Color::Rgb(96, 165, 250),
    warning: Color::Rgb(251, 191, 36),
};

pub fn palette(theme: EffectiveTheme) -> &'static Palette {
    if theme.is_dark() {
        &DARK
    } else {
        &LIGHT
    }
}

impl Palette {
    /// Accent of a toast: icon and title color.
    pub fn notification_accent(&self, kind: NotificationKind) -> Color {
        match kind {
            NotificationKind::Success => self.success,
            NotificationKind::Error => self.error,
            NotificationKind::Info => self.info,
            NotificationKind::Loading => self.accent,
        }
    }

    /// Fill of the shrinking lifetime bar.
    pub fn notification_progress(&self, kind: NotificationKind) -> Color {
        match kind {
            NotificationKind::Success => self.success,
            NotificationKind::Error => self.error,
            NotificationKind::Info | NotificationKind::Loading => self.info,
        }
    }

    pub fn subscription(&self, status: SubscriptionStatus) -> Color {
        match status {
            SubscriptionStatus::Active => self.success,
            SubscriptionStatus::ExpiringSoon => self.warning,
            SubscriptionStatus::Expired => self.error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_follows_effective_theme() {
        assert_eq!(palette(EffectiveTheme::Dark), &DARK);
        assert_eq!(palette(EffectiveTheme::Light), &LIGHT);
    }

    #[test]
    fn test_status_colors_differ() {
        let p = &LIGHT;
        assert_ne!(
            p.subscription(SubscriptionStatus::Active),
            p.subscription(SubscriptionStatus::Expired)
        );
        assert_eq!(p.notification_accent(NotificationKind::Error), p.error);
    }
}
