//! Subscription badge.
//!
//! The compact form sits in the header of every screen; the full form adds
//! the plan name, expiry date and status message on the analytics screen.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::state::subscription::{SubscriptionSnapshot, SubscriptionStatus};
use crate::ui::theme::Palette;

fn status_icon(status: SubscriptionStatus) -> &'static str {
    match status {
        SubscriptionStatus::Active => "●",
        SubscriptionStatus::ExpiringSoon => "◐",
        SubscriptionStatus::Expired => "○",
    }
}

/// `● 12 дн.` style badge.
pub fn compact_badge(snapshot: &SubscriptionSnapshot, palette: &Palette) -> Line<'static> {
    let status = snapshot.status();
    let color = palette.subscription(status);
    Line::from(vec![
        Span::styled(format!("{} ", status_icon(status)), Style::default().fg(color)),
        Span::styled(
            snapshot.badge_text(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ])
}

/// Three lines: plan and badge, expiry date, status message.
pub fn full_badge(snapshot: &SubscriptionSnapshot, palette: &Palette) -> Vec<Line<'static>> {
    let color = palette.subscription(snapshot.status());
    let mut first = vec![Span::styled(
        format!("Подписка «{}»  ", snapshot.plan_name),
        Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
    )];
    first.extend(compact_badge(snapshot, palette).spans);

    vec![
        Line::from(first),
        Line::from(Span::styled(
            format!("До {}", snapshot.expiry_label()),
            Style::default().fg(palette.dim),
        )),
        Line::from(Span::styled(
            snapshot.status_message(),
            Style::default().fg(color),
        )),
    ]
}
