//! Toast stack in the top-right corner.
//!
//! Oldest toast on top. Decaying toasts carry a shrinking bar that tracks
//! their remaining lifetime; loading toasts animate a spinner instead and
//! have no close hint.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, LineGauge, Paragraph},
    Frame,
};

use crate::state::notifications::{Notification, NotificationCenter, NotificationKind};
use crate::ui::helpers::{spinner_frame, truncate_string};
use crate::ui::theme::Palette;

pub const TOAST_WIDTH: u16 = 40;

/// Rows used by one toast, borders included.
pub fn toast_height(notification: &Notification) -> u16 {
    let message = u16::from(notification.message.is_some());
    let bar = u16::from(notification.decays());
    2 + 1 + message + bar
}

/// Leading glyph; loading toasts spin.
fn toast_icon(kind: NotificationKind, tick: u64) -> &'static str {
    match kind {
        NotificationKind::Loading => spinner_frame(tick),
        _ => kind.icon(),
    }
}

pub fn render_toasts(
    frame: &mut Frame,
    area: Rect,
    notifications: &NotificationCenter,
    palette: &Palette,
    tick: u64,
) {
    let width = TOAST_WIDTH.min(area.width.saturating_sub(2));
    if width < 10 {
        return;
    }
    let x = area.x + area.width - width - 1;
    let mut y = area.y + 1;
    let bottom = area.y + area.height;

    for notification in notifications.active() {
        let height = toast_height(notification);
        if y + height > bottom {
            break;
        }
        let toast_area = Rect::new(x, y, width, height);
        let fraction = notifications.remaining_fraction(notification.id);
        render_toast(frame, toast_area, notification, fraction, palette, tick);
        y += height;
    }
}

fn render_toast(
    frame: &mut Frame,
    area: Rect,
    notification: &Notification,
    fraction: Option<f64>,
    palette: &Palette,
    tick: u64,
) {
    let accent = palette.notification_accent(notification.kind);
    frame.render_widget(Clear, area);

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(accent))
        .style(Style::default().bg(palette.surface).fg(palette.fg));
    if notification.kind.is_closable() {
        block = block.title_bottom(
            Line::from(Span::styled(" Ctrl+X ", Style::default().fg(palette.dim))).right_aligned(),
        );
    }
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text_width = inner.width.saturating_sub(2) as usize;
    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("{} ", toast_icon(notification.kind, tick)),
            Style::default().fg(accent),
        ),
        Span::styled(
            truncate_string(&notification.title, text_width),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
    ])];
    if let Some(message) = &notification.message {
        lines.push(Line::from(Span::styled(
            format!("  {}", truncate_string(message, text_width)),
            Style::default().fg(palette.fg),
        )));
    }
    let text_rows = lines.len() as u16;
    frame.render_widget(
        Paragraph::new(lines),
        Rect {
            height: text_rows.min(inner.height),
            ..inner
        },
    );

    if let Some(ratio) = fraction.filter(|_| notification.decays()) {
        if inner.height > text_rows {
            let gauge = LineGauge::default()
                .filled_style(Style::default().fg(palette.notification_progress(notification.kind)))
                .unfilled_style(Style::default().fg(palette.border))
                .label("")
                .ratio(ratio.clamp(0.0, 1.0));
            frame.render_widget(
                gauge,
                Rect {
                    y: inner.y + text_rows,
                    height: 1,
                    ..inner
                },
            );
        }
    }
}
