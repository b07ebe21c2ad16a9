//! Modal overlays
//!
//! Expired-subscription notice, plan picker, chat settings menu and the
//! analytics report preview. Each modal builds its lines separately from the
//! frame so the content can be checked without a terminal.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::app::{App, MenuEntry, Modal};
use crate::state::analytics::{mock_snapshot_ref, SwotKind};
use crate::state::subscription::{
    SubscriptionSnapshot, BLOCKED_FEATURES, PLANS, RENEWAL_BENEFITS,
};
use crate::state::theme::ThemePreference;

use super::components::Dialog;
use super::helpers::spinner_frame;
use super::theme::Palette;

/// Draw the active modal, if any, over `area`.
pub fn render_modal(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let Some(modal) = app.modal else {
        return;
    };
    let (title, lines, danger) = match modal {
        Modal::Expired => (
            "Подписка истекла!",
            expired_lines(&app.subscription, palette),
            true,
        ),
        Modal::Plans { cursor, pending } => (
            "Выберите подписку",
            plan_lines(cursor, pending, palette, app.tick_count),
            false,
        ),
        Modal::ChatMenu { cursor } => (
            "Меню",
            menu_lines(cursor, app.theme.preference(), palette),
            false,
        ),
        Modal::ReportPreview => ("Предпросмотр отчета", preview_lines(palette), false),
    };

    let inner = Dialog::new(title, lines.len() as u16)
        .width_range(44, 72)
        .danger(danger)
        .render(frame, area, palette);
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn heading(text: &str, palette: &Palette) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
    ))
}

fn hint(text: &str, palette: &Palette) -> Line<'static> {
    Line::from(Span::styled(text.to_string(), Style::default().fg(palette.dim)))
}

pub fn expired_lines(snapshot: &SubscriptionSnapshot, palette: &Palette) -> Vec<Line<'static>> {
    let ago = -snapshot.days_left;
    let mut lines = vec![
        Line::from(Span::styled(
            "Доступ ограничен",
            Style::default().fg(palette.error).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "Ваша подписка \"{}\" истекла {} дней назад. Продлите для восстановления доступа.",
                snapshot.plan_name,
                ago.max(0)
            ),
            Style::default().fg(palette.fg),
        )),
        Line::default(),
        heading("🚫 Заблокированные функции:", palette),
    ];
    lines.extend(
        BLOCKED_FEATURES
            .iter()
            .map(|feature| Line::from(Span::styled(format!("  {}", feature), Style::default().fg(palette.dim)))),
    );
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "🔥 Продлить со скидкой 30%",
        Style::default()
            .fg(palette.warning)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(hint("⏰ Предложение действует только 24 часа", palette));
    lines.push(heading("✨ Что вы получите:", palette));
    lines.extend(RENEWAL_BENEFITS.iter().map(|benefit| {
        Line::from(vec![
            Span::styled("  ✓ ", Style::default().fg(palette.success)),
            Span::styled(benefit.to_string(), Style::default().fg(palette.fg)),
        ])
    }));
    lines.push(Line::default());
    lines.push(hint("Enter выбрать подписку · Esc позже", palette));
    lines
}

/// Plan rows with the highlighted plan expanded into features and limitations.
pub fn plan_lines(cursor: usize, pending: bool, palette: &Palette, tick: u64) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (index, plan) in PLANS.iter().enumerate() {
        let selected = index == cursor;
        let name_style = if selected {
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.fg)
        };
        let mut spans = vec![
            Span::styled(if selected { "▶ " } else { "  " }, Style::default().fg(palette.accent)),
            Span::styled(plan.name, name_style),
            Span::styled(
                format!("  {}{}", plan.price, plan.period),
                Style::default().fg(palette.fg),
            ),
        ];
        if plan.popular {
            spans.push(Span::styled(
                "  ★ Популярный",
                Style::default().fg(palette.warning),
            ));
        }
        lines.push(Line::from(spans));
        if !selected {
            continue;
        }
        lines.push(hint(&format!("  {}", plan.description), palette));
        lines.extend(plan.features.iter().map(|feature| {
            Line::from(vec![
                Span::styled("    ✓ ", Style::default().fg(palette.success)),
                Span::styled(feature.to_string(), Style::default().fg(palette.fg)),
            ])
        }));
        lines.extend(plan.limitations.iter().map(|limitation| {
            Line::from(vec![
                Span::styled("    ✗ ", Style::default().fg(palette.error)),
                Span::styled(limitation.to_string(), Style::default().fg(palette.dim)),
            ])
        }));
    }
    lines.push(Line::default());
    lines.push(if pending {
        Line::from(Span::styled(
            format!("{} Оформление подписки...", spinner_frame(tick)),
            Style::default().fg(palette.accent),
        ))
    } else {
        hint("↑↓ выбор · Enter оформить · Esc закрыть", palette)
    });
    lines
}

pub fn menu_lines(
    cursor: usize,
    current: ThemePreference,
    palette: &Palette,
) -> Vec<Line<'static>> {
    let mut lines = vec![heading("Тема", palette)];
    for (index, entry) in MenuEntry::all().into_iter().enumerate() {
        let selected = index == cursor;
        let marker = if selected { "▶ " } else { "  " };
        let (label, color, suffix) = match entry {
            MenuEntry::Theme(preference) => (
                preference.label(),
                palette.fg,
                if preference == current { " ✓" } else { "" },
            ),
            MenuEntry::Action(action) => {
                let color = if action.is_danger() {
                    palette.error
                } else {
                    palette.fg
                };
                (action.label(), color, "")
            }
        };
        if index == ThemePreference::ALL.len() {
            lines.push(Line::default());
            lines.push(heading("Действия", palette));
        }
        let mut style = Style::default().fg(color);
        if selected {
            style = style.bg(palette.skeleton).add_modifier(Modifier::BOLD);
        }
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(palette.accent)),
            Span::styled(label, style),
            Span::styled(suffix, Style::default().fg(palette.success)),
        ]));
    }
    lines.push(Line::default());
    lines.push(hint("↑↓ выбор · Enter применить · Esc закрыть", palette));
    lines
}

pub fn preview_lines(palette: &Palette) -> Vec<Line<'static>> {
    let snapshot = mock_snapshot_ref();
    let profile = &snapshot.profile;
    let mut lines = vec![
        heading(&format!("{} · {}", profile.name, profile.position), palette),
        hint(
            &format!(
                "{} проектов · {}% успешных",
                profile.projects, profile.success_rate
            ),
            palette,
        ),
        Line::default(),
    ];
    lines.extend(snapshot.stats.iter().map(|tile| {
        Line::from(vec![
            Span::raw(format!("{} ", tile.icon)),
            Span::styled(
                tile.value.clone(),
                Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {}", tile.label), Style::default().fg(palette.dim)),
        ])
    }));
    lines.push(Line::default());
    lines.push(heading("SWOT-анализ", palette));
    lines.extend(SwotKind::ALL.iter().map(|kind| {
        hint(
            &format!(
                "  {} {}: {}",
                kind.icon(),
                kind.title(),
                snapshot.swot.entries(*kind).len()
            ),
            palette,
        )
    }));
    lines.push(Line::default());
    lines.push(hint("Enter/d скачать PDF · Esc закрыть", palette));
    lines
}
