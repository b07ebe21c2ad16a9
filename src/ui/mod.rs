//! UI rendering for the mini-app
//!
//! One frame is laid out as:
//! - Body: the screen selected in the tab bar (chat, analytics or tools)
//! - Bottom: the tab bar with function-key hints
//! - Overlays: the active modal, then the toast stack on top of everything
//!
//! ## Responsive Layout System
//!
//! Render functions derive a [`LayoutContext`] from the area they are given and
//! use it for proportional sizing: bubble width on the chat screen, the number
//! of stat columns on analytics, dialog widths for modals and forms.
//!
//! Colours come from the [`Palette`] of the effective theme, resolved once per
//! frame.

mod analytics;
mod chat;
mod components;
mod helpers;
mod layout;
mod modals;
mod theme;
mod tools;

pub use layout::{Density, LayoutContext};
pub use theme::{palette, Palette, DARK, LIGHT};

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::{Block, Borders},
    Frame,
};

use crate::app::{App, Tab};
use analytics::render_analytics_screen;
use chat::render_chat_screen;
use components::{render_tab_selector, render_toasts};
use modals::render_modal;
use tools::render_tools_screen;

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the whole frame for the current app state.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let palette = palette(app.effective_theme());
    let ctx = LayoutContext::from_rect(area);

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.bg).fg(palette.fg)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Screen
            Constraint::Length(2), // Tab bar
        ])
        .split(area);

    let body = chunks[0].inner(ratatui::layout::Margin::new(1, 0));
    match app.tab {
        Tab::Chat => render_chat_screen(frame, body, app, palette),
        Tab::Analytics => render_analytics_screen(frame, body, app, palette),
        Tab::Tools => render_tools_screen(frame, body, app, palette),
    }

    let tab_bar = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(palette.border));
    let tab_inner = tab_bar.inner(chunks[1]);
    frame.render_widget(tab_bar, chunks[1]);
    frame.render_widget(render_tab_selector(app.tab, palette, &ctx), tab_inner);

    render_modal(frame, area, app, palette);
    render_toasts(frame, area, &app.notifications, palette, app.tick_count);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::Harness;
    use crate::app::Modal;
    use crate::startup::config::AppConfig;
    use crate::state::theme::ThemePreference;
    use chrono::NaiveDate;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn active() -> AppConfig {
        AppConfig::default().with_subscription_expiry(NaiveDate::from_ymd_opt(2027, 1, 1).unwrap())
    }

    fn draw(app: &App, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn screen_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[tokio::test]
    async fn test_render_chat_after_load() {
        let mut h = Harness::new(active());
        h.app.start();
        h.settle().await;
        let text = screen_text(&draw(&h.app, 100, 30));
        assert!(text.contains("AI-ассистент"));
        assert!(text.contains("Чат"));
        assert!(text.contains("Аналитика"));
    }

    #[tokio::test]
    async fn test_render_expired_modal_on_start() {
        let mut h = Harness::new(AppConfig::default());
        h.app.start();
        assert_eq!(h.app.modal, Some(Modal::Expired));
        let text = screen_text(&draw(&h.app, 100, 40));
        assert!(text.contains("Подписка истекла!"));
        assert!(text.contains("Доступ ограничен"));
    }

    #[tokio::test]
    async fn test_render_every_tab_in_small_terminal() {
        let mut h = Harness::new(active());
        h.app.start();
        h.settle().await;
        for tab in Tab::ALL {
            h.app.switch_tab(tab);
            h.settle().await;
            // Narrow terminals must not panic on any screen
            draw(&h.app, 40, 12);
            draw(&h.app, 120, 40);
        }
    }

    #[tokio::test]
    async fn test_background_follows_theme() {
        let mut h = Harness::new(active());
        h.app.start();
        h.app.set_theme(ThemePreference::Dark);
        let buffer = draw(&h.app, 80, 24);
        assert_eq!(buffer[(0, 0)].bg, DARK.bg);

        h.app.set_theme(ThemePreference::Light);
        let buffer = draw(&h.app, 80, 24);
        assert_eq!(buffer[(0, 0)].bg, LIGHT.bg);
    }

    #[tokio::test]
    async fn test_toast_drawn_over_screen() {
        let mut h = Harness::new(active());
        h.app.start();
        h.settle().await;
        h.app.notifications.show_info("Проверка", None);
        let text = screen_text(&draw(&h.app, 100, 30));
        assert!(text.contains("Проверка"));
    }
}
