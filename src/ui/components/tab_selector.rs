//! Tab Selector Component
//!
//! The bottom tab bar. Uses a `▶` marker for the selected tab and falls back
//! to icons only on compact terminals.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::app::Tab;
use crate::ui::layout::LayoutContext;
use crate::ui::theme::Palette;

/// Render the tab bar as a single centered line.
///
/// Each tab shows its function key so the shortcut is discoverable.
pub fn render_tab_selector(selected: Tab, palette: &Palette, ctx: &LayoutContext) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();

    for (idx, tab) in Tab::ALL.iter().enumerate() {
        let is_selected = *tab == selected;

        let label = if ctx.is_compact() {
            tab.icon().to_string()
        } else {
            format!("{} {}", tab.icon(), tab.title())
        };
        let key = format!("F{} ", idx + 1);

        if is_selected {
            spans.push(Span::styled(
                "▶ ".to_string(),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(key, Style::default().fg(palette.dim)));
            spans.push(Span::styled(
                label,
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::raw("  ".to_string()));
            spans.push(Span::styled(key, Style::default().fg(palette.dim)));
            spans.push(Span::styled(label, Style::default().fg(palette.dim)));
        }

        if idx < Tab::ALL.len() - 1 {
            let spacing = if ctx.is_extra_small() { "  " } else { "    " };
            spans.push(Span::raw(spacing.to_string()));
        }
    }

    Line::from(spans).centered()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::LIGHT;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_marker_precedes_selected_tab() {
        let ctx = LayoutContext::new(120, 40);
        let line = render_tab_selector(Tab::Analytics, &LIGHT, &ctx);
        let text = text(&line);

        let marker = text.find('▶').unwrap();
        assert!(marker > text.find("Чат").unwrap());
        assert!(marker < text.find("Аналитика").unwrap());
        assert!(text.contains("F3"));
    }

    #[test]
    fn test_compact_uses_icons_only() {
        let ctx = LayoutContext::new(50, 14);
        let line = render_tab_selector(Tab::Chat, &LIGHT, &ctx);
        let text = text(&line);
        assert!(text.contains("💬"));
        assert!(!text.contains("Инструменты"));
    }
}
