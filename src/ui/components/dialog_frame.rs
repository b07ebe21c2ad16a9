//! Centered overlay with a rounded border.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

use crate::ui::layout::{Density, LayoutContext};
use crate::ui::theme::Palette;

/// A dialog sized around `rows` lines of content.
#[derive(Debug, Clone)]
pub struct Dialog<'a> {
    title: &'a str,
    rows: u16,
    min_width: u16,
    max_width: u16,
    danger: bool,
}

impl<'a> Dialog<'a> {
    pub fn new(title: &'a str, rows: u16) -> Self {
        Self {
            title,
            rows,
            min_width: 30,
            max_width: 60,
            danger: false,
        }
    }

    pub fn width_range(mut self, min: u16, max: u16) -> Self {
        self.min_width = min;
        self.max_width = max;
        self
    }

    /// Paint the border and title in the error colour.
    pub fn danger(mut self, danger: bool) -> Self {
        self.danger = danger;
        self
    }

    fn width_in(&self, area: Rect) -> u16 {
        let ctx = LayoutContext::from_rect(area);
        let width = match ctx.density() {
            Density::Cramped => self.max_width,
            Density::Compact => ctx.share(80, self.min_width, self.max_width),
            Density::Roomy => ctx.share(50, self.min_width, self.max_width),
        };
        width.min(area.width.saturating_sub(2))
    }

    /// Where the dialog lands inside `area`, borders included.
    pub fn placement(&self, area: Rect) -> Rect {
        let width = self.width_in(area);
        let height = (self.rows + 2).min(area.height);
        Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        }
    }

    /// Clears the background, draws the frame and returns the content area.
    pub fn render(&self, frame: &mut Frame, area: Rect, palette: &Palette) -> Rect {
        let outer = self.placement(area);
        let accent = if self.danger { palette.error } else { palette.border };
        let title_fg = if self.danger { palette.error } else { palette.fg };

        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", self.title),
                Style::default().fg(title_fg).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(accent))
            .style(Style::default().bg(palette.surface).fg(palette.fg));

        let inner = block.inner(outer);
        frame.render_widget(Clear, outer);
        frame.render_widget(block, outer);
        inner
    }
}
