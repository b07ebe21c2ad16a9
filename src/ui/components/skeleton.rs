//! Skeleton placeholder shown while a section is loading.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::theme::Palette;

/// Relative bar widths, cycled over the rows.
const ROW_WIDTHS: [u16; 4] = [100, 80, 90, 60];

/// Width of each placeholder row for an area `width` wide.
pub fn skeleton_rows(width: u16, rows: u16) -> Vec<u16> {
    (0..rows)
        .map(|i| {
            let pct = ROW_WIDTHS[i as usize % ROW_WIDTHS.len()];
            ((width as u32 * pct as u32) / 100).max(1) as u16
        })
        .collect()
}

/// Fill `area` with pulsing placeholder bars separated by blank rows.
pub fn render_skeleton(frame: &mut Frame, area: Rect, palette: &Palette, tick: u64) {
    // Pulse between the skeleton color and the border color every 600 ms
    let color = if (tick / 12) % 2 == 0 {
        palette.skeleton
    } else {
        palette.border
    };
    let bar_rows = area.height.div_ceil(2);
    let mut lines = Vec::with_capacity(area.height as usize);
    for (i, width) in skeleton_rows(area.width, bar_rows).into_iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(
            "█".repeat(width as usize),
            Style::default().fg(color),
        )));
    }
    frame.render_widget(Paragraph::new(lines), area);
}
