//! Chat screen rendering
//!
//! Message bubbles (assistant on the left, user on the right), the typing
//! indicator, the attachment chip and the input box. The history is pinned to
//! the bottom: when it does not fit, the oldest lines scroll off the top.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::state::chat::{format_file_size, Attachment, Author, ChatMessage, ChatScreen};

use super::components::{compact_badge, render_skeleton};
use super::helpers::{spinner_frame, truncate_string, typing_frame, wrap_text};
use super::layout::LayoutContext;
use super::theme::Palette;

pub fn render_chat_screen(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let ctx = LayoutContext::from_rect(area);
    let chip_height = u16::from(app.chat.attachment.is_some());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),           // Title + badge
            Constraint::Min(3),              // History
            Constraint::Length(chip_height), // Attachment chip
            Constraint::Length(3),           // Input
        ])
        .split(area);

    render_title(frame, chunks[0], app, palette);

    let history = chunks[1];
    if app.chat.loaded {
        let lines = history_lines(&app.chat, &ctx, history.width, palette, app.tick_count);
        let skip = lines.len().saturating_sub(history.height as usize);
        frame.render_widget(
            Paragraph::new(lines.into_iter().skip(skip).collect::<Vec<_>>()),
            history,
        );
    } else {
        render_skeleton(frame, history, palette, app.tick_count);
    }

    if let Some(file) = &app.chat.attachment {
        frame.render_widget(Paragraph::new(attachment_chip(file, palette)), chunks[2]);
    }

    render_input(frame, chunks[3], app, palette);
}

fn render_title(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let mut spans = vec![Span::styled(
        "AI-ассистент",
        Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
    )];
    spans.push(Span::styled(
        "  Ctrl+O меню · Ctrl+P тарифы",
        Style::default().fg(palette.dim),
    ));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
    frame.render_widget(
        Paragraph::new(compact_badge(&app.subscription, palette).right_aligned()),
        area,
    );
}

/// Every history line, oldest first, followed by the typing indicator.
pub fn history_lines(
    chat: &ChatScreen,
    ctx: &LayoutContext,
    width: u16,
    palette: &Palette,
    tick: u64,
) -> Vec<Line<'static>> {
    let bubble_width = ctx.bubble_width().min(width.saturating_sub(2)).max(8);
    let mut lines = Vec::new();
    for message in &chat.messages {
        lines.extend(message_lines(message, bubble_width, palette));
        lines.push(Line::default());
    }
    if chat.typing {
        lines.push(Line::from(vec![
            Span::styled(" ", Style::default()),
            Span::styled(
                typing_frame(tick),
                Style::default()
                    .fg(palette.dim)
                    .bg(palette.bubble_assistant),
            ),
            Span::styled(" печатает...", Style::default().fg(palette.dim)),
        ]));
    }
    lines
}

/// One bubble: padded text rows, an optional file row and the time.
pub fn message_lines(message: &ChatMessage, bubble_width: u16, palette: &Palette) -> Vec<Line<'static>> {
    let (bg, outgoing) = match message.author {
        Author::User => (palette.bubble_user, true),
        Author::Assistant => (palette.bubble_assistant, false),
    };
    let text_width = bubble_width.saturating_sub(2) as usize;
    let bubble_style = Style::default().fg(palette.fg).bg(bg);

    let mut rows: Vec<String> = Vec::new();
    if let Some(file) = &message.attachment {
        let icon = if file.is_image() { "🖼" } else { "📎" };
        rows.push(truncate_string(
            &format!("{} {} ({})", icon, file.name, format_file_size(file.size)),
            text_width,
        ));
    }
    if !message.text.is_empty() {
        rows.extend(wrap_text(&message.text, text_width));
    }
    let inner_width = rows.iter().map(|r| r.width()).max().unwrap_or(0);

    let mut lines: Vec<Line<'static>> = rows
        .into_iter()
        .map(|row| {
            let pad = inner_width.saturating_sub(row.width());
            let line = Line::from(Span::styled(
                format!(" {}{} ", row, " ".repeat(pad)),
                bubble_style,
            ));
            if outgoing {
                line.right_aligned()
            } else {
                line
            }
        })
        .collect();

    let time = Line::from(Span::styled(
        message.time_label(),
        Style::default().fg(palette.dim),
    ));
    lines.push(if outgoing { time.right_aligned() } else { time });
    lines
}

fn attachment_chip(file: &Attachment, palette: &Palette) -> Line<'static> {
    Line::from(vec![
        Span::styled("📎 ", Style::default().fg(palette.accent)),
        Span::styled(file.name.clone(), Style::default().fg(palette.fg)),
        Span::styled(
            format!(" ({})", format_file_size(file.size)),
            Style::default().fg(palette.dim),
        ),
        Span::styled("  /detach чтобы убрать", Style::default().fg(palette.dim)),
    ])
}

fn render_input(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let expired = app.subscription.is_expired;
    let border = if expired { palette.error } else { palette.accent };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border));
    if app.chat.sending {
        block = block.title(Span::styled(
            format!(" {} Отправка ", spinner_frame(app.tick_count)),
            Style::default().fg(palette.dim),
        ));
    }

    let line = if app.chat.input.is_empty() {
        Line::from(vec![
            Span::styled("█", Style::default().fg(palette.fg)),
            Span::styled(
                ChatScreen::placeholder(expired),
                Style::default().fg(palette.dim),
            ),
        ])
    } else {
        // Show the tail of long input so the cursor stays visible
        let visible = area.width.saturating_sub(3) as usize;
        let chars: Vec<char> = app.chat.input.chars().collect();
        let start = chars.len().saturating_sub(visible);
        let shown: String = chars[start..].iter().collect();
        Line::from(vec![
            Span::styled(shown, Style::default().fg(palette.fg)),
            Span::styled("█", Style::default().fg(palette.fg)),
        ])
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}
