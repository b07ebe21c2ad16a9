//! Helper functions and constants for UI rendering
//!
//! Spinner frames, width-aware truncation and small rect utilities.

use ratatui::layout::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Spinner frames for loading toasts and busy indicators
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Typing indicator frames
pub const TYPING_FRAMES: [&str; 4] = ["·  ", "·· ", "···", " ··"];

/// Spinner glyph for the given tick. One frame every two ticks (100 ms).
pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER_FRAMES[(tick / 2) as usize % SPINNER_FRAMES.len()]
}

pub fn typing_frame(tick: u64) -> &'static str {
    TYPING_FRAMES[(tick / 6) as usize % TYPING_FRAMES.len()]
}

/// Get inner rect with margin
pub fn inner_rect(area: Rect, margin: u16) -> Rect {
    Rect {
        x: area.x + margin,
        y: area.y + margin,
        width: area.width.saturating_sub(margin * 2),
        height: area.height.saturating_sub(margin * 2),
    }
}

/// Truncate to at most `max_width` display columns, ending with `…`.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Split `text` into lines of at most `width` columns, breaking at spaces
/// where possible.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_width = 0;
        for word in paragraph.split(' ') {
            let word_width = word.width();
            if line_width > 0 && line_width + 1 + word_width > width {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }
            if line_width > 0 {
                line.push(' ');
                line_width += 1;
            }
            if word_width > width {
                // Hard-break words longer than a line
                for c in word.chars() {
                    let w = c.width().unwrap_or(0);
                    if line_width + w > width {
                        lines.push(std::mem::take(&mut line));
                        line_width = 0;
                    }
                    line.push(c);
                    line_width += w;
                }
            } else {
                line.push_str(word);
                line_width += word_width;
            }
        }
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("Задачи", 10), "Задачи");
        assert_eq!(truncate_string("Маркетинговая стратегия", 8), "Маркети…");
        assert_eq!(truncate_string("abc", 0), "");
    }

    #[test]
    fn test_wrap_text() {
        assert_eq!(wrap_text("один два три", 8), vec!["один два", "три"]);
        assert_eq!(wrap_text("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert_eq!(wrap_text("a\nb", 10), vec!["a", "b"]);
    }

    #[test]
    fn test_spinner_frame_cycles() {
        assert_eq!(spinner_frame(0), "⠋");
        assert_eq!(spinner_frame(2), "⠙");
        assert_eq!(spinner_frame(20), "⠋");
    }

    #[test]
    fn test_inner_rect() {
        let r = inner_rect(Rect::new(0, 0, 10, 10), 1);
        assert_eq!(r, Rect::new(1, 1, 8, 8));
    }
}
