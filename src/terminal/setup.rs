//! Raw escape-sequence side of entering and leaving TUI mode.

use crossterm::{
    cursor::Show,
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Alternate screen, bracketed paste (for `/attach` paths) and mouse capture.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(
        writer,
        EnterAlternateScreen,
        EnableBracketedPaste,
        EnableMouseCapture
    )
}

/// Undo [`enter_tui_mode`] and raw mode. Errors are ignored so this is safe
/// to call more than once and from a panic hook.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(
        writer,
        DisableMouseCapture,
        DisableBracketedPaste,
        LeaveAlternateScreen,
        Show
    );
    let _ = writer.flush();
}

/// Restore stdout without access to the terminal handle.
pub fn restore_after_panic() {
    leave_tui_mode(&mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_writes_alternate_screen() {
        let mut buffer = Vec::new();
        enter_tui_mode(&mut buffer).unwrap();
        let written = String::from_utf8_lossy(&buffer);
        assert!(written.contains("\x1b[?1049h"));
        assert!(written.contains("\x1b[?2004h"));
    }

    #[test]
    fn test_leave_writes_show_cursor() {
        let mut buffer = Vec::new();
        leave_tui_mode(&mut buffer);
        let written = String::from_utf8_lossy(&buffer);
        assert!(written.contains("\x1b[?1049l"));
        assert!(written.contains("\x1b[?25h"));
    }
}
