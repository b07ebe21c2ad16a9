//! Command registry for dispatching keyboard input to commands.
//!
//! The [`CommandRegistry`] maps key events to commands based on the current
//! application context. It handles:
//! - Always-on bindings (Ctrl+C, Ctrl+X)
//! - Modal bindings (expired notice, plan picker, menus, forms)
//! - Global bindings (tab switching)
//! - Screen bindings (per tab)
//! - Character input into the chat line or a form field

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::command::Command;
use super::context::{InputContext, Overlay};
use super::keybindings::{KeyCombo, KeybindingConfig};

/// Registry for dispatching key events to commands.
///
/// Priority, highest first:
/// 1. Ctrl+C quits and Ctrl+X closes a toast, even over a modal
/// 2. Modal bindings; an open modal swallows every other key
/// 3. Global bindings (F1-F3, Tab, Shift+Tab)
/// 4. Screen bindings for the selected tab
/// 5. Printable characters when the chat input accepts text
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    config: KeybindingConfig,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Plain or shifted character, no Ctrl/Alt/Super.
fn printable(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
        {
            Some(c)
        }
        _ => None,
    }
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            config: KeybindingConfig::new(),
        }
    }

    /// Dispatches a key event to a command based on the current context.
    ///
    /// Returns `None` if the key should be ignored.
    pub fn dispatch(&self, key: KeyEvent, context: &InputContext) -> Option<Command> {
        let combo = KeyCombo::new(key.code, key.modifiers);

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => return Some(Command::Quit),
                KeyCode::Char('x') => return Some(Command::DismissToast),
                _ => {}
            }
        }

        if context.has_overlay() {
            return Some(self.dispatch_modal(key, context));
        }

        if let Some(cmd) = self.config.get_global(&combo) {
            return Some(cmd.clone());
        }

        if let Some(cmd) = self.config.get_screen(context.tab, &combo) {
            return Some(self.resolve_screen_command(cmd, context));
        }

        if context.accepts_text() {
            if let Some(c) = printable(&key) {
                return Some(Command::InsertChar(c));
            }
        }

        None
    }

    /// Dispatches input when a modal is active. Unbound keys become `Noop`.
    fn dispatch_modal(&self, key: KeyEvent, context: &InputContext) -> Command {
        let combo = KeyCombo::new(key.code, key.modifiers);

        if let Some(cmd) = self.config.get_modal(context.overlay, &combo) {
            return cmd.clone();
        }

        if context.overlay == Overlay::ToolForm {
            if let Some(c) = printable(&key) {
                return Command::InsertChar(c);
            }
        }

        Command::Noop
    }

    /// Drop screen commands that make no sense in the current state.
    fn resolve_screen_command(&self, cmd: &Command, context: &InputContext) -> Command {
        match cmd {
            Command::Backspace if context.input_is_empty => Command::Noop,
            _ => cmd.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Tab;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn plain(code: KeyCode) -> KeyEvent {
        key(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let registry = CommandRegistry::new();
        for modal in [Overlay::None, Overlay::ToolForm, Overlay::Expired] {
            let ctx = InputContext::new().with_overlay(modal);
            assert_eq!(
                registry.dispatch(key(KeyCode::Char('c'), KeyModifiers::CONTROL), &ctx),
                Some(Command::Quit)
            );
        }
    }

    #[test]
    fn test_dismiss_toast_over_modal() {
        let registry = CommandRegistry::new();
        let ctx = InputContext::new().with_overlay(Overlay::Plans);
        assert_eq!(
            registry.dispatch(key(KeyCode::Char('x'), KeyModifiers::CONTROL), &ctx),
            Some(Command::DismissToast)
        );
    }

    #[test]
    fn test_chat_typing() {
        let registry = CommandRegistry::new();
        let ctx = InputContext::new().with_tab(Tab::Chat);
        assert_eq!(
            registry.dispatch(plain(KeyCode::Char('d')), &ctx),
            Some(Command::InsertChar('d'))
        );
        assert_eq!(
            registry.dispatch(key(KeyCode::Char('Я'), KeyModifiers::SHIFT), &ctx),
            Some(Command::InsertChar('Я'))
        );
        assert_eq!(
            registry.dispatch(plain(KeyCode::Enter), &ctx),
            Some(Command::SubmitChat)
        );
        assert_eq!(
            registry.dispatch(key(KeyCode::Char('o'), KeyModifiers::CONTROL), &ctx),
            Some(Command::OpenChatMenu)
        );
    }

    #[test]
    fn test_letters_are_shortcuts_outside_chat() {
        let registry = CommandRegistry::new();
        let ctx = InputContext::new().with_tab(Tab::Analytics);
        assert_eq!(
            registry.dispatch(plain(KeyCode::Char('d')), &ctx),
            Some(Command::DownloadReport)
        );
        assert_eq!(registry.dispatch(plain(KeyCode::Char('z')), &ctx), None);
    }

    #[test]
    fn test_tab_switches_screens_but_not_form_fields() {
        let registry = CommandRegistry::new();
        let ctx = InputContext::new().with_tab(Tab::Tools);
        assert_eq!(
            registry.dispatch(plain(KeyCode::Tab), &ctx),
            Some(Command::NextTab)
        );
        assert_eq!(
            registry.dispatch(plain(KeyCode::F(1)), &ctx),
            Some(Command::SelectTab(Tab::Chat))
        );

        let ctx = ctx.with_overlay(Overlay::ToolForm);
        assert_eq!(
            registry.dispatch(plain(KeyCode::Tab), &ctx),
            Some(Command::NextField)
        );
        assert_eq!(
            registry.dispatch(plain(KeyCode::Char('n')), &ctx),
            Some(Command::InsertChar('n'))
        );
    }

    #[test]
    fn test_modal_swallows_unbound_keys() {
        let registry = CommandRegistry::new();
        let ctx = InputContext::new().with_overlay(Overlay::Expired);
        assert_eq!(
            registry.dispatch(plain(KeyCode::F(2)), &ctx),
            Some(Command::Noop)
        );
        assert_eq!(
            registry.dispatch(plain(KeyCode::Enter), &ctx),
            Some(Command::Confirm)
        );
    }

    #[test]
    fn test_delete_confirm_keys() {
        let registry = CommandRegistry::new();
        let ctx = InputContext::new()
            .with_tab(Tab::Tools)
            .with_overlay(Overlay::DeleteConfirm);
        assert_eq!(
            registry.dispatch(plain(KeyCode::Char('y')), &ctx),
            Some(Command::Confirm)
        );
        assert_eq!(
            registry.dispatch(plain(KeyCode::Char('n')), &ctx),
            Some(Command::Back)
        );
    }

    #[test]
    fn test_backspace_on_empty_chat_is_noop() {
        let registry = CommandRegistry::new();
        let ctx = InputContext::new().with_input_empty(true);
        assert_eq!(
            registry.dispatch(plain(KeyCode::Backspace), &ctx),
            Some(Command::Noop)
        );
        let ctx = ctx.with_input_empty(false);
        assert_eq!(
            registry.dispatch(plain(KeyCode::Backspace), &ctx),
            Some(Command::Backspace)
        );
    }
}
