//! Input handling module for keyboard and command processing.
//!
//! All keyboard input goes through a command pattern:
//!
//! 1. Translated to a [`Command`] by the [`CommandRegistry`]
//! 2. Dispatched to appropriate handlers in the [`handlers`] module
//!
//! # Architecture
//!
//! ```text
//! KeyEvent -> CommandRegistry::dispatch() -> Command -> Handler -> App mutation
//! ```
//!
//! # Example
//!
//! ```ignore
//! use miniapp::input::CommandRegistry;
//!
//! let registry = CommandRegistry::new();
//! let context = app.build_input_context();
//!
//! if let Some(cmd) = registry.dispatch(key_event, &context) {
//!     app.execute_command(cmd);
//! }
//! ```
//!
//! # Modules
//!
//! - [`command`] - The [`Command`] enum with all possible user actions
//! - [`context`] - [`InputContext`] for tracking current UI state
//! - [`registry`] - [`CommandRegistry`] for mapping keys to commands
//! - [`keybindings`] - Default key binding configuration
//! - [`handlers`] - Command execution handlers

pub mod command;
pub mod context;
pub mod handlers;
pub mod keybindings;
pub mod registry;

pub use command::Command;
pub use context::{InputContext, Overlay};
pub use keybindings::{KeyCombo, KeybindingConfig};
pub use registry::CommandRegistry;

use crate::app::App;

impl App {
    pub fn build_input_context(&self) -> InputContext {
        InputContext::from_app(self)
    }

    /// Executes a command, delegating to the appropriate handler.
    ///
    /// Quit and toast dismissal always reach the navigation handler; every
    /// other command goes to the open modal first.
    ///
    /// Returns `true` if the command was handled.
    pub fn execute_command(&mut self, cmd: Command) -> bool {
        tracing::debug!("execute_command: {:?}", cmd);

        if cmd.marks_dirty() {
            self.mark_dirty();
        }

        let modal = self.build_input_context().overlay;
        if modal != Overlay::None && !cmd.bypasses_modals() {
            return handlers::handle_modal_command(self, modal, &cmd);
        }

        if handlers::handle_navigation_command(self, &cmd) {
            return true;
        }

        handlers::handle_screen_command(self, &cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{Modal, Tab};
    use crate::app::test_support::Harness;
    use crate::startup::AppConfig;
    use crate::state::tools::{ToolKind, ToolView};
    use chrono::NaiveDate;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    fn active() -> AppConfig {
        AppConfig::default().with_subscription_expiry(NaiveDate::from_ymd_opt(2027, 1, 1).unwrap())
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn send_key(app: &mut App, registry: &CommandRegistry, code: KeyCode) -> bool {
        let context = app.build_input_context();
        match registry.dispatch(press(code), &context) {
            Some(cmd) => app.execute_command(cmd),
            None => false,
        }
    }

    #[tokio::test]
    async fn test_build_input_context_default() {
        let h = Harness::new(active());
        let ctx = h.app.build_input_context();

        assert_eq!(ctx.tab, Tab::Chat);
        assert_eq!(ctx.overlay, Overlay::None);
        assert!(ctx.input_is_empty);
    }

    #[tokio::test]
    async fn test_build_input_context_with_overlay() {
        let mut h = Harness::new(active());
        h.app.modal = Some(Modal::Plans {
            cursor: 0,
            pending: false,
        });
        assert_eq!(h.app.build_input_context().overlay, Overlay::Plans);

        h.app.modal = None;
        h.app.chat.input = "hi".to_string();
        assert!(!h.app.build_input_context().input_is_empty);
    }

    #[tokio::test]
    async fn test_tool_overlays_only_on_tools_tab() {
        let mut h = Harness::new(active());
        h.app.switch_tab(Tab::Tools);
        h.settle().await;
        h.app.open_tool(ToolKind::Tasks);
        h.app.request_delete();
        assert_eq!(h.app.build_input_context().overlay, Overlay::DeleteConfirm);

        h.app.modal = Some(Modal::Expired);
        assert_eq!(h.app.build_input_context().overlay, Overlay::Expired);
    }

    #[tokio::test]
    async fn test_execute_command_quit_over_modal() {
        let mut h = Harness::new(active());
        h.app.modal = Some(Modal::Expired);

        assert!(h.app.execute_command(Command::Quit));
        assert!(h.app.should_quit);
    }

    #[tokio::test]
    async fn test_modal_blocks_tab_switch() {
        let mut h = Harness::new(active());
        h.app.modal = Some(Modal::Expired);

        assert!(h.app.execute_command(Command::NextTab));
        assert_eq!(h.app.tab, Tab::Chat);
    }

    #[tokio::test]
    async fn test_execute_command_noop() {
        let mut h = Harness::new(active());
        h.app.needs_redraw = false;
        assert!(h.app.execute_command(Command::Noop));
        assert!(!h.app.needs_redraw);
    }

    #[tokio::test]
    async fn test_full_dispatch_and_execute() {
        let mut h = Harness::new(active());
        let registry = CommandRegistry::new();
        h.app.start();
        h.settle().await;

        for c in "привет".chars() {
            assert!(send_key(&mut h.app, &registry, KeyCode::Char(c)));
        }
        assert_eq!(h.app.chat.input, "привет");

        let before = h.app.chat.messages.len();
        assert!(send_key(&mut h.app, &registry, KeyCode::Enter));
        assert!(h.app.chat.input.is_empty());
        h.settle().await;

        let texts: Vec<&str> = h.app.chat.messages[before..]
            .iter()
            .map(|m| m.text.as_str())
            .collect();
        assert_eq!(texts.len(), 2);
        assert_eq!(texts[0], "привет");
    }

    #[tokio::test]
    async fn test_tools_keyboard_flow() {
        let mut h = Harness::new(active());
        let registry = CommandRegistry::new();
        h.app.start();
        h.settle().await;

        send_key(&mut h.app, &registry, KeyCode::F(3));
        h.settle().await;
        send_key(&mut h.app, &registry, KeyCode::Char('j'));
        send_key(&mut h.app, &registry, KeyCode::Char('j'));
        send_key(&mut h.app, &registry, KeyCode::Enter);
        assert_eq!(h.app.tools.view, ToolView::Open(ToolKind::Tasks));

        let count = h.app.tools.tasks.items.len();
        send_key(&mut h.app, &registry, KeyCode::Char('n'));
        assert_eq!(h.app.build_input_context().overlay, Overlay::ToolForm);
        // Letters bound on the tools screen type into the form instead
        for c in "new".chars() {
            send_key(&mut h.app, &registry, KeyCode::Char(c));
        }
        send_key(&mut h.app, &registry, KeyCode::Enter);
        h.settle().await;

        assert_eq!(h.app.tools.tasks.items.len(), count + 1);
        assert!(h.app.tools.tasks.items.iter().any(|t| t.title == "new"));
    }
}
