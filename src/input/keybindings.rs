//! Default keybindings for the application.
//!
//! This module defines the default key bindings that map key combinations
//! to commands, grouped the way the registry consults them.

use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;
use super::context::Overlay;
use crate::app::Tab;

/// Represents a key combination (key code + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    /// Creates a new key combo with the given code and modifiers.
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Creates a key combo with no modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Creates a key combo with Control modifier.
    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    /// Creates a key combo with Shift modifier.
    pub const fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }
}

/// Keybinding configuration for the application.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    /// Global keybindings (active when no modal captures the key)
    pub global: HashMap<KeyCombo, Command>,
    /// Keybindings per modal type
    pub modal: HashMap<Overlay, HashMap<KeyCombo, Command>>,
    /// Keybindings per tab
    pub screen: HashMap<Tab, HashMap<KeyCombo, Command>>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    /// Creates a new keybinding configuration with default bindings.
    pub fn new() -> Self {
        let mut config = Self {
            global: HashMap::new(),
            modal: HashMap::new(),
            screen: HashMap::new(),
        };

        config.setup_global_bindings();
        config.setup_modal_bindings();
        config.setup_screen_bindings();

        config
    }

    fn setup_global_bindings(&mut self) {
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit);
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('x')), Command::DismissToast);

        self.global
            .insert(KeyCombo::plain(KeyCode::F(1)), Command::SelectTab(Tab::Chat));
        self.global.insert(
            KeyCombo::plain(KeyCode::F(2)),
            Command::SelectTab(Tab::Analytics),
        );
        self.global
            .insert(KeyCombo::plain(KeyCode::F(3)), Command::SelectTab(Tab::Tools));
        self.global
            .insert(KeyCombo::plain(KeyCode::Tab), Command::NextTab);
        self.global
            .insert(KeyCombo::plain(KeyCode::BackTab), Command::PrevTab);
        // Some terminals report Shift+Tab as BackTab with SHIFT set
        self.global
            .insert(KeyCombo::shift(KeyCode::BackTab), Command::PrevTab);
    }

    fn setup_modal_bindings(&mut self) {
        // Expired notice: renew or hide
        let mut expired = HashMap::new();
        expired.insert(KeyCombo::plain(KeyCode::Enter), Command::Confirm);
        expired.insert(KeyCombo::plain(KeyCode::Esc), Command::Back);
        self.modal.insert(Overlay::Expired, expired);

        // Plan picker and chat menu are both vertical lists
        for modal in [Overlay::Plans, Overlay::ChatMenu] {
            let mut list = HashMap::new();
            list.insert(KeyCombo::plain(KeyCode::Up), Command::MoveUp);
            list.insert(KeyCombo::plain(KeyCode::Down), Command::MoveDown);
            list.insert(KeyCombo::plain(KeyCode::Char('k')), Command::MoveUp);
            list.insert(KeyCombo::plain(KeyCode::Char('j')), Command::MoveDown);
            list.insert(KeyCombo::plain(KeyCode::Enter), Command::Confirm);
            list.insert(KeyCombo::plain(KeyCode::Esc), Command::Back);
            self.modal.insert(modal, list);
        }

        let mut preview = HashMap::new();
        preview.insert(KeyCombo::plain(KeyCode::Enter), Command::DownloadReport);
        preview.insert(KeyCombo::plain(KeyCode::Char('d')), Command::DownloadReport);
        preview.insert(KeyCombo::plain(KeyCode::Esc), Command::Back);
        self.modal.insert(Overlay::ReportPreview, preview);

        let mut form = HashMap::new();
        form.insert(KeyCombo::plain(KeyCode::Tab), Command::NextField);
        form.insert(KeyCombo::plain(KeyCode::Down), Command::NextField);
        form.insert(KeyCombo::plain(KeyCode::BackTab), Command::PrevField);
        form.insert(KeyCombo::shift(KeyCode::BackTab), Command::PrevField);
        form.insert(KeyCombo::plain(KeyCode::Up), Command::PrevField);
        form.insert(
            KeyCombo::plain(KeyCode::Right),
            Command::CycleChoice { forward: true },
        );
        form.insert(
            KeyCombo::plain(KeyCode::Left),
            Command::CycleChoice { forward: false },
        );
        form.insert(KeyCombo::plain(KeyCode::Backspace), Command::Backspace);
        form.insert(KeyCombo::plain(KeyCode::Enter), Command::Confirm);
        form.insert(KeyCombo::plain(KeyCode::Esc), Command::Back);
        self.modal.insert(Overlay::ToolForm, form);

        let mut confirm = HashMap::new();
        confirm.insert(KeyCombo::plain(KeyCode::Enter), Command::Confirm);
        confirm.insert(KeyCombo::plain(KeyCode::Char('y')), Command::Confirm);
        confirm.insert(KeyCombo::plain(KeyCode::Esc), Command::Back);
        confirm.insert(KeyCombo::plain(KeyCode::Char('n')), Command::Back);
        self.modal.insert(Overlay::DeleteConfirm, confirm);
    }

    fn setup_screen_bindings(&mut self) {
        // Chat: everything printable goes to the input line
        let mut chat = HashMap::new();
        chat.insert(KeyCombo::plain(KeyCode::Enter), Command::SubmitChat);
        chat.insert(KeyCombo::plain(KeyCode::Backspace), Command::Backspace);
        chat.insert(KeyCombo::ctrl(KeyCode::Char('o')), Command::OpenChatMenu);
        chat.insert(KeyCombo::ctrl(KeyCode::Char('p')), Command::OpenPlans);
        self.screen.insert(Tab::Chat, chat);

        let mut analytics = HashMap::new();
        analytics.insert(KeyCombo::plain(KeyCode::Char('p')), Command::PreviewReport);
        analytics.insert(KeyCombo::plain(KeyCode::Char('d')), Command::DownloadReport);
        analytics.insert(KeyCombo::plain(KeyCode::Char('o')), Command::OpenLastExport);
        analytics.insert(KeyCombo::plain(KeyCode::Char('u')), Command::OpenPlans);
        self.screen.insert(Tab::Analytics, analytics);

        let mut tools = HashMap::new();
        tools.insert(KeyCombo::plain(KeyCode::Up), Command::MoveUp);
        tools.insert(KeyCombo::plain(KeyCode::Down), Command::MoveDown);
        tools.insert(KeyCombo::plain(KeyCode::Char('k')), Command::MoveUp);
        tools.insert(KeyCombo::plain(KeyCode::Char('j')), Command::MoveDown);
        tools.insert(KeyCombo::plain(KeyCode::Enter), Command::Confirm);
        tools.insert(KeyCombo::plain(KeyCode::Esc), Command::Back);
        tools.insert(KeyCombo::plain(KeyCode::Char('n')), Command::NewItem);
        tools.insert(KeyCombo::plain(KeyCode::Char('e')), Command::EditItem);
        tools.insert(KeyCombo::plain(KeyCode::Char('x')), Command::DeleteItem);
        tools.insert(KeyCombo::plain(KeyCode::Delete), Command::DeleteItem);
        tools.insert(KeyCombo::plain(KeyCode::Char(' ')), Command::ToggleTask);
        tools.insert(KeyCombo::plain(KeyCode::Char('s')), Command::SendCampaign);
        tools.insert(KeyCombo::plain(KeyCode::Char('v')), Command::ViewContent);
        tools.insert(KeyCombo::plain(KeyCode::Char('u')), Command::OpenPlans);
        self.screen.insert(Tab::Tools, tools);
    }

    pub fn get_global(&self, combo: &KeyCombo) -> Option<&Command> {
        self.global.get(combo)
    }

    /// Gets the modal-specific command for a key combo.
    pub fn get_modal(&self, modal: Overlay, combo: &KeyCombo) -> Option<&Command> {
        self.modal.get(&modal).and_then(|m| m.get(combo))
    }

    /// Gets the tab-specific command for a key combo.
    pub fn get_screen(&self, tab: Tab, combo: &KeyCombo) -> Option<&Command> {
        self.screen.get(&tab).and_then(|m| m.get(combo))
    }
}
