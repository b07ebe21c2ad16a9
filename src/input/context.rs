//! What a key press lands on.
//!
//! [`InputContext`] is a copy of the few pieces of [`App`] state that the
//! registry needs to turn a key into a [`Command`](super::Command).

use crate::app::{App, Modal, Tab};

/// The layer on top of the current screen that owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Overlay {
    #[default]
    None,
    Expired,
    Plans,
    ChatMenu,
    ReportPreview,
    ToolForm,
    DeleteConfirm,
}

impl Overlay {
    /// App-level modals win over the tools screen's own form and confirm dialog.
    pub fn of(app: &App) -> Self {
        match app.modal {
            Some(Modal::Expired) => Overlay::Expired,
            Some(Modal::Plans { .. }) => Overlay::Plans,
            Some(Modal::ChatMenu { .. }) => Overlay::ChatMenu,
            Some(Modal::ReportPreview) => Overlay::ReportPreview,
            None if app.tab != Tab::Tools => Overlay::None,
            None if app.tools.confirm_delete.is_some() => Overlay::DeleteConfirm,
            None if app.tools.form.is_some() => Overlay::ToolForm,
            None => Overlay::None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputContext {
    pub tab: Tab,
    pub overlay: Overlay,
    pub input_is_empty: bool,
}

impl Default for InputContext {
    fn default() -> Self {
        Self {
            tab: Tab::Chat,
            overlay: Overlay::None,
            input_is_empty: true,
        }
    }
}

impl InputContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_app(app: &App) -> Self {
        Self {
            tab: app.tab,
            overlay: Overlay::of(app),
            input_is_empty: app.chat.input.is_empty(),
        }
    }

    pub fn with_tab(self, tab: Tab) -> Self {
        Self { tab, ..self }
    }

    pub fn with_overlay(self, overlay: Overlay) -> Self {
        Self { overlay, ..self }
    }

    pub fn with_input_empty(self, input_is_empty: bool) -> Self {
        Self {
            input_is_empty,
            ..self
        }
    }

    pub fn has_overlay(&self) -> bool {
        self.overlay != Overlay::None
    }

    /// Printable characters are typed into a field rather than read as keys.
    pub fn accepts_text(&self) -> bool {
        match self.overlay {
            Overlay::ToolForm => true,
            Overlay::None => self.tab == Tab::Chat,
            _ => false,
        }
    }
}
