//! Command definitions for keyboard input handling.
//!
//! The [`Command`] enum is the single vocabulary between key bindings and
//! the [`App`](crate::app::App) operations they trigger.

use crate::app::Tab;

/// Every action a key press can trigger.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    // global commands
    /// Quit the application (Ctrl+C)
    Quit,
    /// Close the newest closable toast (Ctrl+X)
    DismissToast,
    /// Jump to a tab (F1/F2/F3)
    SelectTab(Tab),
    /// Next tab (Tab)
    NextTab,
    /// Previous tab (Shift+Tab)
    PrevTab,

    // text input
    InsertChar(char),
    Backspace,
    /// Enter in the chat input
    SubmitChat,

    // form fields
    NextField,
    PrevField,
    /// Left/Right on a choice field
    CycleChoice { forward: bool },

    // lists and modals
    MoveUp,
    MoveDown,
    /// Enter: activate the highlighted row or the modal's primary button
    Confirm,
    /// Esc: close the modal or step back
    Back,

    // screen actions
    /// Chat settings menu (Ctrl+O)
    OpenChatMenu,
    /// Plan picker (Ctrl+P on chat, `u` elsewhere)
    OpenPlans,
    /// Report preview (`p`)
    PreviewReport,
    /// Report download (`d`)
    DownloadReport,
    /// Open the last exported report (`o`)
    OpenLastExport,
    /// New content / campaign / task (`n`)
    NewItem,
    /// Edit the selected record (`e`)
    EditItem,
    /// Delete the selected record (`x`, Delete)
    DeleteItem,
    /// Toggle the selected task (Space)
    ToggleTask,
    /// Send the selected campaign (`s`)
    SendCampaign,
    /// Open the selected content item (`v`)
    ViewContent,

    /// Key is recognised but does nothing
    Noop,
}

impl Command {
    /// Whether handling it can change what is on screen.
    pub fn marks_dirty(&self) -> bool {
        !matches!(self, Command::Noop)
    }

    /// Reaches the navigation handler even while a modal is open.
    pub fn bypasses_modals(&self) -> bool {
        matches!(self, Command::Quit | Command::DismissToast | Command::Noop)
    }
}
