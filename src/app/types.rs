//! Type definitions for the application state.
//!
//! - [`Tab`] - Which screen the bottom tab bar has selected
//! - [`Modal`] - Overlay currently covering the screen
//! - [`MenuEntry`] - Rows of the chat settings menu

use crate::state::theme::ThemePreference;

/// Bottom-tab screens, in tab-bar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Chat,
    Analytics,
    Tools,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Chat, Tab::Analytics, Tab::Tools];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Chat => "Чат",
            Tab::Analytics => "Аналитика",
            Tab::Tools => "Инструменты",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Tab::Chat => "💬",
            Tab::Analytics => "📊",
            Tab::Tools => "🧰",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Chat => 0,
            Tab::Analytics => 1,
            Tab::Tools => 2,
        }
    }

    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn prev(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

/// Info-only actions of the chat menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Notifications,
    Archive,
    Search,
    Help,
    Logout,
}

impl MenuAction {
    pub const ALL: [MenuAction; 5] = [
        MenuAction::Notifications,
        MenuAction::Archive,
        MenuAction::Search,
        MenuAction::Help,
        MenuAction::Logout,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::Notifications => "Уведомления",
            MenuAction::Archive => "Архив",
            MenuAction::Search => "Поиск",
            MenuAction::Help => "Помощь",
            MenuAction::Logout => "Выход",
        }
    }

    /// Body of the info toast the action shows.
    pub fn toast_message(self) -> &'static str {
        match self {
            MenuAction::Notifications => "Настройки уведомлений",
            MenuAction::Archive => "Архивированные чаты",
            MenuAction::Search => "Поиск по сообщениям",
            MenuAction::Help => "Справочная информация",
            MenuAction::Logout => "Выход из аккаунта",
        }
    }

    pub fn is_danger(self) -> bool {
        self == MenuAction::Logout
    }
}

/// One selectable row of the chat menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Theme(ThemePreference),
    Action(MenuAction),
}

impl MenuEntry {
    /// Theme options first, then actions.
    pub fn all() -> Vec<MenuEntry> {
        ThemePreference::ALL
            .iter()
            .map(|p| MenuEntry::Theme(*p))
            .chain(MenuAction::ALL.iter().map(|a| MenuEntry::Action(*a)))
            .collect()
    }
}

/// Overlay currently shown on top of the active screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    /// «Подписка истекла!» with the renewal offer
    Expired,
    /// Plan picker; `pending` is set while an activation is in flight
    Plans { cursor: usize, pending: bool },
    /// Chat settings: theme picker plus info actions
    ChatMenu { cursor: usize },
    /// Analytics report preview
    ReportPreview,
}
