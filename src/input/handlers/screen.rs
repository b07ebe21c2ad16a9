//! Screen command handlers.
//!
//! Handles commands bound to the selected tab when no modal is open.

use crate::app::{App, Tab};
use crate::input::Command;

/// Handles commands for the selected tab.
///
/// Returns `true` if the command was handled.
pub fn handle_screen_command(app: &mut App, cmd: &Command) -> bool {
    match app.tab {
        Tab::Chat => handle_chat_command(app, cmd),
        Tab::Analytics => handle_analytics_command(app, cmd),
        Tab::Tools => handle_tools_command(app, cmd),
    }
}

fn handle_chat_command(app: &mut App, cmd: &Command) -> bool {
    match cmd {
        Command::InsertChar(c) => app.chat_insert_char(*c),
        Command::Backspace => app.chat_backspace(),
        Command::SubmitChat => app.submit_chat_input(),
        Command::OpenChatMenu => app.open_chat_menu(),
        Command::OpenPlans => app.open_plans(),
        _ => return false,
    }
    true
}

fn handle_analytics_command(app: &mut App, cmd: &Command) -> bool {
    match cmd {
        Command::PreviewReport => app.open_report_preview(),
        Command::DownloadReport => app.download_report(),
        Command::OpenLastExport => app.open_last_export(),
        Command::OpenPlans => app.open_plans(),
        _ => return false,
    }
    true
}

fn handle_tools_command(app: &mut App, cmd: &Command) -> bool {
    match cmd {
        Command::MoveUp => app.tools_move(false),
        Command::MoveDown => app.tools_move(true),
        Command::Confirm => app.tools_confirm(),
        Command::Back => app.tools_back(),
        Command::NewItem => app.new_item(),
        Command::EditItem => app.edit_item(),
        Command::DeleteItem => app.request_delete(),
        Command::ToggleTask => app.toggle_selected_task(),
        Command::SendCampaign => app.send_selected_campaign(),
        Command::ViewContent => app.view_content(),
        Command::OpenPlans => app.open_plans(),
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::Harness;
    use crate::state::tools::{ToolKind, ToolView};
    use crate::startup::AppConfig;
    use chrono::NaiveDate;

    fn active() -> AppConfig {
        AppConfig::default().with_subscription_expiry(NaiveDate::from_ymd_opt(2027, 1, 1).unwrap())
    }

    #[tokio::test]
    async fn test_chat_typing_and_backspace() {
        let mut h = Harness::new(active());
        h.app.start();
        h.settle().await;

        for c in "hey".chars() {
            assert!(handle_screen_command(&mut h.app, &Command::InsertChar(c)));
        }
        handle_screen_command(&mut h.app, &Command::Backspace);
        assert_eq!(h.app.chat.input, "he");
    }

    #[tokio::test]
    async fn test_commands_outside_their_tab_are_ignored() {
        let mut h = Harness::new(active());
        h.app.start();
        assert!(!handle_screen_command(&mut h.app, &Command::DownloadReport));
        assert!(!handle_screen_command(&mut h.app, &Command::NewItem));
        h.settle().await;
    }

    #[tokio::test]
    async fn test_open_last_export_without_export() {
        let mut h = Harness::new(active());
        h.app.switch_tab(Tab::Analytics);
        h.settle().await;

        assert!(handle_screen_command(&mut h.app, &Command::OpenLastExport));
        let toast = h.app.notifications.active().last().unwrap();
        assert_eq!(toast.title, "Отчет еще не создан");
    }

    #[tokio::test]
    async fn test_tools_navigation() {
        let mut h = Harness::new(active());
        h.app.switch_tab(Tab::Tools);
        h.settle().await;

        handle_screen_command(&mut h.app, &Command::MoveDown);
        handle_screen_command(&mut h.app, &Command::Confirm);
        assert_eq!(h.app.tools.view, ToolView::Open(ToolKind::Email));

        handle_screen_command(&mut h.app, &Command::Back);
        assert_eq!(h.app.tools.view, ToolView::Catalog);
    }
}
