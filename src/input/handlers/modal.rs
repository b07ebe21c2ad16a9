//! Modal command handlers.
//!
//! While a modal is open, every command other than quit and toast dismissal
//! is routed here. Anything a modal does not understand is swallowed.

use crate::app::{App, MenuEntry, Modal};
use crate::input::{Command, Overlay};
use crate::state::subscription::PLANS;

/// Step a list cursor, clamped to `len`.
fn step(cursor: usize, len: usize, down: bool) -> usize {
    if down {
        (cursor + 1).min(len.saturating_sub(1))
    } else {
        cursor.saturating_sub(1)
    }
}

/// Handles a command for the modal of type `modal`.
///
/// Returns `true` if the command was consumed.
pub fn handle_modal_command(app: &mut App, modal: Overlay, cmd: &Command) -> bool {
    match modal {
        Overlay::None => false,
        Overlay::Expired => {
            match cmd {
                Command::Confirm => app.open_plans(),
                Command::Back => app.dismiss_expired_modal(),
                _ => {}
            }
            true
        }
        Overlay::Plans => {
            if let Some(Modal::Plans { cursor, pending }) = app.modal {
                match cmd {
                    Command::MoveUp | Command::MoveDown if !pending => {
                        let cursor = step(cursor, PLANS.len(), *cmd == Command::MoveDown);
                        app.modal = Some(Modal::Plans { cursor, pending });
                    }
                    Command::Confirm => app.select_plan(),
                    Command::Back if !pending => app.close_plans(),
                    _ => {}
                }
            }
            true
        }
        Overlay::ChatMenu => {
            if let Some(Modal::ChatMenu { cursor }) = app.modal {
                match cmd {
                    Command::MoveUp | Command::MoveDown => {
                        let len = MenuEntry::all().len();
                        let cursor = step(cursor, len, *cmd == Command::MoveDown);
                        app.modal = Some(Modal::ChatMenu { cursor });
                    }
                    Command::Confirm => app.confirm_chat_menu(cursor),
                    Command::Back => app.modal = None,
                    _ => {}
                }
            }
            true
        }
        Overlay::ReportPreview => {
            match cmd {
                Command::DownloadReport | Command::Confirm => app.download_report(),
                Command::Back => app.modal = None,
                _ => {}
            }
            true
        }
        Overlay::ToolForm => {
            match cmd {
                Command::Confirm => app.submit_form(),
                Command::Back => app.cancel_form(),
                _ => {
                    if let Some(form) = app.tools.form.as_mut() {
                        let state = &mut form.state;
                        match cmd {
                            Command::NextField => state.focus_next(),
                            Command::PrevField => state.focus_prev(),
                            Command::CycleChoice { forward } => state.cycle_choice(*forward),
                            Command::InsertChar(c) => state.insert_char(*c),
                            Command::Backspace => state.backspace(),
                            _ => return true,
                        }
                        app.mark_dirty();
                    }
                }
            }
            true
        }
        Overlay::DeleteConfirm => {
            match cmd {
                Command::Confirm => app.confirm_delete(),
                Command::Back => app.cancel_delete(),
                _ => {}
            }
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::Harness;
    use crate::app::Tab;
    use crate::startup::AppConfig;
    use crate::state::theme::ThemePreference;
    use crate::state::tools::ToolKind;
    use chrono::NaiveDate;

    fn expired() -> AppConfig {
        AppConfig::default().with_subscription_expiry(NaiveDate::from_ymd_opt(2025, 8, 15).unwrap())
    }

    fn active() -> AppConfig {
        AppConfig::default().with_subscription_expiry(NaiveDate::from_ymd_opt(2027, 1, 1).unwrap())
    }

    #[test]
    fn test_step_clamps() {
        assert_eq!(step(0, 3, false), 0);
        assert_eq!(step(2, 3, true), 2);
        assert_eq!(step(1, 3, true), 2);
        assert_eq!(step(0, 0, true), 0);
    }

    #[tokio::test]
    async fn test_expired_modal_flow() {
        let mut h = Harness::new(expired());
        h.app.start();
        assert_eq!(h.app.modal, Some(Modal::Expired));

        handle_modal_command(&mut h.app, Overlay::Expired, &Command::Confirm);
        assert!(matches!(h.app.modal, Some(Modal::Plans { .. })));

        // Closing the picker falls back to the notice until it is dismissed
        handle_modal_command(&mut h.app, Overlay::Plans, &Command::Back);
        assert_eq!(h.app.modal, Some(Modal::Expired));
        handle_modal_command(&mut h.app, Overlay::Expired, &Command::Back);
        assert_eq!(h.app.modal, None);
        assert!(h.app.expired_modal_dismissed);
        h.settle().await;
    }

    #[tokio::test]
    async fn test_plan_cursor_locked_while_pending() {
        let mut h = Harness::new(AppConfig::default());
        h.app.open_plans();
        handle_modal_command(&mut h.app, Overlay::Plans, &Command::MoveDown);
        assert_eq!(
            h.app.modal,
            Some(Modal::Plans {
                cursor: 2,
                pending: false
            })
        );
        handle_modal_command(&mut h.app, Overlay::Plans, &Command::Confirm);
        handle_modal_command(&mut h.app, Overlay::Plans, &Command::MoveUp);
        handle_modal_command(&mut h.app, Overlay::Plans, &Command::Back);
        assert_eq!(
            h.app.modal,
            Some(Modal::Plans {
                cursor: 2,
                pending: true
            })
        );
        h.settle().await;
        assert_eq!(
            h.app.notifications.active().last().unwrap().message.as_deref(),
            Some("Подписка \"Премиум\" успешно оформлена!")
        );
    }

    #[tokio::test]
    async fn test_chat_menu_theme_row() {
        let mut h = Harness::new(AppConfig::default());
        h.app.open_chat_menu();
        handle_modal_command(&mut h.app, Overlay::ChatMenu, &Command::MoveDown);
        handle_modal_command(&mut h.app, Overlay::ChatMenu, &Command::MoveDown);
        handle_modal_command(&mut h.app, Overlay::ChatMenu, &Command::Confirm);
        assert_eq!(h.app.theme.preference(), ThemePreference::System);

        handle_modal_command(&mut h.app, Overlay::ChatMenu, &Command::MoveDown);
        handle_modal_command(&mut h.app, Overlay::ChatMenu, &Command::Confirm);
        assert_eq!(h.app.modal, None);
        assert_eq!(
            h.app.notifications.active().last().unwrap().title,
            "Уведомления"
        );
    }

    #[tokio::test]
    async fn test_form_editing() {
        let mut h = Harness::new(active());
        h.app.switch_tab(Tab::Tools);
        h.settle().await;
        h.app.open_tool(ToolKind::Tasks);
        h.app.new_item();

        for c in "Звонок".chars() {
            handle_modal_command(&mut h.app, Overlay::ToolForm, &Command::InsertChar(c));
        }
        handle_modal_command(&mut h.app, Overlay::ToolForm, &Command::Backspace);
        handle_modal_command(&mut h.app, Overlay::ToolForm, &Command::NextField);
        handle_modal_command(&mut h.app, Overlay::ToolForm, &Command::NextField);
        handle_modal_command(
            &mut h.app,
            Overlay::ToolForm,
            &Command::CycleChoice { forward: true },
        );
        let form = &h.app.tools.form.as_ref().unwrap().state;
        assert_eq!(form.text(0), "Звоно");
        assert_eq!(form.fields[2].display(), "Высокий");

        handle_modal_command(&mut h.app, Overlay::ToolForm, &Command::Back);
        assert!(h.app.tools.form.is_none());
    }
}
