//! Navigation command handlers.
//!
//! Handles commands that work regardless of the selected tab.

use crate::app::App;
use crate::input::Command;

/// Handles global commands.
///
/// Returns `true` if the command was handled.
pub fn handle_navigation_command(app: &mut App, cmd: &Command) -> bool {
    match cmd {
        Command::Quit => {
            app.quit();
            true
        }
        Command::DismissToast => {
            app.dismiss_toast();
            true
        }
        Command::SelectTab(tab) => {
            app.switch_tab(*tab);
            true
        }
        Command::NextTab => {
            app.next_tab();
            true
        }
        Command::PrevTab => {
            app.prev_tab();
            true
        }
        Command::Noop => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::Harness;
    use crate::app::Tab;
    use crate::startup::AppConfig;

    #[tokio::test]
    async fn test_tab_commands() {
        let mut h = Harness::new(AppConfig::default());
        h.app.start();
        assert!(handle_navigation_command(&mut h.app, &Command::NextTab));
        assert_eq!(h.app.tab, Tab::Analytics);
        assert!(handle_navigation_command(
            &mut h.app,
            &Command::SelectTab(Tab::Chat)
        ));
        assert_eq!(h.app.tab, Tab::Chat);
        assert!(handle_navigation_command(&mut h.app, &Command::PrevTab));
        assert_eq!(h.app.tab, Tab::Tools);
        h.settle().await;
    }

    #[tokio::test]
    async fn test_quit_and_unhandled() {
        let mut h = Harness::new(AppConfig::default());
        assert!(!handle_navigation_command(&mut h.app, &Command::MoveUp));
        assert!(handle_navigation_command(&mut h.app, &Command::Quit));
        assert!(h.app.should_quit);
    }
}
