//! End-to-end flows driven through the key registry, the way a user would.

mod common;

use std::sync::Arc;

use common::{active_config, expired_config, TestAppBuilder};
use crossterm::event::KeyCode;
use miniapp::adapters::{DirectoryDownloads, FileThemeStore};
use miniapp::app::{Modal, Tab};
use miniapp::state::{EffectiveTheme, ThemePreference, ThemeState};
use miniapp::traits::ThemeStore;

// =============================================================================
// Subscription gating
// =============================================================================

#[tokio::test]
async fn test_expired_session_flow() {
    let mut t = TestAppBuilder::new().with_config(expired_config()).build();
    t.app.start();
    assert_eq!(t.app.modal, Some(Modal::Expired));

    // Tab switching is swallowed while the notice is up
    t.press(KeyCode::F(2));
    assert_eq!(t.app.tab, Tab::Chat);

    t.press(KeyCode::Esc);
    assert_eq!(t.app.modal, None);

    t.press(KeyCode::F(2));
    assert_eq!(t.app.tab, Tab::Analytics);
    t.settle().await;
    // Dismissed for the session: remounting does not bring it back
    assert_eq!(t.app.modal, None);

    t.press(KeyCode::Char('d'));
    assert_eq!(t.last_toast().as_deref(), Some("Доступ ограничен"));
    assert!(t.downloads.files().is_empty());
    assert_eq!(t.app.in_flight(), 0);
}

#[tokio::test]
async fn test_plan_purchase_from_expired_notice() {
    let mut t = TestAppBuilder::new().with_config(expired_config()).build();
    t.app.start();
    t.settle().await;

    t.press(KeyCode::Enter);
    assert!(matches!(t.app.modal, Some(Modal::Plans { cursor: 1, pending: false })));

    t.press(KeyCode::Up);
    t.press(KeyCode::Enter);
    assert!(matches!(t.app.modal, Some(Modal::Plans { cursor: 0, pending: true })));

    t.settle().await;
    assert_eq!(t.app.modal, None);
    assert_eq!(t.last_toast().as_deref(), Some("Подписка активирована!"));
    // No payment backend: the subscription itself is unchanged
    assert!(t.app.subscription.is_expired);
}

#[tokio::test]
async fn test_ctrl_c_quits_over_modal() {
    let mut t = TestAppBuilder::new().with_config(expired_config()).build();
    t.app.start();
    t.ctrl('c');
    assert!(t.app.should_quit);
}

// =============================================================================
// Chat
// =============================================================================

#[tokio::test]
async fn test_chat_round_trip_by_keyboard() {
    let mut t = TestAppBuilder::new().build();
    t.app.start();
    t.settle().await;
    let before = t.app.chat.messages.len();

    t.type_text("Как поднять продажи?");
    assert_eq!(t.app.chat.input, "Как поднять продажи?");
    t.press(KeyCode::Enter);
    assert!(t.app.chat.sending);
    assert!(t.app.chat.input.is_empty());

    t.settle().await;
    assert_eq!(t.app.chat.messages.len(), before + 2);
    assert!(!t.app.chat.typing);
    assert!(!t.app.chat.sending);
    let titles = t.toast_titles();
    assert!(titles.contains(&"Сообщение отправлено".to_string()));
    assert!(!titles.contains(&"Отправка сообщения...".to_string()));
}

#[tokio::test]
async fn test_attach_without_path_is_not_sent() {
    let mut t = TestAppBuilder::new().build();
    t.app.start();
    t.settle().await;
    let before = t.app.chat.messages.len();

    t.type_text("/attach");
    t.press(KeyCode::Enter);
    assert!(!t.app.chat.sending);
    assert_eq!(t.last_toast().as_deref(), Some("Файл не выбран"));

    t.settle().await;
    assert_eq!(t.app.chat.messages.len(), before);
    assert!(t.app.chat.attachment.is_none());
}

#[tokio::test]
async fn test_ctrl_x_dismisses_newest_toast() {
    let mut t = TestAppBuilder::new().build();
    t.app.start();
    t.settle().await;
    t.app.notifications.show_info("первый", None);
    t.app.notifications.show_info("второй", None);

    t.ctrl('x');
    assert_eq!(t.toast_titles(), vec!["первый".to_string()]);
}

// =============================================================================
// Tools
// =============================================================================

#[tokio::test]
async fn test_content_create_and_delete_by_keyboard() {
    let mut t = TestAppBuilder::new().build();
    t.app.start();
    t.press(KeyCode::F(3));
    t.settle().await;
    assert!(t.app.tools.catalog_loaded);

    t.press(KeyCode::Enter);
    let seeded = t.app.tools.content.items.len();

    t.press(KeyCode::Char('n'));
    assert!(t.app.tools.form.is_some());

    // Empty submit keeps the form open
    t.press(KeyCode::Enter);
    assert!(t.app.tools.form.is_some());
    assert_eq!(t.last_toast().as_deref(), Some("Ошибка создания"));

    t.type_text("Анонс");
    for _ in 0..3 {
        t.press(KeyCode::Tab);
    }
    t.type_text("Скоро запуск");
    t.press(KeyCode::Enter);
    assert!(t.app.tools.form.is_none());
    assert!(t.app.tools.busy);

    t.settle().await;
    assert_eq!(t.app.tools.content.items.len(), seeded + 1);
    assert_eq!(t.app.tools.content.items[0].title, "Анонс");
    assert_eq!(t.app.tools.content.items[0].body, "Скоро запуск");
    assert_eq!(t.last_toast().as_deref(), Some("Контент создан"));

    t.press(KeyCode::Char('x'));
    assert!(t.app.tools.confirm_delete.is_some());
    t.press(KeyCode::Enter);
    t.settle().await;
    assert_eq!(t.app.tools.content.items.len(), seeded);
    assert_eq!(t.last_toast().as_deref(), Some("Контент удален"));
}

#[tokio::test]
async fn test_leaving_tools_mid_operation_drops_result() {
    let mut t = TestAppBuilder::new().build();
    t.app.start();
    t.press(KeyCode::F(3));
    t.settle().await;
    t.press(KeyCode::Down);
    t.press(KeyCode::Down);
    t.press(KeyCode::Enter);
    t.press(KeyCode::Char(' '));
    assert!(t.app.tools.busy);

    t.press(KeyCode::F(1));
    t.settle().await;
    // The loading toast is gone and no success toast was shown
    assert!(!t.app.notifications.has_loading());
    assert!(!t.toast_titles().iter().any(|title| title.starts_with("Задача")));
}

// =============================================================================
// Persistence and export on the real file adapters
// =============================================================================

#[tokio::test]
async fn test_theme_choice_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileThemeStore::new(dir.path()));

    let mut t = TestAppBuilder::new()
        .with_theme_store(store.clone())
        .with_system_theme(EffectiveTheme::Light)
        .build();
    t.app.start();
    t.settle().await;

    t.ctrl('o');
    t.press(KeyCode::Down);
    t.press(KeyCode::Enter);
    assert_eq!(t.app.effective_theme(), EffectiveTheme::Dark);
    // Theme rows keep the menu open
    assert!(matches!(t.app.modal, Some(Modal::ChatMenu { cursor: 1 })));
    assert!(store.path().exists());

    let reloaded = ThemeState::load(store.clone(), EffectiveTheme::Light);
    assert_eq!(reloaded.preference(), ThemePreference::Dark);
    assert_eq!(store.load().unwrap(), Some(ThemePreference::Dark));
}

#[tokio::test]
async fn test_report_lands_in_downloads_dir() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("downloads");
    let mut t = TestAppBuilder::new()
        .with_config(active_config())
        .with_downloads(Arc::new(DirectoryDownloads::new(&target)))
        .build();
    t.app.start();
    t.press(KeyCode::F(2));
    t.settle().await;

    t.press(KeyCode::Char('p'));
    assert_eq!(t.app.modal, Some(Modal::ReportPreview));
    t.press(KeyCode::Enter);
    assert_eq!(t.app.modal, None);
    assert!(t.app.analytics.generating_report);

    t.settle().await;
    assert!(!t.app.analytics.generating_report);
    assert_eq!(t.last_toast().as_deref(), Some("PDF создан"));

    let path = t.app.last_export.clone().expect("export path recorded");
    assert!(path.starts_with(&target));
    let name = path.file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("analytics-report-"));
    assert!(name.ends_with(".html"));
    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.contains("SWOT"));
}
