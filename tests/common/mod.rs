//! Common test utilities for integration tests.
//!
//! Builds an [`App`] on in-memory adapters, drives it with key events through
//! the real [`CommandRegistry`] and settles spawned work without waiting for
//! the simulated latencies.
//!
//! # Example
//!
//! ```ignore
//! let mut t = TestAppBuilder::new().with_config(active_config()).build();
//! t.app.start();
//! t.settle().await;
//! t.type_text("привет");
//! t.press(KeyCode::Enter);
//! ```

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use miniapp::adapters::mock::{
    FixedColorScheme, InMemoryDownloads, InMemoryThemeStore, ManualClock, NoDelay,
};
use miniapp::app::{App, AppDeps, AppMessage};
use miniapp::input::CommandRegistry;
use miniapp::startup::AppConfig;
use miniapp::state::EffectiveTheme;
use miniapp::traits::{DownloadSink, ThemeStore};

/// Subscription valid well past the test clock (2026-10-16).
pub fn active_config() -> AppConfig {
    AppConfig::default().with_subscription_expiry(NaiveDate::from_ymd_opt(2027, 1, 1).unwrap())
}

/// Subscription that ran out two days before the test clock.
pub fn expired_config() -> AppConfig {
    AppConfig::default().with_subscription_expiry(NaiveDate::from_ymd_opt(2026, 10, 14).unwrap())
}

/// Builder for [`TestApp`].
pub struct TestAppBuilder {
    config: AppConfig,
    system_theme: EffectiveTheme,
    theme_store: Option<Arc<dyn ThemeStore>>,
    downloads: Option<Arc<dyn DownloadSink>>,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self {
            config: active_config(),
            system_theme: EffectiveTheme::Light,
            theme_store: None,
            downloads: None,
        }
    }

    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_system_theme(mut self, theme: EffectiveTheme) -> Self {
        self.system_theme = theme;
        self
    }

    /// Replace the in-memory theme store, e.g. with a file-backed one.
    pub fn with_theme_store(mut self, store: Arc<dyn ThemeStore>) -> Self {
        self.theme_store = Some(store);
        self
    }

    /// Replace the in-memory downloads sink.
    pub fn with_downloads(mut self, sink: Arc<dyn DownloadSink>) -> Self {
        self.downloads = Some(sink);
        self
    }

    pub fn build(self) -> TestApp {
        let clock = ManualClock::default();
        let delay = NoDelay::new();
        let store = InMemoryThemeStore::new();
        let downloads = InMemoryDownloads::new();
        let scheme = FixedColorScheme::new(self.system_theme);

        let deps = AppDeps {
            clock: Arc::new(clock.clone()),
            delay: Arc::new(delay.clone()),
            theme_store: self
                .theme_store
                .unwrap_or_else(|| Arc::new(store.clone())),
            color_scheme: Arc::new(scheme.clone()),
            downloads: self
                .downloads
                .unwrap_or_else(|| Arc::new(downloads.clone())),
        };
        let mut app = App::new(self.config, deps);
        let rx = app.message_rx.take().expect("receiver present");

        TestApp {
            app,
            rx,
            registry: CommandRegistry::new(),
            clock,
            delay,
            store,
            downloads,
            scheme,
        }
    }
}

/// App plus handles on its mock adapters.
pub struct TestApp {
    pub app: App,
    pub rx: mpsc::UnboundedReceiver<AppMessage>,
    pub registry: CommandRegistry,
    pub clock: ManualClock,
    pub delay: NoDelay,
    pub store: InMemoryThemeStore,
    pub downloads: InMemoryDownloads,
    pub scheme: FixedColorScheme,
}

impl TestApp {
    /// Handle messages until no spawned task is outstanding.
    pub async fn settle(&mut self) {
        while self.app.in_flight() > 0 {
            let msg = tokio::time::timeout(Duration::from_secs(5), self.rx.recv())
                .await
                .expect("message before timeout")
                .expect("channel open");
            self.app.handle_message(msg);
        }
    }

    pub fn key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        let context = self.app.build_input_context();
        if let Some(cmd) = self.registry.dispatch(KeyEvent::new(code, modifiers), &context) {
            self.app.execute_command(cmd);
        }
    }

    pub fn press(&mut self, code: KeyCode) {
        self.key(code, KeyModifiers::NONE);
    }

    pub fn ctrl(&mut self, c: char) {
        self.key(KeyCode::Char(c), KeyModifiers::CONTROL);
    }

    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.press(KeyCode::Char(c));
        }
    }

    /// Titles of the visible toasts, oldest first.
    pub fn toast_titles(&self) -> Vec<String> {
        self.app
            .notifications
            .active()
            .iter()
            .map(|n| n.title.clone())
            .collect()
    }

    pub fn last_toast(&self) -> Option<String> {
        self.toast_titles().pop()
    }
}
