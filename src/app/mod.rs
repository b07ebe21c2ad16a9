//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Tab`] - Which screen is currently displayed
//! - [`Modal`] - Overlay on top of the screen
//! - [`AppMessage`] - Messages for async communication
//! - [`AppDeps`] - Injected side-effect implementations

mod actions;
mod handlers;
mod messages;
mod navigation;
mod types;

pub use messages::{AppMessage, ToolCompletion};
pub use types::{MenuAction, MenuEntry, Modal, Tab};

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;

use crate::adapters::{DirectoryDownloads, EnvColorScheme, FileThemeStore, TokioDelay};
use crate::export::ReportExporter;
use crate::startup::AppConfig;
use crate::state::analytics::AnalyticsScreen;
use crate::state::chat::ChatScreen;
use crate::state::notifications::NotificationCenter;
use crate::state::subscription::{SubscriptionSnapshot, CURRENT_PLAN_NAME};
use crate::state::theme::{EffectiveTheme, ThemeState};
use crate::state::tools::ToolsScreen;
use crate::traits::clock::SystemClock;
use crate::traits::{Clock, ColorSchemeProbe, Delay, DownloadSink, ThemeStore};

/// Side-effect implementations the app runs against.
#[derive(Clone)]
pub struct AppDeps {
    pub clock: Arc<dyn Clock>,
    pub delay: Arc<dyn Delay>,
    pub theme_store: Arc<dyn ThemeStore>,
    pub color_scheme: Arc<dyn ColorSchemeProbe>,
    pub downloads: Arc<dyn DownloadSink>,
}

impl AppDeps {
    /// Real timers, files under the data directory and the host environment.
    pub fn production(config: &AppConfig) -> Self {
        Self {
            clock: Arc::new(SystemClock),
            delay: Arc::new(TokioDelay),
            theme_store: Arc::new(FileThemeStore::new(config.data_dir())),
            color_scheme: Arc::new(EnvColorScheme),
            downloads: Arc::new(DirectoryDownloads::new(config.resolved_downloads_dir())),
        }
    }
}

/// Main application state
pub struct App {
    pub config: AppConfig,
    clock: Arc<dyn Clock>,
    delay: Arc<dyn Delay>,
    color_scheme: Arc<dyn ColorSchemeProbe>,
    exporter: ReportExporter,
    /// Theme preference and host signal
    pub theme: ThemeState,
    /// Active toasts
    pub notifications: NotificationCenter,
    /// Subscription status as of the last mount
    pub subscription: SubscriptionSnapshot,
    /// Selected bottom tab
    pub tab: Tab,
    /// Bumped on every mount; async results from older mounts are stale
    pub generation: u64,
    pub chat: ChatScreen,
    pub analytics: AnalyticsScreen,
    pub tools: ToolsScreen,
    /// Overlay on top of the current screen
    pub modal: Option<Modal>,
    /// The user closed the expired modal; keep it hidden for this session
    pub expired_modal_dismissed: bool,
    /// Location of the most recent report export
    pub last_export: Option<PathBuf>,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Dirty flag: when true, the UI needs to be redrawn.
    pub needs_redraw: bool,
    /// Tick counter for animations (spinners, typing dots)
    pub tick_count: u64,
    /// Spawned tasks whose message has not been handled yet
    in_flight: usize,
    last_scheme_poll: DateTime<Utc>,
    /// Receiver for async messages
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("tab", &self.tab)
            .field("generation", &self.generation)
            .field("modal", &self.modal)
            .field("in_flight", &self.in_flight)
            .finish_non_exhaustive()
    }
}

impl App {
    /// Build the app. Nothing is scheduled until [`App::start`].
    pub fn new(config: AppConfig, deps: AppDeps) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let now = deps.clock.now();
        let theme = ThemeState::load(deps.theme_store.clone(), deps.color_scheme.detect());
        let notifications = NotificationCenter::new(deps.clock.clone())
            .with_default_duration(config.notification_duration_ms);
        let subscription =
            SubscriptionSnapshot::compute(CURRENT_PLAN_NAME, config.subscription_expiry, now);

        Self {
            exporter: ReportExporter::new(deps.downloads.clone()),
            clock: deps.clock,
            delay: deps.delay,
            color_scheme: deps.color_scheme,
            config,
            theme,
            notifications,
            subscription,
            tab: Tab::default(),
            generation: 0,
            chat: ChatScreen::new(),
            analytics: AnalyticsScreen::new(),
            tools: ToolsScreen::new(),
            modal: None,
            expired_modal_dismissed: false,
            last_export: None,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            in_flight: 0,
            last_scheme_poll: now,
            message_rx: Some(message_rx),
            message_tx,
        }
    }

    /// Mount the initial tab and schedule its loading.
    pub fn start(&mut self) {
        tracing::info!("Starting on tab {:?}", self.tab);
        self.mount();
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Effective theme used for rendering.
    pub fn effective_theme(&self) -> EffectiveTheme {
        self.theme.effective()
    }

    /// Number of spawned tasks that have not reported back.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        tracing::info!("Quit requested");
        self.should_quit = true;
    }

    /// Periodic update: toast decay, animations and host scheme polling.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);

        let removed = self.notifications.tick();
        if !removed.is_empty() || !self.notifications.is_empty() {
            self.mark_dirty();
        }
        if self.is_animating() {
            self.mark_dirty();
        }

        let now = self.clock.now();
        let poll_every = chrono::Duration::from_std(self.config.color_scheme_poll_interval)
            .unwrap_or_else(|_| chrono::Duration::seconds(2));
        if now - self.last_scheme_poll >= poll_every {
            self.last_scheme_poll = now;
            self.poll_color_scheme();
        }
    }

    /// Re-read the host colour scheme.
    pub fn poll_color_scheme(&mut self) {
        if self.theme.update_system(self.color_scheme.detect()) {
            self.mark_dirty();
        }
    }

    /// Skeletons, spinners or the typing indicator are visible.
    fn is_animating(&self) -> bool {
        match self.tab {
            Tab::Chat => !self.chat.loaded || self.chat.typing,
            Tab::Analytics => self.analytics.is_loading() || self.analytics.generating_report,
            Tab::Tools => !self.tools.catalog_loaded || self.tools.busy,
        }
    }

    /// Post `message` after `delay` from a spawned task.
    pub(crate) fn spawn_after(&mut self, delay: Duration, message: AppMessage) {
        self.in_flight += 1;
        let sleeper = self.delay.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            sleeper.sleep(delay).await;
            let _ = tx.send(message);
        });
    }

    pub(crate) fn exporter(&self) -> &ReportExporter {
        &self.exporter
    }

    pub(crate) fn delay(&self) -> Arc<dyn Delay> {
        self.delay.clone()
    }

    pub(crate) fn begin_task(&mut self) {
        self.in_flight += 1;
    }

    pub(crate) fn finish_task(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    /// Whether a screen-scoped message still belongs to the mounted screen.
    pub(crate) fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }
}
