//! Application configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::NaiveDate;

use crate::state::notifications::{DEFAULT_DURATION_MS, TICK_INTERVAL};
use crate::state::subscription::default_expiry_date;

/// Name of the per-user data directory under `$HOME`.
pub const DATA_DIR_NAME: &str = ".miniapp";

/// Runtime configuration.
///
/// Use the builder pattern to customize it.
///
/// # Example
///
/// ```ignore
/// use miniapp::startup::AppConfig;
///
/// let config = AppConfig::default()
///     .with_data_dir("/tmp/miniapp")
///     .with_tick_interval(std::time::Duration::from_millis(100));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Where `theme.json` and the log file live (default: `~/.miniapp`)
    pub data_dir: PathBuf,
    /// Where exports go; `None` means the OS downloads folder
    pub downloads_dir: Option<PathBuf>,
    /// UI tick driving toast decay and spinners (default: 50ms)
    pub tick_interval: Duration,
    /// How often the host colour scheme is re-read (default: 2s)
    pub color_scheme_poll_interval: Duration,
    /// Expiry date of the mocked subscription
    pub subscription_expiry: NaiveDate,
    /// Lifetime of toasts shown without an explicit duration
    pub notification_duration_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        let data_dir = dirs::home_dir()
            .map(|home| home.join(DATA_DIR_NAME))
            .unwrap_or_else(|| PathBuf::from(DATA_DIR_NAME));
        Self {
            data_dir,
            downloads_dir: None,
            tick_interval: TICK_INTERVAL,
            color_scheme_poll_interval: Duration::from_secs(2),
            subscription_expiry: default_expiry_date(),
            notification_duration_ms: DEFAULT_DURATION_MS,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    pub fn with_downloads_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.downloads_dir = Some(dir.into());
        self
    }

    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    pub fn with_color_scheme_poll_interval(mut self, interval: Duration) -> Self {
        self.color_scheme_poll_interval = interval;
        self
    }

    pub fn with_subscription_expiry(mut self, date: NaiveDate) -> Self {
        self.subscription_expiry = date;
        self
    }

    pub fn with_notification_duration_ms(mut self, duration_ms: u64) -> Self {
        self.notification_duration_ms = duration_ms;
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Explicit downloads dir, else the OS downloads folder, else
    /// `<data dir>/exports`.
    pub fn resolved_downloads_dir(&self) -> PathBuf {
        self.downloads_dir
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| self.data_dir.join("exports"))
    }

    pub fn log_file(&self) -> PathBuf {
        self.data_dir.join("miniapp.log")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.data_dir.ends_with(DATA_DIR_NAME));
        assert_eq!(config.tick_interval, Duration::from_millis(50));
        assert_eq!(config.color_scheme_poll_interval, Duration::from_secs(2));
        assert_eq!(config.subscription_expiry, default_expiry_date());
        assert_eq!(config.notification_duration_ms, 5000);
    }

    #[test]
    fn test_builder_chaining() {
        let config = AppConfig::new()
            .with_data_dir("/tmp/a")
            .with_downloads_dir("/tmp/b")
            .with_tick_interval(Duration::from_millis(10))
            .with_color_scheme_poll_interval(Duration::from_secs(9))
            .with_notification_duration_ms(100);
        assert_eq!(config.data_dir(), Path::new("/tmp/a"));
        assert_eq!(config.resolved_downloads_dir(), PathBuf::from("/tmp/b"));
        assert_eq!(config.log_file(), PathBuf::from("/tmp/a/miniapp.log"));
        assert_eq!(config.tick_interval, Duration::from_millis(10));
        assert_eq!(config.notification_duration_ms, 100);
    }
}
