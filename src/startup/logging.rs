//! Tracing setup.
//!
//! The UI owns the terminal, so log lines go to `<data dir>/miniapp.log`.
//! The filter comes from `MINIAPP_LOG` and defaults to `miniapp=info`.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "MINIAPP_LOG";

const DEFAULT_FILTER: &str = "miniapp=info";

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber writing to `log_file`.
///
/// Returns `false` when the file cannot be opened or a subscriber is already
/// installed; the app then runs without logs.
pub fn init_logging(log_file: &Path) -> bool {
    if let Some(parent) = log_file.parent() {
        if std::fs::create_dir_all(parent).is_err() {
            return false;
        }
    }
    let file = match OpenOptions::new().create(true).append(true).open(log_file) {
        Ok(file) => file,
        Err(_) => return false,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .is_ok()
}
