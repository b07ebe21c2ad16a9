//! Process startup: configuration and logging.
//!
//! # Components
//!
//! - [`config`] - `AppConfig` builder
//! - [`logging`] - File-backed tracing subscriber

pub mod config;
pub mod logging;

pub use config::AppConfig;
pub use logging::init_logging;
