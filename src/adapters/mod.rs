//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`TokioDelay`] - Real timers via `tokio::time::sleep`
//! - [`FileThemeStore`] - Theme preference stored as JSON in the data directory
//! - [`EnvColorScheme`] - Host light/dark signal from `COLORFGBG`
//! - [`DirectoryDownloads`] - Exported files written into a downloads folder
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles for all of the above plus a
//! manually driven clock.

pub mod env_color_scheme;
pub mod file_downloads;
pub mod file_theme_store;
pub mod mock;
pub mod tokio_delay;

pub use env_color_scheme::EnvColorScheme;
pub use file_downloads::DirectoryDownloads;
pub use file_theme_store::FileThemeStore;
pub use tokio_delay::TokioDelay;
