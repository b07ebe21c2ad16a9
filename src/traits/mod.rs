//! Trait abstractions for dependency injection and testability.
//!
//! Every side effect the mini-app performs goes through one of these seams so
//! tests can swap in deterministic doubles from [`crate::adapters::mock`].
//!
//! # Traits
//!
//! - [`Clock`] - Current wall-clock instant
//! - [`Delay`] - Simulated latency for mock async work
//! - [`ThemeStore`] - Persistence of the theme preference
//! - [`ColorSchemeProbe`] - The host's light/dark signal
//! - [`DownloadSink`] - Where exported reports are written

pub mod clock;
pub mod color_scheme;
pub mod delay;
pub mod download;
pub mod theme_store;

pub use clock::Clock;
pub use color_scheme::ColorSchemeProbe;
pub use delay::Delay;
pub use download::DownloadSink;
pub use theme_store::ThemeStore;
