//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`ManualClock`] - Clock that only moves when told to
//! - [`NoDelay`] - Delay that returns immediately and records what was asked
//! - [`InMemoryThemeStore`] - Theme store with failure switches
//! - [`FixedColorScheme`] - Host colour scheme settable from tests
//! - [`InMemoryDownloads`] - Download sink that keeps files in memory

pub mod clock;
pub mod color_scheme;
pub mod delay;
pub mod downloads;
pub mod theme_store;

pub use clock::ManualClock;
pub use color_scheme::FixedColorScheme;
pub use delay::NoDelay;
pub use downloads::InMemoryDownloads;
pub use theme_store::InMemoryThemeStore;
