//! Mini-app TUI - business assistant chat, analytics and tools in the terminal
//!
//! This library exposes modules for use in integration tests and benchmarks.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod error;
pub mod export;
pub mod input;
pub mod startup;
pub mod state;
pub mod terminal;
pub mod traits;
pub mod ui;
