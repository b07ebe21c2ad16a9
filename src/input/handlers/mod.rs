//! Command handlers for executing commands.
//!
//! This module contains handler functions organized by category:
//! - [`modal`] - Overlays: expired notice, plan picker, chat menu, report
//!   preview, tool form and delete confirmation
//! - [`navigation`] - Tab switching and toast dismissal
//! - [`screen`] - Per-tab actions on the chat, analytics and tools screens

pub mod modal;
pub mod navigation;
pub mod screen;

pub use modal::*;
pub use navigation::*;
pub use screen::*;
