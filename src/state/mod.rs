//! Application state containers.
//!
//! - [`theme`]: light/dark/system preference, the only persisted value
//! - [`subscription`]: derived expiry snapshot and plan catalog
//! - [`notifications`]: toast queue with decay
//! - [`chat`], [`analytics`], [`tools`]: per-screen state, reset on every mount
//! - [`forms`]: editor forms used by the tools screen

pub mod analytics;
pub mod chat;
pub mod forms;
pub mod notifications;
pub mod subscription;
pub mod theme;
pub mod tools;

pub use analytics::{AnalyticsScreen, AnalyticsSection, AnalyticsSnapshot, ChartGeometry};
pub use chat::ChatScreen;
pub use notifications::{Notification, NotificationCenter, NotificationId, NotificationKind};
pub use subscription::{SubscriptionSnapshot, SubscriptionStatus};
pub use theme::{EffectiveTheme, ThemePreference, ThemeState};
pub use tools::{ToolKind, ToolView, ToolsScreen};
