//! Reusable UI Components
//!
//! Building blocks shared by the screens and overlays. All of them take the
//! active [`Palette`](crate::ui::theme::Palette).
//!
//! ## Components
//!
//! - `TabSelector` - Bottom tab bar with the `▶` marker
//! - `InputField` - Labelled text or choice field for tool forms
//! - `Dialog` - Centered dialog overlay with rounded borders
//! - `Skeleton` - Pulsing placeholder bars for loading sections
//! - `Toast` - Notification stack with lifetime bars
//! - `Badge` - Subscription status badge

mod badge;
mod dialog_frame;
mod input_field;
mod skeleton;
mod tab_selector;
mod toast;

pub use badge::{compact_badge, full_badge};
pub use dialog_frame::Dialog;
pub use input_field::{render_input_field, InputFieldConfig, INPUT_FIELD_HEIGHT};
pub use skeleton::render_skeleton;
pub use tab_selector::render_tab_selector;
pub use toast::render_toasts;
