//! Toast notification manager.
//!
//! Keeps an insertion-ordered list of active toasts. Toasts with a non-zero
//! duration decay on every tick and remove themselves once their remaining
//! fraction reaches zero. Loading toasts never decay; whoever created one must
//! hide it explicitly when the operation finishes or fails.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::traits::Clock;

/// Default lifetime of success/error/info toasts.
pub const DEFAULT_DURATION_MS: u64 = 5000;

/// Interval at which progress bars are recomputed.
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Unique, insertion-ordered toast identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Toast kind. Every display decision is an exhaustive match on this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
    Loading,
}

impl NotificationKind {
    /// Leading glyph. Loading toasts animate through the spinner instead.
    pub fn icon(self) -> &'static str {
        match self {
            NotificationKind::Success => "✓",
            NotificationKind::Error => "✗",
            NotificationKind::Info => "ℹ",
            NotificationKind::Loading => "⠋",
        }
    }

    /// Whether toasts of this kind may decay at all.
    pub fn auto_dismisses(self) -> bool {
        match self {
            NotificationKind::Success | NotificationKind::Error | NotificationKind::Info => true,
            NotificationKind::Loading => false,
        }
    }

    /// Whether the user can close the toast by hand.
    pub fn is_closable(self) -> bool {
        self.auto_dismisses()
    }
}

/// A single toast. Never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub title: String,
    pub message: Option<String>,
    /// Lifetime in milliseconds; 0 means "until hidden".
    pub duration_ms: u64,
    pub started_at: DateTime<Utc>,
}

impl Notification {
    /// Whether this toast shows a shrinking progress bar and expires.
    pub fn decays(&self) -> bool {
        self.kind.auto_dismisses() && self.duration_ms > 0
    }

    /// `(duration - elapsed) / duration`, clamped to `>= 0`.
    ///
    /// `None` for toasts that never decay.
    pub fn remaining_fraction(&self, now: DateTime<Utc>) -> Option<f64> {
        if !self.decays() {
            return None;
        }
        let elapsed = (now - self.started_at).num_milliseconds().max(0) as f64;
        let duration = self.duration_ms as f64;
        Some(((duration - elapsed) / duration).max(0.0))
    }
}

/// Owner of the active toast set.
pub struct NotificationCenter {
    items: Vec<Notification>,
    next_id: u64,
    default_duration_ms: u64,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for NotificationCenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationCenter")
            .field("items", &self.items)
            .field("next_id", &self.next_id)
            .finish_non_exhaustive()
    }
}

impl NotificationCenter {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
            default_duration_ms: DEFAULT_DURATION_MS,
            clock,
        }
    }

    /// Override the lifetime used when `show` gets no explicit duration.
    pub fn with_default_duration(mut self, duration_ms: u64) -> Self {
        self.default_duration_ms = duration_ms;
        self
    }

    /// Append a toast and return its id. `duration_ms` defaults to
    /// [`DEFAULT_DURATION_MS`] unless overridden.
    pub fn show(
        &mut self,
        kind: NotificationKind,
        title: &str,
        message: Option<&str>,
        duration_ms: Option<u64>,
    ) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id += 1;

        let notification = Notification {
            id,
            kind,
            title: title.to_string(),
            message: message.map(str::to_string),
            duration_ms: duration_ms.unwrap_or(self.default_duration_ms),
            started_at: self.clock.now(),
        };
        tracing::debug!(
            "Notification {} shown: {:?} {:?}",
            id.value(),
            kind,
            notification.title
        );
        self.items.push(notification);
        id
    }

    pub fn show_success(&mut self, title: &str, message: Option<&str>) -> NotificationId {
        self.show(NotificationKind::Success, title, message, None)
    }

    pub fn show_error(&mut self, title: &str, message: Option<&str>) -> NotificationId {
        self.show(NotificationKind::Error, title, message, None)
    }

    pub fn show_info(&mut self, title: &str, message: Option<&str>) -> NotificationId {
        self.show(NotificationKind::Info, title, message, None)
    }

    /// Show an indefinite progress toast. Must be hidden explicitly.
    pub fn show_loading(&mut self, title: &str, message: Option<&str>) -> NotificationId {
        self.show(NotificationKind::Loading, title, message, Some(0))
    }

    /// Remove a toast. Unknown ids are ignored.
    pub fn hide(&mut self, id: NotificationId) {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        if self.items.len() != before {
            tracing::debug!("Notification {} hidden", id.value());
        }
    }

    /// Close the newest toast the user is allowed to close.
    pub fn dismiss_latest(&mut self) -> Option<NotificationId> {
        let id = self
            .items
            .iter()
            .rev()
            .find(|n| n.kind.is_closable())
            .map(|n| n.id)?;
        self.hide(id);
        Some(id)
    }

    /// Recompute decay and remove every toast whose remaining fraction hit 0.
    ///
    /// Returns the removed ids in display order.
    pub fn tick(&mut self) -> Vec<NotificationId> {
        let now = self.clock.now();
        let expired: Vec<NotificationId> = self
            .items
            .iter()
            .filter(|n| n.remaining_fraction(now) == Some(0.0))
            .map(|n| n.id)
            .collect();
        for id in &expired {
            self.hide(*id);
        }
        expired
    }

    /// Remaining fraction of a toast at the current instant.
    pub fn remaining_fraction(&self, id: NotificationId) -> Option<f64> {
        let now = self.clock.now();
        self.get(id).and_then(|n| n.remaining_fraction(now))
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.items.iter().find(|n| n.id == id)
    }

    pub fn contains(&self, id: NotificationId) -> bool {
        self.get(id).is_some()
    }

    /// Active toasts, oldest first.
    pub fn active(&self) -> &[Notification] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// True while any loading toast is on screen.
    pub fn has_loading(&self) -> bool {
        self.items
            .iter()
            .any(|n| n.kind == NotificationKind::Loading)
    }
}
