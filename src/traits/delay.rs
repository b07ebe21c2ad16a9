//! Simulated latency abstraction.
//!
//! All mock async work (loading screens, sending messages, exporting) waits
//! through [`Delay`]. Production uses real timers; tests use a zero-delay
//! implementation so flows complete immediately.

use std::time::Duration;

use async_trait::async_trait;

/// Waits for a fixed amount of time.
///
/// Waits are one-shot and not cancellable; a caller that no longer cares
/// about the result simply ignores it when it arrives.
#[async_trait]
pub trait Delay: Send + Sync {
    async fn sleep(&self, duration: Duration);
}
