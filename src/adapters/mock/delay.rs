//! Zero-latency delay.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::traits::Delay;

/// Returns immediately, remembering every requested duration.
#[derive(Debug, Clone, Default)]
pub struct NoDelay {
    requested: Arc<Mutex<Vec<Duration>>>,
}

impl NoDelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Durations requested so far, in call order.
    pub fn requested(&self) -> Vec<Duration> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl Delay for NoDelay {
    async fn sleep(&self, duration: Duration) {
        self.requested.lock().unwrap().push(duration);
        tokio::task::yield_now().await;
    }
}
