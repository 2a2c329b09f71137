//! Simulated latency.
//!
//! The pure functions are synchronous. A UI that wants to show a spinner can
//! inject a delay here; it is never part of the functions' results.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

/// Delay applied before a service call completes.
#[async_trait]
pub trait Latency: Send + Sync {
    /// Wait out the delay.
    async fn wait(&self);
}

/// No delay.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLatency;

#[async_trait]
impl Latency for NoLatency {
    async fn wait(&self) {}
}

/// A fixed delay backed by the tokio timer.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedLatency {
    delay: Duration,
}

impl SimulatedLatency {
    /// Create a latency of `delay`.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// The configured delay.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl Latency for SimulatedLatency {
    async fn wait(&self) {
        tokio::time::sleep(self.delay).await;
    }
}

/// Build a latency from a millisecond setting; zero means none.
#[must_use]
pub fn from_millis(ms: u64) -> Arc<dyn Latency> {
    if ms == 0 {
        Arc::new(NoLatency)
    } else {
        Arc::new(SimulatedLatency::new(Duration::from_millis(ms)))
    }
}
