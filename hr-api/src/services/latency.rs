//! Simulated dependency latency
//!
//! Every lookup waits a random, uniformly distributed number of milliseconds
//! before touching the store. The wait is a tokio sleep: it holds no
//! connection or lock and cannot be cancelled from inside the service.

use std::time::Duration;

use rand::Rng;
use thiserror::Error;

/// Inverted latency window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("minimum delay {min_ms}ms exceeds maximum delay {max_ms}ms")]
pub struct InvalidLatencyWindow {
    pub min_ms: u64,
    pub max_ms: u64,
}

/// Inclusive `[min, max]` millisecond window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedLatency {
    min_ms: u64,
    max_ms: u64,
}

impl SimulatedLatency {
    pub const DEFAULT_MIN_MS: u64 = 200;
    pub const DEFAULT_MAX_MS: u64 = 500;

    pub fn from_millis(min_ms: u64, max_ms: u64) -> Result<Self, InvalidLatencyWindow> {
        if min_ms > max_ms {
            return Err(InvalidLatencyWindow { min_ms, max_ms });
        }
        Ok(Self { min_ms, max_ms })
    }

    /// No delay at all
    pub const fn disabled() -> Self {
        Self {
            min_ms: 0,
            max_ms: 0,
        }
    }

    pub fn min(&self) -> Duration {
        Duration::from_millis(self.min_ms)
    }

    pub fn max(&self) -> Duration {
        Duration::from_millis(self.max_ms)
    }

    /// Draw one delay from the window
    pub fn sample(&self) -> Duration {
        if self.min_ms == self.max_ms {
            return self.min();
        }
        let ms = rand::thread_rng().gen_range(self.min_ms..=self.max_ms);
        Duration::from_millis(ms)
    }

    /// Sleep for one sampled delay
    pub async fn wait(&self) {
        let delay = self.sample();
        if delay.is_zero() {
            return;
        }
        tracing::trace!(delay_ms = delay.as_millis() as u64, "Simulating dependency latency");
        tokio::time::sleep(delay).await;
    }
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self {
            min_ms: Self::DEFAULT_MIN_MS,
            max_ms: Self::DEFAULT_MAX_MS,
        }
    }
}
