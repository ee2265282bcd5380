//! Sliding-window rate limiting over caller-supplied timestamps.
//!
//! The decision path reads no clock: callers pass each request's timestamp
//! as an offset from their own epoch, which keeps admission decisions
//! deterministic and replayable against recorded traffic (the common case
//! when hunting abusive clients in access logs).

use std::collections::{HashMap, VecDeque};
use std::time::Duration;

/// Configuration for sliding-window rate limiting
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum admitted requests per window, per client
    pub limit: usize,
    /// Width of the sliding window
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            limit: 5,
            window: Duration::from_secs(10),
        }
    }
}

/// Per-client sliding-window rate limiter.
///
/// Keeps one timestamp history per client. On each request the history is
/// pruned of entries at or beyond the window edge, then the request is
/// admitted if the remaining count is below the limit. Only admitted
/// requests consume window capacity. Timestamps are expected to be
/// non-decreasing per client.
#[derive(Debug)]
pub struct SlidingWindowLimiter {
    config: RateLimitConfig,
    histories: HashMap<String, VecDeque<Duration>>,
}

impl SlidingWindowLimiter {
    /// Create a limiter with the given configuration
    #[must_use]
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            histories: HashMap::new(),
        }
    }

    /// Decide whether `client`'s request at timestamp `at` is admitted,
    /// recording it if so.
    pub fn allow_at(&mut self, client: &str, at: Duration) -> bool {
        let history = self.histories.entry(client.to_string()).or_default();

        if let Some(cutoff) = at.checked_sub(self.config.window) {
            while history.front().is_some_and(|&seen| seen <= cutoff) {
                history.pop_front();
            }
        }

        if history.len() < self.config.limit {
            history.push_back(at);
            true
        } else {
            tracing::trace!(client, at_secs = at.as_secs_f64(), "request denied");
            false
        }
    }

    /// Admitted requests still inside `client`'s window as of `at`
    #[must_use]
    pub fn current_count(&self, client: &str, at: Duration) -> usize {
        let Some(history) = self.histories.get(client) else {
            return 0;
        };
        match at.checked_sub(self.config.window) {
            Some(cutoff) => history.iter().filter(|&&seen| seen > cutoff).count(),
            None => history.len(),
        }
    }

    /// Number of clients with a recorded history
    #[must_use]
    pub fn tracked_clients(&self) -> usize {
        self.histories.len()
    }
}
