//! Best-effort fixed-interval tick timer
//!
//! The deadline is re-armed from the moment a tick finishes, so a slow host
//! drifts instead of running a burst of catch-up ticks.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct Ticker {
    interval: Duration,
    deadline: Instant,
}

impl Ticker {
    /// First tick is due immediately
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            deadline: now,
        }
    }

    /// How long a host may wait for input before the next tick is due
    pub fn timeout(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    /// Schedule the next tick one interval after `now`
    pub fn rearm(&mut self, now: Instant) {
        self.deadline = now + self.interval;
    }
}
