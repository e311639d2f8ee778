//! Poll-based one-shot timers
//!
//! The original frame loop defers two mutations (blade reset, death respawn)
//! to a later wall-clock instant. To keep the simulation single-threaded and
//! deterministic, those are modeled as single-shot deadlines polled once per
//! frame against the caller-supplied monotonic clock, never as OS timers.

use serde::{Deserialize, Serialize};

/// A single-shot deadline in milliseconds on the caller's monotonic clock.
///
/// Fire-and-forget with no cancellation: once armed, the deadline is reported
/// as elapsed exactly once, however many frames pass before or after it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OneShot {
    deadline_ms: f64,
    fired: bool,
}

impl OneShot {
    /// Arm a timer that elapses `delay_ms` after `now_ms`.
    pub fn after(now_ms: f64, delay_ms: f64) -> Self {
        Self {
            deadline_ms: now_ms + delay_ms,
            fired: false,
        }
    }

    /// Returns true exactly once, on the first poll at or past the deadline.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        if !self.fired && now_ms >= self.deadline_ms {
            self.fired = true;
            true
        } else {
            false
        }
    }

    /// Whether the timer has already reported its deadline.
    pub fn is_spent(&self) -> bool {
        self.fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_exactly_once() {
        let mut timer = OneShot::after(0.0, 100.0);
        assert!(!timer.poll(50.0));
        assert!(timer.poll(100.0));
        assert!(!timer.poll(150.0));
        assert!(timer.is_spent());
    }

    #[test]
    fn test_fires_even_after_long_gap() {
        // A frame stall past the deadline must not swallow the deadline.
        let mut timer = OneShot::after(0.0, 100.0);
        assert!(timer.poll(5000.0));
        assert!(!timer.poll(5001.0));
    }
}
