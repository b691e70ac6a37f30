//! Debounce and throttle primitives.
//!
//! The search box and filter form coalesce bursts of input before hitting
//! the network; scroll handlers sample at a fixed cadence. Both primitives
//! take explicit [`Instant`]s instead of reading a clock, so the timing
//! logic is testable without sleeping.

use std::time::{Duration, Instant};

/// Default input-coalescing delay for network-bound handlers.
pub const API_DEBOUNCE: Duration = Duration::from_millis(300);

/// Sampling interval for scroll-driven handlers.
pub const SCROLL_THROTTLE: Duration = Duration::from_millis(100);

/// Trailing-edge debouncer: fires once input has been quiet for the delay.
///
/// Each [`poke`](Self::poke) re-arms the deadline; [`ready`](Self::ready)
/// reports (and consumes) a fire once the deadline has passed.
#[derive(Clone, Copy, Debug)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Record an input at `now`, postponing any pending fire.
    pub fn poke(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Whether the pending fire is due at `now`. Consumes the fire.
    pub fn ready(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Drop any pending fire.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

/// Leading-edge throttle: lets the first call through, then suppresses
/// until the interval has elapsed.
#[derive(Clone, Copy, Debug)]
pub struct Throttle {
    interval: Duration,
    last: Option<Instant>,
}

impl Throttle {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    /// Whether a call at `now` may proceed.
    pub fn allow(&mut self, now: Instant) -> bool {
        match self.last {
            Some(last) if now.duration_since(last) < self.interval => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }
}

#[cfg(test)]
#[path = "debounce_test.rs"]
mod tests;
