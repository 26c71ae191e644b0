//! Search input debouncing
//!
//! Timer-reset pattern: each keystroke replaces the pending value and pushes
//! the deadline out by the full delay, so a burst of rapid inputs coalesces
//! into a single commit of the last value. The event loop polls the debouncer
//! on every tick; no timers or background tasks are involved.

use std::time::{Duration, Instant};

/// Delay between the last keystroke and the search being applied
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Coalesces rapid value updates into one delayed commit
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<(String, Instant)>,
}

impl Debouncer {
    /// Creates a debouncer with the given delay
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Records a new value, cancelling any pending commit and rescheduling
    /// the deadline at `now + delay`
    pub fn input(&mut self, value: String, now: Instant) {
        self.pending = Some((value, now + self.delay));
    }

    /// Returns the pending value once its deadline has passed
    ///
    /// Called from the event loop tick. Returns `None` while the deadline is
    /// still in the future or when nothing is pending.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let due = matches!(&self.pending, Some((_, deadline)) if now >= *deadline);
        if due {
            self.pending.take().map(|(value, _)| value)
        } else {
            None
        }
    }

    /// Commits the pending value immediately, if any
    ///
    /// Used when the user presses Enter to apply the search without waiting.
    pub fn flush(&mut self) -> Option<String> {
        self.pending.take().map(|(value, _)| value)
    }

    /// Whether a commit is scheduled
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(SEARCH_DEBOUNCE)
    }
}
