//! Cancellable one-shot timers driven by an external clock.
//!
//! Nothing here spawns threads or sleeps. The event loop passes the current
//! [`Instant`] in and asks whether a deadline has passed, which keeps timing
//! deterministic under test.

use std::time::{Duration, Instant};

/// A one-shot deadline that can be re-armed or cancelled.
///
/// Scheduling while pending replaces the previous deadline, so at most one
/// firing is ever outstanding.
#[derive(Debug, Clone)]
pub struct CancellableTimer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl CancellableTimer {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Arms the timer to fire `delay` after `now`.
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns `true` exactly once when `now` reaches the deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Trailing-edge debouncer: only the last value of a burst is delivered.
///
/// # Examples
///
/// ```
/// use std::time::{Duration, Instant};
/// use vagas::infrastructure::Debouncer;
///
/// let start = Instant::now();
/// let mut debouncer = Debouncer::new(Duration::from_millis(300));
/// debouncer.call("b", start);
/// debouncer.call("ba", start + Duration::from_millis(100));
///
/// assert_eq!(debouncer.poll(start + Duration::from_millis(350)), None);
/// assert_eq!(debouncer.poll(start + Duration::from_millis(400)), Some("ba"));
/// ```
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    timer: CancellableTimer,
    pending: Option<T>,
}

impl<T> Debouncer<T> {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            timer: CancellableTimer::new(delay),
            pending: None,
        }
    }

    /// Records `value` and restarts the quiet period from `now`.
    pub fn call(&mut self, value: T, now: Instant) {
        self.pending = Some(value);
        self.timer.schedule(now);
    }

    /// Drops any pending value without delivering it.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.timer.cancel();
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.timer.is_pending()
    }

    /// Delivers the pending value now, without waiting out the quiet period.
    ///
    /// Used when the event source goes away mid-burst so the last value is
    /// not lost.
    pub fn flush(&mut self) -> Option<T> {
        self.timer.cancel();
        self.pending.take()
    }

    /// Delivers the pending value once the quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        if self.timer.poll(now) {
            self.pending.take()
        } else {
            None
        }
    }
}
