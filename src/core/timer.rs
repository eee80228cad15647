//! One-shot deferred tasks for the cooperative game loop.
//!
//! Nothing here sleeps or spawns. A task is scheduled for a point on the
//! game clock and handed back by [`Timer::poll`] once the clock reaches it.
//! Scheduling returns a [`TimerToken`] that cancels the task; a cancelled or
//! superseded token never fires.
//!
//! ```
//! use std::time::Duration;
//! use memory_match::core::Timer;
//!
//! let mut timer = Timer::new();
//! let token = timer.schedule(Duration::ZERO, Duration::from_secs(1), "resolve");
//!
//! assert_eq!(timer.poll(Duration::from_millis(500)), None);
//! assert_eq!(timer.poll(Duration::from_secs(1)), Some("resolve"));
//! assert!(!timer.cancel(token)); // already fired
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Cancellation handle for a scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerToken(u64);

impl TimerToken {
    /// Get the raw token value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Debug)]
struct Scheduled<T> {
    token: TimerToken,
    due: Duration,
    payload: T,
}

/// Single-slot deferred task.
///
/// At most one task is pending; scheduling again replaces it.
#[derive(Clone, Debug)]
pub struct Timer<T> {
    pending: Option<Scheduled<T>>,
    next_token: u64,
}

impl<T> Default for Timer<T> {
    fn default() -> Self {
        Self {
            pending: None,
            next_token: 0,
        }
    }
}

impl<T> Timer<T> {
    /// Create an idle timer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `payload` to fire `delay` after `now`.
    pub fn schedule(&mut self, now: Duration, delay: Duration, payload: T) -> TimerToken {
        let token = TimerToken(self.next_token);
        self.next_token += 1;
        self.pending = Some(Scheduled {
            token,
            due: now.saturating_add(delay),
            payload,
        });
        token
    }

    /// Cancel the task for `token`.
    ///
    /// Returns `true` if a pending task was removed.
    pub fn cancel(&mut self, token: TimerToken) -> bool {
        if self.pending.as_ref().is_some_and(|p| p.token == token) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Take the pending payload if it is due at `now`.
    pub fn poll(&mut self, now: Duration) -> Option<T> {
        if self.pending.as_ref().is_some_and(|p| p.due <= now) {
            self.pending.take().map(|p| p.payload)
        } else {
            None
        }
    }

    /// Is a task waiting to fire?
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Clock time the pending task fires at.
    #[must_use]
    pub fn due_at(&self) -> Option<Duration> {
        self.pending.as_ref().map(|p| p.due)
    }
}
