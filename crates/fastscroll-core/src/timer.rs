//! Cancellable delayed callbacks.
//!
//! `Timers` only does the bookkeeping. Each `schedule` call queues a
//! [`TimerRequest`] that the UI arms with a real timer; when that timer
//! elapses the UI hands the token back through [`Timers::fire`]. Cancelling
//! makes every outstanding token stale, so late deliveries are dropped.

use std::time::Duration;

/// Handle of one scheduled callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(u64);

impl TimerToken {
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// A callback the UI still has to arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerRequest {
    pub token: TimerToken,
    pub delay: Duration,
}

#[derive(Debug, Default)]
pub struct Timers {
    next: u64,
    live: Vec<TimerToken>,
    requests: Vec<TimerRequest>,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules a callback after `delay` and returns its token.
    pub fn schedule(&mut self, delay: Duration) -> TimerToken {
        self.next += 1;
        let token = TimerToken(self.next);
        self.live.push(token);
        self.requests.push(TimerRequest { token, delay });
        token
    }

    /// Cancels every pending callback.
    pub fn cancel_all(&mut self) {
        self.live.clear();
        self.requests.clear();
    }

    /// Consumes `token`. Returns true if it was still live.
    pub fn fire(&mut self, token: TimerToken) -> bool {
        match self.live.iter().position(|t| *t == token) {
            Some(index) => {
                self.live.swap_remove(index);
                true
            }
            None => false,
        }
    }

    pub fn is_pending(&self, token: TimerToken) -> bool {
        self.live.contains(&token)
    }

    pub fn pending_count(&self) -> usize {
        self.live.len()
    }

    /// Takes the callbacks scheduled since the last drain.
    pub fn drain_requests(&mut self) -> Vec<TimerRequest> {
        std::mem::take(&mut self.requests)
    }
}
