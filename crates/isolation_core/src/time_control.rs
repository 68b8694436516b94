//! Search clocks.
//!
//! The search engines only ever ask one question of a clock: how much time
//! is left before the caller forfeits. They poll it before every node
//! expansion and abort once it drops below their configured threshold.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Read-only source of remaining time.
pub trait Clock {
    fn time_left(&self) -> Duration;
}

/// Any closure returning the remaining time is a clock, which lets tests
/// script expiry precisely.
impl<F> Clock for F
where
    F: Fn() -> Duration,
{
    fn time_left(&self) -> Duration {
        self()
    }
}

/// Wall-clock budget for a single move.
///
/// Cloning shares the stop flag, so a controller thread can force the
/// remaining time to zero while a search polls it.
#[derive(Debug, Clone)]
pub struct TimeControl {
    /// Shared stop flag
    stopped: Arc<AtomicBool>,
    /// When the budget started counting down
    start_time: Instant,
    /// Budget for this move (None = infinite)
    time_limit: Option<Duration>,
}

impl TimeControl {
    /// Create a time controller whose budget starts now.
    pub fn new(time_limit: Option<Duration>) -> Self {
        Self {
            stopped: Arc::new(AtomicBool::new(false)),
            start_time: Instant::now(),
            time_limit,
        }
    }

    /// A clock that never runs out unless stopped.
    pub fn infinite() -> Self {
        Self::new(None)
    }

    /// Restart the budget from now and clear any stop request.
    pub fn restart(&mut self) {
        self.start_time = Instant::now();
        self.stopped.store(false, Ordering::SeqCst);
    }

    /// Force the remaining time to zero.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Whether the elapsed time has gone past the limit.
    pub fn is_expired(&self) -> bool {
        self.time_limit.is_some_and(|limit| self.elapsed() > limit)
    }

    /// Remaining time; `Duration::MAX` without a limit, zero once stopped.
    pub fn remaining(&self) -> Duration {
        if self.is_stopped() {
            return Duration::ZERO;
        }
        match self.time_limit {
            Some(limit) => limit.saturating_sub(self.elapsed()),
            None => Duration::MAX,
        }
    }
}

impl Clock for TimeControl {
    fn time_left(&self) -> Duration {
        self.remaining()
    }
}

impl Default for TimeControl {
    fn default() -> Self {
        Self::infinite()
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
