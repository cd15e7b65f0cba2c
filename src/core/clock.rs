//! Clock sources and the periodic ticker driving live refreshes.

use chrono::{Local, NaiveDateTime, Timelike};
use std::thread;
use std::time::{Duration, Instant};

/// Source of the current wall-clock instant.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall clock, truncated to whole seconds.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        let now = Local::now().naive_local();
        now.with_nanosecond(0).unwrap_or(now)
    }
}

/// Always reports the same instant; used for `--at` and in tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Yields the clock's instant once per `interval`.
///
/// The first tick is immediate. With a limit the ticker stops after that many
/// ticks; without one it runs until dropped.
pub struct Ticker<C: Clock> {
    clock: C,
    interval: Duration,
    remaining: Option<u64>,
    next_at: Option<Instant>,
}

impl<C: Clock> Ticker<C> {
    pub fn new(clock: C, interval: Duration) -> Self {
        Self {
            clock,
            interval,
            remaining: None,
            next_at: None,
        }
    }

    pub fn with_limit(mut self, ticks: u64) -> Self {
        self.remaining = Some(ticks);
        self
    }

    /// Stop producing ticks.
    pub fn stop(&mut self) {
        self.remaining = Some(0);
    }
}

impl<C: Clock> Iterator for Ticker<C> {
    type Item = NaiveDateTime;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(remaining) = self.remaining.as_mut() {
            if *remaining == 0 {
                return None;
            }
            *remaining -= 1;
        }

        if let Some(next_at) = self.next_at {
            let wait = next_at.saturating_duration_since(Instant::now());
            if !wait.is_zero() {
                thread::sleep(wait);
            }
            self.next_at = Some(next_at + self.interval);
        } else {
            self.next_at = Some(Instant::now() + self.interval);
        }

        Some(self.clock.now())
    }
}
