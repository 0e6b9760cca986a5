//! Injectable clock source.
//!
//! The scheduler samples "now" once per tick through the [`Clock`] trait so
//! tests can drive evaluation deterministically. Production code uses
//! [`SystemClock`]; tests use [`ManualClock`] and advance it by hand.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};

use crate::error::ClockError;

/// Supplies the current instant to the evaluation loop.
pub trait Clock: Send + Sync {
    /// Read the current instant. An `Err` invalidates only the tick that
    /// requested it; callers retry on their next schedule.
    fn now(&self) -> Result<DateTime<Utc>, ClockError>;
}

/// Wall-clock time via `chrono`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Result<DateTime<Utc>, ClockError> {
        Ok(Utc::now())
    }
}

/// Hand-driven clock for deterministic testing and replay.
///
/// Starts at the instant given to [`ManualClock::new`] and only moves when
/// [`set`](ManualClock::set) or [`advance`](ManualClock::advance) is called.
/// `set_available(false)` makes subsequent reads fail, simulating a clock
/// source outage.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
    available: AtomicBool,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
            available: AtomicBool::new(true),
        }
    }

    /// Move the clock to an absolute instant.
    pub fn set(&self, to: DateTime<Utc>) {
        if let Ok(mut now) = self.now.lock() {
            *now = to;
        }
    }

    /// Move the clock forward by a delta.
    pub fn advance(&self, by: Duration) {
        if let Ok(mut now) = self.now.lock() {
            *now += by;
        }
    }

    /// Toggle whether reads succeed.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Result<DateTime<Utc>, ClockError> {
        if !self.available.load(Ordering::SeqCst) {
            return Err(ClockError("manual clock marked unavailable".into()));
        }
        self.now
            .lock()
            .map(|now| *now)
            .map_err(|_| ClockError("manual clock mutex poisoned".into()))
    }
}
