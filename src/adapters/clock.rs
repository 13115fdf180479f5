//! Clock adapters.

use std::sync::RwLock;

use crate::domain::foundation::Timestamp;
use crate::ports::Clock;

/// Real-time clock backed by the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// Manually-driven clock for deterministic tests.
///
/// This adapter is for **testing only** and should not be used in
/// production. It uses `.expect()` on lock operations which will panic if
/// the lock is poisoned.
#[derive(Debug)]
pub struct ManualClock {
    now: RwLock<Timestamp>,
}

impl ManualClock {
    /// Creates a clock frozen at the given instant.
    pub fn starting_at(now: Timestamp) -> Self {
        Self {
            now: RwLock::new(now),
        }
    }

    /// Moves the clock to the given instant.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn set(&self, now: Timestamp) {
        *self.now.write().expect("ManualClock: lock poisoned") = now;
    }

    /// Advances the clock by the given number of minutes.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn advance_minutes(&self, minutes: i64) {
        let mut now = self.now.write().expect("ManualClock: lock poisoned");
        *now = now.plus_minutes(minutes);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        *self.now.read().expect("ManualClock: lock poisoned")
    }
}
