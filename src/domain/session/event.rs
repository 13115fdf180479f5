//! Event descriptor value object.

use serde::{Deserialize, Serialize};

use super::EventError;

/// Sentinel timeout meaning "never auto-expires".
pub const INDEFINITE_TIMEOUT: i64 = -1;

/// A named, timeout-bearing event submitted to the tracker.
///
/// # Invariants
///
/// - `name` is non-empty after trimming
/// - `timeout_minutes >= -1`: `-1` is indefinite, `0` expires at receipt,
///   positive values expire that many minutes after receipt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDescriptor {
    name: String,
    timeout_minutes: i64,
}

impl EventDescriptor {
    /// Create a validated event descriptor.
    ///
    /// # Errors
    ///
    /// - `EmptyName` if the name is empty or whitespace-only
    /// - `TimeoutOutOfRange` if the timeout is less than `-1`
    pub fn new(name: impl Into<String>, timeout_minutes: i64) -> Result<Self, EventError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(EventError::EmptyName);
        }
        if timeout_minutes < INDEFINITE_TIMEOUT {
            return Err(EventError::TimeoutOutOfRange {
                actual: timeout_minutes,
            });
        }
        Ok(Self {
            name,
            timeout_minutes,
        })
    }

    /// Returns the event name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the timeout in minutes.
    pub fn timeout_minutes(&self) -> i64 {
        self.timeout_minutes
    }

    /// Returns true if this event never auto-expires.
    pub fn is_indefinite(&self) -> bool {
        self.timeout_minutes == INDEFINITE_TIMEOUT
    }
}
