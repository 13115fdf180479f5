//! Session-specific error types.

use thiserror::Error;

/// Errors raised when an event descriptor is malformed.
///
/// Surfaced synchronously from descriptor construction, before any tracker
/// state is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    /// Event name is empty or whitespace-only.
    #[error("Event name cannot be empty")]
    EmptyName,

    /// Timeout is below the indefinite sentinel.
    ///
    /// Valid timeouts are `-1` (indefinite), `0` (expires at receipt), or a
    /// positive number of minutes.
    #[error("Event timeout must be -1 or greater, got {actual}")]
    TimeoutOutOfRange { actual: i64 },
}
