//! Clock port.
//!
//! Defines the contract for the wall-clock time source. The tracker consults
//! it only when a caller omits an explicit instant, so supplying explicit
//! instants everywhere makes behavior fully deterministic.

use crate::domain::foundation::Timestamp;

/// Time-source port.
///
/// Implementations must be cheap to call; the tracker reads the clock at
/// most once per public operation.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> Timestamp;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn clock_is_object_safe() {
        fn _accepts_dyn(_clock: &dyn Clock) {}
    }
}
