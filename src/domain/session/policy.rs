//! Closure decision procedure.

use crate::domain::foundation::Timestamp;

use super::ExpirationRegistry;

/// Decides whether the open session may close, and at what instant.
///
/// Holds the configurable open/close marker-name pair. A registry holding
/// the open marker without its close counterpart pins the session open,
/// however far past the maximum expiration the current instant is. Once both
/// markers are present (or neither), the session closes as soon as the
/// current instant passes the registry's maximum expiration, with the
/// session ending at that maximum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosurePolicy {
    open_marker: String,
    close_marker: String,
}

impl ClosurePolicy {
    /// Creates a policy for the given marker-name pair.
    pub fn new(open_marker: impl Into<String>, close_marker: impl Into<String>) -> Self {
        Self {
            open_marker: open_marker.into(),
            close_marker: close_marker.into(),
        }
    }

    /// Returns the open-marker event name.
    pub fn open_marker(&self) -> &str {
        &self.open_marker
    }

    /// Returns the close-marker event name.
    pub fn close_marker(&self) -> &str {
        &self.close_marker
    }

    /// Returns the closing instant if the session is closeable at `now`.
    ///
    /// Closeable means the marker gate passes (neither marker recorded, or
    /// both) and the registry's maximum expiration lies before `now`. The
    /// closing instant is that maximum, not `now`.
    pub fn close_instant(&self, registry: &ExpirationRegistry, now: Timestamp) -> Option<Timestamp> {
        let has_open = registry.contains(&self.open_marker);
        let has_close = registry.contains(&self.close_marker);
        if has_open != has_close {
            return None;
        }

        let max_expiration = registry.max_expiration();
        if max_expiration.is_before(&now) {
            Some(max_expiration)
        } else {
            None
        }
    }
}
