//! Session-identifier port.
//!
//! Defines the contract for producing fresh session identifiers. The tracker
//! calls it exactly once per session created and requires only that returned
//! identifiers are unique and opaque.

use crate::domain::foundation::SessionId;

/// Identifier-source port.
pub trait SessionIdSource: Send + Sync {
    /// Returns a fresh, unique session identifier.
    fn next_id(&self) -> SessionId;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn session_id_source_is_object_safe() {
        fn _accepts_dyn(_ids: &dyn SessionIdSource) {}
    }
}
