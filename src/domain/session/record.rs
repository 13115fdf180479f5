//! Session record entity.

use crate::domain::foundation::{SessionId, Timestamp};
use serde::{Deserialize, Serialize};

/// A contiguous span of activity.
///
/// # Invariants
///
/// - `id` is unique and immutable
/// - `start` is the instant of the event that triggered creation, immutable
/// - `end` is `None` while the session is open; set exactly once at closure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Unique identifier for this session.
    id: SessionId,

    /// When the session started.
    start: Timestamp,

    /// When the session ended, or `None` while it is open.
    end: Option<Timestamp>,
}

impl Session {
    /// Create a new open session.
    pub(crate) fn open(id: SessionId, start: Timestamp) -> Self {
        Self {
            id,
            start,
            end: None,
        }
    }

    /// Returns the session ID.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Returns when the session started.
    pub fn start(&self) -> &Timestamp {
        &self.start
    }

    /// Returns when the session ended, if it has.
    pub fn end(&self) -> Option<&Timestamp> {
        self.end.as_ref()
    }

    /// Returns true while the session has no end instant.
    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }

    /// Close the session at the given instant.
    ///
    /// The sole mutation; only the lifecycle tracker calls it.
    pub(crate) fn close(&mut self, at: Timestamp) {
        self.end = Some(at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_session() -> Session {
        Session::open(SessionId::new(), Timestamp::from_unix_secs(1000))
    }

    #[test]
    fn new_session_is_open() {
        let session = test_session();
        assert!(session.is_open());
        assert!(session.end().is_none());
    }

    #[test]
    fn new_session_keeps_start_instant() {
        let session = test_session();
        assert_eq!(session.start(), &Timestamp::from_unix_secs(1000));
    }

    #[test]
    fn close_sets_end_instant() {
        let mut session = test_session();
        session.close(Timestamp::from_unix_secs(2000));
        assert!(!session.is_open());
        assert_eq!(session.end(), Some(&Timestamp::from_unix_secs(2000)));
    }

    #[test]
    fn session_serializes_open_end_as_null() {
        let session = test_session();
        let json = serde_json::to_value(&session).unwrap();
        assert!(json["end"].is_null());
    }
}
