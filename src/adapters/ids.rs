//! Session-identifier adapters.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use crate::domain::foundation::SessionId;
use crate::ports::SessionIdSource;

/// Random v4 UUID identifier source.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidSessionIds;

impl UuidSessionIds {
    pub fn new() -> Self {
        Self
    }
}

impl SessionIdSource for UuidSessionIds {
    fn next_id(&self) -> SessionId {
        SessionId::new()
    }
}

/// Counter-derived identifier source for deterministic tests.
///
/// This adapter is for **testing only**; identifiers are predictable
/// (1, 2, 3, ...) so assertions can name the session they expect.
#[derive(Debug)]
pub struct SequentialSessionIds {
    next: AtomicU64,
}

impl SequentialSessionIds {
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }

    /// Returns the identifier a given 1-based sequence number maps to.
    pub fn id_for(sequence: u64) -> SessionId {
        SessionId::from_uuid(Uuid::from_u128(sequence as u128))
    }
}

impl Default for SequentialSessionIds {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionIdSource for SequentialSessionIds {
    fn next_id(&self) -> SessionId {
        let sequence = self.next.fetch_add(1, Ordering::Relaxed);
        Self::id_for(sequence)
    }
}
