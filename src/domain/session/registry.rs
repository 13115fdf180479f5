//! Per-event-name expiration bookkeeping.

use std::collections::HashMap;

use crate::domain::foundation::Timestamp;
use serde::{Deserialize, Serialize};

use super::event::INDEFINITE_TIMEOUT;

/// When an event's contribution to session liveness lapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expiration {
    /// Lapses at the given instant.
    Expiring(Timestamp),
    /// Never lapses on its own; countered only by a close marker.
    Indefinite,
}

/// Registry of the latest expiration per event name.
///
/// Entries accumulate for the lifetime of the registry: closure of a session
/// does not prune them, which keeps marker gating meaningful across
/// consecutive sessions on one tracker. One entry is retained per distinct
/// event name ever recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpirationRegistry {
    entries: HashMap<String, Expiration>,
}

impl ExpirationRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an event submission at `now`.
    ///
    /// - Unseen name: stored as `Indefinite` when the timeout is `-1`,
    ///   otherwise as `Expiring(now + timeout)`.
    /// - Existing `Indefinite` entry: left unchanged, whatever the new
    ///   timeout.
    /// - Existing `Expiring` entry: recomputed as `Expiring(now + timeout)`.
    ///   This path also applies when the new timeout is `-1`, which yields an
    ///   instant one minute before `now` rather than an `Indefinite` entry.
    ///   Historical behavior, kept as-is; see DESIGN.md.
    pub fn record(&mut self, name: &str, timeout_minutes: i64, now: Timestamp) {
        match self.entries.get(name) {
            Some(Expiration::Indefinite) => {
                tracing::trace!(event = name, "indefinite entry left unchanged");
            }
            Some(Expiration::Expiring(_)) => {
                let expires = now.plus_minutes(timeout_minutes);
                tracing::trace!(event = name, expires = %expires, "expiration recomputed");
                self.entries
                    .insert(name.to_string(), Expiration::Expiring(expires));
            }
            None => {
                let entry = if timeout_minutes == INDEFINITE_TIMEOUT {
                    Expiration::Indefinite
                } else {
                    Expiration::Expiring(now.plus_minutes(timeout_minutes))
                };
                tracing::trace!(event = name, entry = ?entry, "event recorded");
                self.entries.insert(name.to_string(), entry);
            }
        }
    }

    /// Returns the latest instant among all expiring entries.
    ///
    /// Indefinite entries never determine the maximum. When the registry is
    /// empty or holds only indefinite entries, the result is
    /// `Timestamp::earliest()`, which compares before any real instant.
    pub fn max_expiration(&self) -> Timestamp {
        self.entries
            .values()
            .filter_map(|entry| match entry {
                Expiration::Expiring(at) => Some(*at),
                Expiration::Indefinite => None,
            })
            .max()
            .unwrap_or_else(Timestamp::earliest)
    }

    /// Returns true if the given event name has been recorded.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Returns the stored expiration for an event name, if any.
    pub fn get(&self, name: &str) -> Option<&Expiration> {
        self.entries.get(name)
    }

    /// Returns the number of distinct event names recorded.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no event has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(secs: u64) -> Timestamp {
        Timestamp::from_unix_secs(secs)
    }

    #[test]
    fn record_positive_timeout_stores_expiring_entry() {
        let mut registry = ExpirationRegistry::new();
        registry.record("SWIPE", 5, at(1000));
        assert_eq!(
            registry.get("SWIPE"),
            Some(&Expiration::Expiring(at(1000).plus_minutes(5)))
        );
    }

    #[test]
    fn record_zero_timeout_expires_at_receipt() {
        let mut registry = ExpirationRegistry::new();
        registry.record("CHECK_CLOSE", 0, at(1000));
        assert_eq!(
            registry.get("CHECK_CLOSE"),
            Some(&Expiration::Expiring(at(1000)))
        );
    }

    #[test]
    fn record_indefinite_timeout_stores_indefinite_entry() {
        let mut registry = ExpirationRegistry::new();
        registry.record("CHECK_OPEN", -1, at(1000));
        assert_eq!(registry.get("CHECK_OPEN"), Some(&Expiration::Indefinite));
    }

    #[test]
    fn record_existing_expiring_entry_is_recomputed() {
        let mut registry = ExpirationRegistry::new();
        registry.record("SWIPE", 5, at(1000));
        registry.record("SWIPE", 10, at(2000));
        assert_eq!(
            registry.get("SWIPE"),
            Some(&Expiration::Expiring(at(2000).plus_minutes(10)))
        );
    }

    #[test]
    fn record_never_overwrites_indefinite_entry() {
        let mut registry = ExpirationRegistry::new();
        registry.record("CHECK_OPEN", -1, at(1000));
        registry.record("CHECK_OPEN", 5, at(2000));
        assert_eq!(registry.get("CHECK_OPEN"), Some(&Expiration::Indefinite));
    }

    // Pins the historical quirk: -1 on an existing expiring entry computes
    // an instant one minute in the past instead of going indefinite.
    #[test]
    fn record_indefinite_over_expiring_entry_backdates_one_minute() {
        let mut registry = ExpirationRegistry::new();
        registry.record("SWIPE", 5, at(1000));
        registry.record("SWIPE", -1, at(2000));
        assert_eq!(
            registry.get("SWIPE"),
            Some(&Expiration::Expiring(at(2000).plus_minutes(-1)))
        );
    }

    #[test]
    fn max_expiration_picks_latest_expiring_entry() {
        let mut registry = ExpirationRegistry::new();
        registry.record("SWIPE", 5, at(1000));
        registry.record("TOUCH", 10, at(1120));
        assert_eq!(registry.max_expiration(), at(1120).plus_minutes(10));
    }

    #[test]
    fn max_expiration_ignores_indefinite_entries() {
        let mut registry = ExpirationRegistry::new();
        registry.record("CHECK_OPEN", -1, at(1000));
        registry.record("SWIPE", 5, at(1000));
        assert_eq!(registry.max_expiration(), at(1000).plus_minutes(5));
    }

    #[test]
    fn max_expiration_of_empty_registry_is_earliest() {
        let registry = ExpirationRegistry::new();
        assert_eq!(registry.max_expiration(), Timestamp::earliest());
    }

    #[test]
    fn max_expiration_of_only_indefinite_entries_is_earliest() {
        let mut registry = ExpirationRegistry::new();
        registry.record("CHECK_OPEN", -1, at(1000));
        assert_eq!(registry.max_expiration(), Timestamp::earliest());
    }

    #[test]
    fn entries_survive_across_recordings() {
        let mut registry = ExpirationRegistry::new();
        registry.record("SWIPE", 5, at(1000));
        registry.record("TOUCH", 10, at(2000));
        assert_eq!(registry.len(), 2);
        assert!(registry.contains("SWIPE"));
        assert!(registry.contains("TOUCH"));
    }
}
