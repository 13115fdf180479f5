//! Session lifecycle tracker.

use std::sync::Arc;

use crate::adapters::{SystemClock, UuidSessionIds};
use crate::config::TrackerConfig;
use crate::domain::foundation::{Timestamp, ValidationError};
use crate::ports::{Clock, SessionIdSource};

use super::{ClosurePolicy, EventDescriptor, EventError, ExpirationRegistry, Session};

/// The session lifecycle engine and store for one subject's event stream.
///
/// Owns exactly three pieces of state: the single open session (or none),
/// the expiration registry, and the ordered closed-session history. Every
/// public operation resolves the current instant, re-evaluates whether the
/// open session should close (lazy expiration; there are no timers), then
/// performs the requested action.
///
/// A tracker models one subject. It is not internally synchronized; callers
/// sharing one instance across threads must serialize access, e.g. behind a
/// mutex or confined to a single task.
pub struct SessionTracker {
    policy: ClosurePolicy,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn SessionIdSource>,
    open: Option<Session>,
    registry: ExpirationRegistry,
    history: Vec<Session>,
}

impl SessionTracker {
    /// Creates a tracker with the given configuration and collaborators.
    ///
    /// # Errors
    ///
    /// - `ValidationError` if the configured marker names are empty or
    ///   identical
    pub fn new(
        config: TrackerConfig,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn SessionIdSource>,
    ) -> Result<Self, ValidationError> {
        config.validate()?;
        Ok(Self::from_parts(config, clock, ids))
    }

    /// Creates a tracker with the default marker names, the system clock,
    /// and random UUID session identifiers.
    pub fn with_defaults() -> Self {
        Self::from_parts(
            TrackerConfig::default(),
            Arc::new(SystemClock::new()),
            Arc::new(UuidSessionIds::new()),
        )
    }

    fn from_parts(
        config: TrackerConfig,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn SessionIdSource>,
    ) -> Self {
        Self {
            policy: ClosurePolicy::new(config.open_marker, config.close_marker),
            clock,
            ids,
            open: None,
            registry: ExpirationRegistry::new(),
            history: Vec::new(),
        }
    }

    /// Submit an event at an explicit instant, or at the clock's now.
    ///
    /// Closes a stale open session first, or creates a fresh one when none
    /// is open, then records the event in the expiration registry. When the
    /// evaluation closes a stale session, no replacement is created in the
    /// same call; the next submission creates the next session.
    pub fn submit_event(&mut self, event: &EventDescriptor, at: Option<Timestamp>) {
        let now = self.resolve(at);
        if self.open.is_none() {
            self.open_session(now);
        } else {
            self.close_if_due(now);
        }
        self.registry
            .record(event.name(), event.timeout_minutes(), now);
    }

    /// Submit an event by name and timeout, validating it first.
    ///
    /// Convenience over [`submit_event`](Self::submit_event) for callers
    /// holding raw values. Validation happens before any state is touched;
    /// a rejected event leaves the tracker unchanged.
    ///
    /// # Errors
    ///
    /// - `EventError` if the name is empty or the timeout is less than `-1`
    pub fn submit(
        &mut self,
        name: &str,
        timeout_minutes: i64,
        at: Option<Timestamp>,
    ) -> Result<(), EventError> {
        let event = EventDescriptor::new(name, timeout_minutes)?;
        self.submit_event(&event, at);
        Ok(())
    }

    /// Returns the open session, if any, after the lazy-closure check.
    ///
    /// Reading never creates a session; repeated reads at a fixed instant
    /// return equal results.
    pub fn current_session(&mut self, at: Option<Timestamp>) -> Option<&Session> {
        let now = self.resolve(at);
        self.close_if_due(now);
        self.open.as_ref()
    }

    /// Returns the closed-session history, oldest first, after the
    /// lazy-closure check.
    pub fn session_history(&mut self, at: Option<Timestamp>) -> &[Session] {
        let now = self.resolve(at);
        self.close_if_due(now);
        &self.history
    }

    /// Returns the expiration registry.
    pub fn registry(&self) -> &ExpirationRegistry {
        &self.registry
    }

    /// Returns the closure policy in effect.
    pub fn policy(&self) -> &ClosurePolicy {
        &self.policy
    }

    fn resolve(&self, explicit: Option<Timestamp>) -> Timestamp {
        explicit.unwrap_or_else(|| self.clock.now())
    }

    fn open_session(&mut self, now: Timestamp) {
        let session = Session::open(self.ids.next_id(), now);
        tracing::debug!(session_id = %session.id(), start = %now, "session opened");
        self.open = Some(session);
    }

    fn close_if_due(&mut self, now: Timestamp) {
        if self.open.is_none() {
            return;
        }
        if let Some(end) = self.policy.close_instant(&self.registry, now) {
            if let Some(mut session) = self.open.take() {
                session.close(end);
                tracing::info!(session_id = %session.id(), end = %end, "session closed");
                self.history.push(session);
            }
        }
    }
}
