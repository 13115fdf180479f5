//! Domain layer containing the session-lifecycle logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared value objects (identifiers, timestamps, errors)
//! - `session` - The session core: event descriptors, expiration registry,
//!   closure policy, and the lifecycle tracker

pub mod foundation;
pub mod session;
