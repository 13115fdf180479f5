//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects used across the session core: strongly-typed
//! identifiers, the immutable timestamp type, and validation errors.

mod errors;
mod ids;
mod timestamp;

pub use errors::ValidationError;
pub use ids::SessionId;
pub use timestamp::Timestamp;
