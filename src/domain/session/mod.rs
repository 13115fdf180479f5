//! Session domain module.
//!
//! The session core: validated event descriptors, the per-event-name
//! expiration registry, the marker-aware closure policy, and the lifecycle
//! tracker that turns an event stream into session records.

mod errors;
mod event;
mod policy;
mod record;
mod registry;
mod tracker;

pub use errors::EventError;
pub use event::EventDescriptor;
pub use policy::ClosurePolicy;
pub use record::Session;
pub use registry::{Expiration, ExpirationRegistry};
pub use tracker::SessionTracker;
