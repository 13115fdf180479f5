//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between the
//! session core and the outside world. The core consumes exactly two
//! collaborators: a wall-clock time source and a session-identifier source.
//! Both are synchronous; the tracker has no suspension points.

mod clock;
mod id_source;

pub use clock::Clock;
pub use id_source::SessionIdSource;
