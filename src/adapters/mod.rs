//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the session core to its collaborators:
//! - `clock` - real time (`SystemClock`) and a settable test clock
//! - `ids` - UUID-backed identifiers and a deterministic test source

mod clock;
mod ids;

pub use clock::{ManualClock, SystemClock};
pub use ids::{SequentialSessionIds, UuidSessionIds};
