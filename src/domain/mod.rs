//! Domain layer: the information snapshot and request parameter types.
//!
//! Everything here is request-scoped. Snapshots are captured fresh per
//! request and durations are parsed straight from the path.

pub mod duration;
pub mod outbound;
pub mod snapshot;

pub use duration::{DurationError, ExecDuration};
pub use outbound::outbound_ip;
pub use snapshot::InfoSnapshot;
