//! Tick systems - logic that runs against the session on a cadence.

mod ai;
mod clock;
mod power;

pub use ai::*;
pub use clock::*;
pub use power::*;
