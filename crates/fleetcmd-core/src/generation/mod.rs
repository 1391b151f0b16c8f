//! Roster generation - the opening fleet and random rosters for load tests

mod names;
mod roster;

pub use names::*;
pub use roster::*;
