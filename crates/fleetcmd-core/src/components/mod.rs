//! Entity data: ships, crew members and missions.
//!
//! Components are plain data with small clamping helpers.
//! Transition rules live in `lifecycle`, not here.

mod crew;
mod mission;
mod ship;

pub use crew::*;
pub use mission::*;
pub use ship::*;
