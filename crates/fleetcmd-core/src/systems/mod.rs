//! Progress simulator - time-driven systems run on every tick

mod clock;
mod maintenance;
mod missions;

pub use clock::*;
pub use maintenance::*;
pub use missions::*;
