//! Entity stores - the only mutable shared state in the simulation.
//!
//! Store mutators are unchecked. Legality is decided by `lifecycle`, and the
//! engine hands out shared references only, so outside callers cannot bypass
//! the rules.

mod crew;
mod fleet;
mod missions;

pub use crew::CrewStore;
pub use fleet::FleetStore;
pub use missions::MissionStore;

/// All stores of one simulation
#[derive(Default)]
pub struct FleetState {
    pub fleet: FleetStore,
    pub crew: CrewStore,
    pub missions: MissionStore,
}

impl FleetState {
    pub fn new() -> Self {
        Self::default()
    }
}
