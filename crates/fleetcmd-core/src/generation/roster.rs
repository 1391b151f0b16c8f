//! Fleet and crew rosters

use rand::Rng;

use super::names::{generate_crew_profile, generate_ship_name};
use crate::stores::FleetState;

/// The command center's opening roster: three docked ships, three
/// available officers.
pub fn seed_demo_roster(state: &mut FleetState) {
    state.fleet.add("Stellar Voyager", 100, 100);
    state.fleet.add("Nova Explorer", 85, 90);
    state.fleet.add("Cosmic Pioneer", 35, 40);

    state.crew.add("Cmdr. Sarah Chen", "Commander", "Navigation");
    state.crew.add("Lt. James Wilson", "Lieutenant", "Engineering");
    state.crew.add("Dr. Maya Patel", "Science Officer", "Xenobiology");
}

/// Random roster of `ships` docked ships and `crew` available members.
///
/// Gauges are spread over 10..=100 so some ships start below launch minimums.
pub fn generate_roster(state: &mut FleetState, ships: u32, crew: u32, rng: &mut impl Rng) {
    for _ in 0..ships {
        let name = generate_ship_name(rng);
        let fuel = rng.gen_range(10..=100);
        let condition = rng.gen_range(10..=100);
        state.fleet.add(name, fuel, condition);
    }

    for _ in 0..crew {
        let (name, rank, specialty) = generate_crew_profile(rng);
        state.crew.add(name, rank, specialty);
    }
}
