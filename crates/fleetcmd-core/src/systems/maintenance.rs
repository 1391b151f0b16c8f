//! Maintenance clock - advances repair progress on ships in the bay

use log::debug;

use crate::components::{ShipId, ShipPatch, ShipStatus, GAUGE_MAX};
use crate::lifecycle::complete_maintenance;
use crate::notify::NotificationSink;
use crate::stores::FleetStore;

/// One maintenance step for every ship in the bay.
///
/// Each ship gains `increment` points; a ship that reaches 100 is completed
/// in the same step. Returns the ships that finished.
pub fn maintenance_step(
    fleet: &mut FleetStore,
    increment: u8,
    sink: &mut impl NotificationSink,
) -> Vec<ShipId> {
    let mut completed = Vec::new();

    for id in fleet.ids_with_status(ShipStatus::Maintenance) {
        let Some(ship) = fleet.get(id) else {
            continue;
        };
        let progress = ship
            .maintenance_progress
            .saturating_add(increment)
            .min(GAUGE_MAX);

        if fleet
            .mutate(id, &ShipPatch::new().with_maintenance_progress(progress as i32))
            .is_err()
        {
            continue;
        }
        debug!("{} maintenance at {}%", ship.name, progress);

        if progress >= GAUGE_MAX && complete_maintenance(fleet, id, sink) {
            completed.push(id);
        }
    }

    completed
}
