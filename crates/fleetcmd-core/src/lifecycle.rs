//! Lifecycle rules - which status changes are legal and what they do.
//!
//! This is the only module that initiates ship, crew and mission transitions.
//! User-requested changes are checked here before any store is touched;
//! engine-internal transitions (maintenance completion, mission resolution)
//! are guarded so that firing them twice is a no-op.

use log::{info, warn};

use crate::components::{
    CrewId, CrewMember, CrewStatus, MissionId, MissionStatus, Priority, Ship, ShipId, ShipPatch,
    ShipStatus,
};
use crate::config::SimConfig;
use crate::error::{FleetError, IneligibleReason};
use crate::notify::{NoticeKind, NotificationSink};
use crate::random::RandomSource;
use crate::stores::{CrewStore, FleetState, FleetStore};

// ============================================================================
// ELIGIBILITY
// ============================================================================

/// Fuel and condition gate for launching. Status is not considered here.
pub fn mission_readiness(ship: &Ship, config: &SimConfig) -> Result<(), FleetError> {
    if ship.fuel_level < config.min_mission_fuel {
        return Err(FleetError::IneligibleShip {
            ship: ship.id,
            reason: IneligibleReason::LowFuel,
        });
    }
    if ship.condition < config.min_mission_condition {
        return Err(FleetError::IneligibleShip {
            ship: ship.id,
            reason: IneligibleReason::PoorCondition,
        });
    }
    Ok(())
}

/// Docked and above both launch minimums
pub fn is_mission_ready(ship: &Ship, config: &SimConfig) -> bool {
    ship.status == ShipStatus::Docked && mission_readiness(ship, config).is_ok()
}

pub fn available_ships(fleet: &FleetStore, config: &SimConfig) -> Vec<Ship> {
    fleet
        .list()
        .into_iter()
        .filter(|ship| is_mission_ready(ship, config))
        .collect()
}

pub fn available_crew(crew: &CrewStore) -> Vec<CrewMember> {
    crew.with_status(CrewStatus::Available)
}

// ============================================================================
// DIRECT STATUS REQUESTS
// ============================================================================

/// Handle a user request to change a ship's status.
///
/// Only a docked ship can be touched. `maintenance` starts a repair cycle,
/// `docked` is accepted as a no-op, `mission` is reserved for mission launch.
pub fn request_ship_status(
    fleet: &mut FleetStore,
    id: ShipId,
    requested: ShipStatus,
    sink: &mut impl NotificationSink,
) -> Result<(), FleetError> {
    let ship = fleet.get(id).ok_or(FleetError::ship_not_found(id))?;
    if ship.is_busy() {
        return Err(FleetError::ShipBusy(id));
    }

    match requested {
        ShipStatus::Mission => Err(FleetError::ReservedStatus {
            status: ShipStatus::Mission.as_str(),
        }),
        ShipStatus::Maintenance => {
            start_maintenance(fleet, id)?;
            info!("{} entered maintenance", ship.name);
            sink.notify(
                &format!("{} entered maintenance bay", ship.name),
                NoticeKind::Info,
            );
            Ok(())
        }
        ShipStatus::Docked => {
            sink.notify(
                &format!("Ship status updated: {}", requested),
                NoticeKind::Info,
            );
            Ok(())
        }
    }
}

/// Handle a user request to change a crew member's status.
///
/// `available` and `off-duty` swap freely; members on a mission are locked
/// until it resolves.
pub fn request_crew_status(
    crew: &mut CrewStore,
    id: CrewId,
    requested: CrewStatus,
    sink: &mut impl NotificationSink,
) -> Result<(), FleetError> {
    let member = crew.get(id).ok_or(FleetError::crew_not_found(id))?;
    if member.status == CrewStatus::OnMission {
        return Err(FleetError::CrewBusy(id));
    }
    if requested == CrewStatus::OnMission {
        return Err(FleetError::ReservedStatus {
            status: CrewStatus::OnMission.as_str(),
        });
    }

    crew.update_status(id, requested)?;
    info!("crew member {} is now {}", member.name, requested);
    sink.notify(
        &format!("Crew member status updated: {}", requested),
        NoticeKind::Info,
    );
    Ok(())
}

// ============================================================================
// MAINTENANCE
// ============================================================================

/// Put a ship into the maintenance bay with a fresh progress counter
pub fn start_maintenance(fleet: &mut FleetStore, id: ShipId) -> Result<Ship, FleetError> {
    fleet.mutate(
        id,
        &ShipPatch::new()
            .with_status(ShipStatus::Maintenance)
            .with_maintenance_progress(0),
    )
}

/// Finish a maintenance cycle: full tanks, full hull, back to docked.
///
/// Returns false (and changes nothing) unless the ship is still in
/// maintenance, so a late duplicate trigger is harmless.
pub fn complete_maintenance(
    fleet: &mut FleetStore,
    id: ShipId,
    sink: &mut impl NotificationSink,
) -> bool {
    let Some(ship) = fleet.get(id) else {
        return false;
    };
    if ship.status != ShipStatus::Maintenance {
        return false;
    }

    let restored = ShipPatch::new()
        .with_status(ShipStatus::Docked)
        .with_fuel(100)
        .with_condition(100)
        .with_maintenance_progress(0);
    if fleet.mutate(id, &restored).is_err() {
        return false;
    }

    info!("{} maintenance complete", ship.name);
    sink.notify(
        &format!("{} maintenance complete - All systems restored", ship.name),
        NoticeKind::Success,
    );
    true
}

// ============================================================================
// MISSION LAUNCH
// ============================================================================

/// A mission request that passed every precondition
#[derive(Debug, Clone, PartialEq)]
pub struct MissionPlan {
    pub name: String,
    pub priority: Priority,
    pub ship: ShipId,
    pub crew: Vec<CrewId>,
}

/// Validate a mission request against current state.
///
/// Checks run in a fixed order and the first failure wins: name, ship
/// selection, ship readiness, crew presence, then crew availability. Crew
/// availability is read from the store at this moment, never from a list the
/// caller filtered earlier.
pub fn plan_mission(
    state: &FleetState,
    name: &str,
    priority: Priority,
    ship: Option<ShipId>,
    crew: &[CrewId],
    config: &SimConfig,
) -> Result<MissionPlan, FleetError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(FleetError::InvalidMissionName);
    }

    let ship = ship
        .and_then(|id| state.fleet.get(id))
        .ok_or(FleetError::ShipNotSelected)?;
    if ship.is_busy() {
        return Err(FleetError::ShipBusy(ship.id));
    }
    mission_readiness(&ship, config)?;

    if crew.is_empty() {
        return Err(FleetError::NoCrewAssigned);
    }

    let mut assigned: Vec<CrewId> = Vec::with_capacity(crew.len());
    for &id in crew {
        if assigned.contains(&id) {
            continue;
        }
        let member = state.crew.get(id).ok_or(FleetError::crew_not_found(id))?;
        if !member.is_available() {
            return Err(FleetError::CrewUnavailable(id));
        }
        assigned.push(id);
    }

    Ok(MissionPlan {
        name: name.to_string(),
        priority,
        ship: ship.id,
        crew: assigned,
    })
}

/// Commit a validated plan: ship and crew depart, a mission record starts.
pub fn launch_mission(
    state: &mut FleetState,
    plan: MissionPlan,
    now: f64,
    sink: &mut impl NotificationSink,
) -> Result<MissionId, FleetError> {
    state.fleet.update_status(plan.ship, ShipStatus::Mission)?;
    for &member in &plan.crew {
        state.crew.update_status(member, CrewStatus::OnMission)?;
    }

    info!(
        "mission '{}' launched with ship {} and {} crew",
        plan.name,
        plan.ship,
        plan.crew.len()
    );
    let id = state
        .missions
        .insert(plan.name, plan.priority, plan.ship, plan.crew, now);

    sink.notify("New mission created successfully!", NoticeKind::Success);
    Ok(id)
}

// ============================================================================
// MISSION RESOLUTION
// ============================================================================

/// What happened when a mission ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionResolution {
    pub mission: MissionId,
    pub outcome: MissionStatus,
    pub fuel_consumed: u32,
    pub condition_damage: u32,
    /// Where the ship went afterwards
    pub ship_status: ShipStatus,
}

/// Status a ship returns to after a mission
pub fn post_mission_status(ship: &Ship, config: &SimConfig) -> ShipStatus {
    if ship.fuel_level == 0 || ship.condition < config.maintenance_condition {
        ShipStatus::Maintenance
    } else {
        ShipStatus::Docked
    }
}

/// Resolve an in-progress mission.
///
/// Draws the outcome, then fuel burn, then (on failure) hull damage; marks the
/// mission terminal; returns the ship to dock or to maintenance; frees the
/// crew. All of that happens inside this call. Resolving a mission that
/// already ended draws nothing and returns `None`.
pub fn resolve_mission(
    state: &mut FleetState,
    id: MissionId,
    config: &SimConfig,
    random: &mut impl RandomSource,
    sink: &mut impl NotificationSink,
) -> Option<MissionResolution> {
    let mission = state.missions.get(id)?;
    if !mission.is_active() {
        return None;
    }
    let name = mission.name().to_string();
    let ship_id = mission.assigned_ship();
    let crew = mission.assigned_crew().to_vec();

    let success = random.bernoulli(config.success_probability);
    let outcome = if success {
        MissionStatus::Completed
    } else {
        MissionStatus::Failed
    };
    let fuel_consumed = random.uniform_int(config.fuel_consumption.min, config.fuel_consumption.max);
    let condition_damage = if success {
        0
    } else {
        random.uniform_int(config.failure_damage.min, config.failure_damage.max)
    };

    if let Some(mission) = state.missions.get_mut(id) {
        mission.conclude(outcome);
    }

    let mut ship_status = ShipStatus::Docked;
    if let Some(mut ship) = state.fleet.get(ship_id) {
        ship.consume_fuel(fuel_consumed);
        ship.damage(condition_damage);
        ship_status = post_mission_status(&ship, config);

        let mut patch = ShipPatch::new()
            .with_status(ship_status)
            .with_fuel(ship.fuel_level as i32)
            .with_condition(ship.condition as i32);
        if ship_status == ShipStatus::Maintenance {
            patch = patch.with_maintenance_progress(0);
        }
        if state.fleet.mutate(ship_id, &patch).is_ok() && ship_status == ShipStatus::Maintenance {
            warn!(
                "{} returned with fuel {} and condition {}; maintenance required",
                ship.name, ship.fuel_level, ship.condition
            );
            sink.notify(
                &format!("{} requires maintenance!", ship.name),
                NoticeKind::Warning,
            );
        }
    } else {
        warn!("mission '{}' references unknown ship {}", name, ship_id);
    }

    for member in crew {
        if let Err(err) = state.crew.update_status(member, CrewStatus::Available) {
            warn!("mission '{}' could not release crew {}: {}", name, member, err);
        }
    }

    info!("mission '{}' {}", name, outcome);
    if success {
        sink.notify(
            &format!("Mission {} completed successfully!", name),
            NoticeKind::Success,
        );
    } else {
        sink.notify(&format!("Mission {} failed!", name), NoticeKind::Error);
    }

    Some(MissionResolution {
        mission: id,
        outcome,
        fuel_consumed,
        condition_damage,
        ship_status,
    })
}
