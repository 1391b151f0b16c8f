//! Simulation engine - main entry point for commands, queries and ticks

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::components::*;
use crate::config::SimConfig;
use crate::error::FleetError;
use crate::lifecycle::{self, MissionResolution};
use crate::notify::{NoticeKind, NotificationLog, NotificationSink};
use crate::random::{RandomSource, StdRandom};
use crate::stores::{CrewStore, FleetState, FleetStore, MissionStore};
use crate::systems::{advance_missions, maintenance_step, mission_progress, TickClock};

/// Everything that changed during one tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Maintenance steps processed (more than one after a late tick)
    pub maintenance_steps: u64,
    pub maintenance_completed: Vec<ShipId>,
    pub resolutions: Vec<MissionResolution>,
}

/// Read-only view of the whole simulation for presentation layers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetSnapshot {
    pub now: f64,
    pub ships: Vec<Ship>,
    pub crew: Vec<CrewMember>,
    pub missions: Vec<Mission>,
}

/// Owns the stores and drives every transition.
///
/// Stores are only reachable through shared references, so every mutation
/// from outside goes through a command here and its rule check.
pub struct SimulationEngine<R = StdRandom, N = NotificationLog> {
    state: FleetState,
    config: SimConfig,
    clock: TickClock,
    random: R,
    sink: N,
}

impl SimulationEngine {
    /// Empty simulation with default config and an entropy-seeded RNG
    pub fn new() -> Self {
        Self::with_parts(
            FleetState::new(),
            SimConfig::default(),
            StdRandom::from_entropy(),
            NotificationLog::new(),
        )
    }
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource, N: NotificationSink> SimulationEngine<R, N> {
    /// Assemble an engine from explicit parts.
    ///
    /// The config is used as given; an invalid one is only logged. Callers
    /// loading tuning from outside should go through [`SimConfig::load`].
    pub fn with_parts(state: FleetState, config: SimConfig, random: R, sink: N) -> Self {
        if let Err(err) = config.validate() {
            warn!("engine built with unchecked config: {}", err);
        }
        Self {
            state,
            config,
            clock: TickClock::default(),
            random,
            sink,
        }
    }

    /// Start the clock at `now` instead of zero
    pub fn starting_at(mut self, now: f64) -> Self {
        self.clock = TickClock::starting_at(now);
        self
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn fleet(&self) -> &FleetStore {
        &self.state.fleet
    }

    pub fn crew(&self) -> &CrewStore {
        &self.state.crew
    }

    pub fn missions(&self) -> &MissionStore {
        &self.state.missions
    }

    pub fn list_ships(&self) -> Vec<Ship> {
        self.state.fleet.list()
    }

    pub fn list_crew(&self) -> Vec<CrewMember> {
        self.state.crew.list()
    }

    pub fn list_missions(&self) -> &[Mission] {
        self.state.missions.list()
    }

    pub fn get_ship(&self, id: ShipId) -> Option<Ship> {
        self.state.fleet.get(id)
    }

    pub fn get_crew_member(&self, id: CrewId) -> Option<CrewMember> {
        self.state.crew.get(id)
    }

    pub fn get_mission(&self, id: MissionId) -> Option<&Mission> {
        self.state.missions.get(id)
    }

    /// Docked ships above both launch minimums
    pub fn available_ships(&self) -> Vec<Ship> {
        lifecycle::available_ships(&self.state.fleet, &self.config)
    }

    pub fn available_crew(&self) -> Vec<CrewMember> {
        lifecycle::available_crew(&self.state.crew)
    }

    pub fn active_missions(&self) -> Vec<&Mission> {
        self.state.missions.active().collect()
    }

    /// Progress of a mission recomputed at the current clock instant.
    /// Finished missions read 100.
    pub fn mission_progress(&self, id: MissionId) -> Option<f64> {
        let mission = self.state.missions.get(id)?;
        if !mission.is_active() {
            return Some(mission.progress());
        }
        Some(mission_progress(
            mission.start_time(),
            self.clock.now(),
            self.config.mission_duration_secs,
        ))
    }

    pub fn snapshot(&self) -> FleetSnapshot {
        FleetSnapshot {
            now: self.clock.now(),
            ships: self.list_ships(),
            crew: self.list_crew(),
            missions: self.list_missions().to_vec(),
        }
    }

    pub fn now(&self) -> f64 {
        self.clock.now()
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn sink(&self) -> &N {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut N {
        &mut self.sink
    }

    pub fn random_mut(&mut self) -> &mut R {
        &mut self.random
    }

    // ------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------

    pub fn add_ship(&mut self, name: impl Into<String>, fuel_level: i32, condition: i32) -> ShipId {
        self.state.fleet.add(name, fuel_level, condition)
    }

    pub fn add_crew_member(
        &mut self,
        name: impl Into<String>,
        rank: impl Into<String>,
        specialty: impl Into<String>,
    ) -> CrewId {
        self.state.crew.add(name, rank, specialty)
    }

    /// User request to change a ship's status
    pub fn set_ship_status(&mut self, id: ShipId, status: ShipStatus) -> Result<(), FleetError> {
        let result =
            lifecycle::request_ship_status(&mut self.state.fleet, id, status, &mut self.sink);
        self.report(result)
    }

    /// User request to change a crew member's status
    pub fn set_crew_status(&mut self, id: CrewId, status: CrewStatus) -> Result<(), FleetError> {
        let result =
            lifecycle::request_crew_status(&mut self.state.crew, id, status, &mut self.sink);
        self.report(result)
    }

    /// Launch a mission with one ship and at least one crew member.
    ///
    /// The request is checked against current state, so stale selections
    /// made by the caller are re-validated here. On any error nothing changes.
    ///
    /// The mission's start time is the latest instant passed to
    /// [`on_tick`](Self::on_tick), so a command issued between ticks starts
    /// up to one tick interval early. Drivers needing exact timing should
    /// tick at the command's instant before issuing it.
    pub fn create_mission(
        &mut self,
        name: &str,
        priority: Priority,
        ship: Option<ShipId>,
        crew: &[CrewId],
    ) -> Result<MissionId, FleetError> {
        let result = lifecycle::plan_mission(&self.state, name, priority, ship, crew, &self.config)
            .and_then(|plan| {
                lifecycle::launch_mission(&mut self.state, plan, self.clock.now(), &mut self.sink)
            });
        self.report(result)
    }

    /// Resolve a mission whose timer has run out at the current clock instant.
    ///
    /// [`on_tick`](Self::on_tick) already does this for every due mission, so
    /// this only matters to drivers that resolve without ticking. Missions
    /// still short of 100% and missions that already ended are left alone.
    pub fn resolve_mission(&mut self, id: MissionId) -> Option<MissionResolution> {
        let progress = self.mission_progress(id)?;
        if progress < 100.0 {
            debug!("mission {} not due ({:.1}%)", id, progress);
            return None;
        }
        lifecycle::resolve_mission(
            &mut self.state,
            id,
            &self.config,
            &mut self.random,
            &mut self.sink,
        )
    }

    // ------------------------------------------------------------------
    // Scheduling
    // ------------------------------------------------------------------

    /// Tick handler for the external timer.
    ///
    /// Processes every due maintenance step, then refreshes mission progress.
    /// Anything reaching 100% resolves inside this call.
    pub fn on_tick(&mut self, now: f64) -> TickReport {
        let now = self.clock.observe(now);
        let mut report = TickReport::default();

        let steps = self.clock.due_steps(self.config.maintenance_step_secs);
        for _ in 0..steps {
            if self.state.fleet.count_with_status(ShipStatus::Maintenance) == 0 {
                break;
            }
            report.maintenance_steps += 1;
            report.maintenance_completed.extend(maintenance_step(
                &mut self.state.fleet,
                self.config.maintenance_increment,
                &mut self.sink,
            ));
        }

        report.resolutions = advance_missions(
            &mut self.state,
            now,
            &self.config,
            &mut self.random,
            &mut self.sink,
        );

        debug!(
            "tick at {:.2}s: {} maintenance steps, {} resolutions",
            now,
            report.maintenance_steps,
            report.resolutions.len()
        );
        report
    }

    /// Surface a rejected command to the user-visible layer
    fn report<T>(&mut self, result: Result<T, FleetError>) -> Result<T, FleetError> {
        if let Err(err) = &result {
            warn!("command rejected: {}", err);
            self.sink.notify(&err.to_string(), NoticeKind::Error);
        }
        result
    }
}
