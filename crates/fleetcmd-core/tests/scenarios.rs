//! End-to-end command and tick scenarios.
//!
//! Random draws are scripted so every outcome is deterministic.

use fleetcmd_core::prelude::*;

// ── Helpers ────────────────────────────────────────────────────────────

type Engine = SimulationEngine<ScriptedRandom, NotificationLog>;

fn engine(random: ScriptedRandom) -> Engine {
    SimulationEngine::with_parts(
        FleetState::new(),
        SimConfig::default(),
        random,
        NotificationLog::new(),
    )
}

/// Single tick at the instant missions launched now reach full duration
fn run_out_timer(engine: &mut Engine) -> Vec<MissionResolution> {
    let due = engine.now() + engine.config().mission_duration_secs;
    engine.on_tick(due).resolutions
}

/// Tick at `step` second intervals from the current clock up to `until`
fn run_until(engine: &mut Engine, until: f64, step: f64) -> Vec<TickReport> {
    let mut reports = Vec::new();
    let mut now = engine.now();
    while now < until {
        now = (now + step).min(until);
        reports.push(engine.on_tick(now));
    }
    reports
}

// ── Mission creation ───────────────────────────────────────────────────

#[test]
fn launch_marginal_ship_with_available_crew() {
    let mut engine = engine(ScriptedRandom::new());
    let ship = engine.add_ship("Cosmic Pioneer", 35, 40);
    let crew = engine.add_crew_member("Lt. James Wilson", "Lieutenant", "Engineering");

    let id = engine
        .create_mission("Nebula Research", Priority::High, Some(ship), &[crew])
        .unwrap();

    assert_eq!(engine.get_ship(ship).unwrap().status, ShipStatus::Mission);
    assert_eq!(
        engine.get_crew_member(crew).unwrap().status,
        CrewStatus::OnMission
    );
    let mission = engine.get_mission(id).unwrap();
    assert_eq!(mission.status(), MissionStatus::InProgress);
    assert_eq!(mission.progress(), 0.0);
    assert_eq!(mission.assigned_ship(), ship);
    assert_eq!(mission.assigned_crew(), &[crew]);
    assert_eq!(
        engine.sink().last().unwrap().message,
        "New mission created successfully!"
    );
}

#[test]
fn low_fuel_ship_is_rejected_without_side_effects() {
    let mut engine = engine(ScriptedRandom::new());
    let ship = engine.add_ship("Nova Explorer", 20, 90);
    let crew = engine.add_crew_member("Dr. Maya Patel", "Science Officer", "Xenobiology");
    let before = engine.snapshot();

    let err = engine
        .create_mission("Survey", Priority::Medium, Some(ship), &[crew])
        .unwrap_err();

    assert_eq!(
        err,
        FleetError::IneligibleShip {
            ship,
            reason: IneligibleReason::LowFuel
        }
    );
    assert_eq!(engine.snapshot(), before);
    assert_eq!(engine.sink().count_kind(NoticeKind::Error), 1);
}

#[test]
fn poor_condition_ship_is_rejected() {
    let mut engine = engine(ScriptedRandom::new());
    let ship = engine.add_ship("Nova Explorer", 90, 29);
    let crew = engine.add_crew_member("Dr. Maya Patel", "Science Officer", "Xenobiology");

    let err = engine
        .create_mission("Survey", Priority::Medium, Some(ship), &[crew])
        .unwrap_err();

    assert!(matches!(
        err,
        FleetError::IneligibleShip {
            reason: IneligibleReason::PoorCondition,
            ..
        }
    ));
}

#[test]
fn precondition_order_first_failure_wins() {
    let mut engine = engine(ScriptedRandom::new());
    let weak = engine.add_ship("Cosmic Pioneer", 10, 10);

    // Empty name beats everything else
    assert_eq!(
        engine.create_mission(" ", Priority::Low, None, &[]),
        Err(FleetError::InvalidMissionName)
    );
    assert_eq!(
        engine.create_mission("Survey", Priority::Low, None, &[]),
        Err(FleetError::ShipNotSelected)
    );
    // Ineligible ship reported before the missing crew
    assert!(matches!(
        engine.create_mission("Survey", Priority::Low, Some(weak), &[]),
        Err(FleetError::IneligibleShip { .. })
    ));

    let ready = engine.add_ship("Stellar Voyager", 100, 100);
    assert_eq!(
        engine.create_mission("Survey", Priority::Low, Some(ready), &[]),
        Err(FleetError::NoCrewAssigned)
    );
}

#[test]
fn crew_assignment_is_all_or_nothing() {
    let mut engine = engine(ScriptedRandom::new());
    let ship = engine.add_ship("Stellar Voyager", 100, 100);
    let chen = engine.add_crew_member("Cmdr. Sarah Chen", "Commander", "Navigation");
    let wilson = engine.add_crew_member("Lt. James Wilson", "Lieutenant", "Engineering");
    engine.set_crew_status(wilson, CrewStatus::OffDuty).unwrap();

    let err = engine
        .create_mission("Survey", Priority::High, Some(ship), &[chen, wilson])
        .unwrap_err();

    assert_eq!(err, FleetError::CrewUnavailable(wilson));
    assert_eq!(engine.get_crew_member(chen).unwrap().status, CrewStatus::Available);
    assert_eq!(engine.get_ship(ship).unwrap().status, ShipStatus::Docked);
    assert!(engine.list_missions().is_empty());
}

#[test]
fn stale_selection_is_revalidated_at_submission() {
    let mut engine = engine(ScriptedRandom::new());
    let first = engine.add_ship("Stellar Voyager", 100, 100);
    let second = engine.add_ship("Nova Explorer", 85, 90);
    let chen = engine.add_crew_member("Cmdr. Sarah Chen", "Commander", "Navigation");

    // Both forms saw Chen as available; the first submission takes her
    let stale_choice = engine.available_crew();
    engine
        .create_mission("Alpha", Priority::High, Some(first), &[chen])
        .unwrap();

    let err = engine
        .create_mission("Beta", Priority::High, Some(second), &[stale_choice[0].id])
        .unwrap_err();
    assert_eq!(err, FleetError::CrewUnavailable(chen));

    // The busy ship cannot be reused either
    let patel = engine.add_crew_member("Dr. Maya Patel", "Science Officer", "Xenobiology");
    assert_eq!(
        engine.create_mission("Gamma", Priority::Low, Some(first), &[patel]),
        Err(FleetError::ShipBusy(first))
    );
}

#[test]
fn unknown_crew_id_is_not_found() {
    let mut engine = engine(ScriptedRandom::new());
    let ship = engine.add_ship("Stellar Voyager", 100, 100);

    let err = engine
        .create_mission("Survey", Priority::High, Some(ship), &[CrewId(77)])
        .unwrap_err();
    assert!(matches!(err, FleetError::NotFound { id: 77, .. }));
}

#[test]
fn availability_queries_follow_state() {
    let mut engine = engine(ScriptedRandom::new());
    let ready = engine.add_ship("Stellar Voyager", 100, 100);
    engine.add_ship("Nova Explorer", 24, 100);
    engine.add_ship("Cosmic Pioneer", 100, 29);
    let bay = engine.add_ship("Astral Courier", 80, 80);
    engine.set_ship_status(bay, ShipStatus::Maintenance).unwrap();

    let ids: Vec<ShipId> = engine.available_ships().iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![ready]);

    let a = engine.add_crew_member("Cmdr. Sarah Chen", "Commander", "Navigation");
    let b = engine.add_crew_member("Lt. James Wilson", "Lieutenant", "Engineering");
    engine.set_crew_status(b, CrewStatus::OffDuty).unwrap();
    let crew: Vec<CrewId> = engine.available_crew().iter().map(|m| m.id).collect();
    assert_eq!(crew, vec![a]);
}

// ── Mission resolution ─────────────────────────────────────────────────

#[test]
fn successful_mission_burns_fuel_only() {
    let mut engine = engine(ScriptedRandom::new().with_outcomes([true]).with_ints([33]));
    let ship = engine.add_ship("Stellar Voyager", 60, 90);
    let crew = engine.add_crew_member("Cmdr. Sarah Chen", "Commander", "Navigation");
    let id = engine
        .create_mission("Supply Run", Priority::Low, Some(ship), &[crew])
        .unwrap();

    let resolutions = run_out_timer(&mut engine);

    assert_eq!(resolutions.len(), 1);
    let resolution = &resolutions[0];
    assert_eq!(resolution.mission, id);
    assert_eq!(resolution.outcome, MissionStatus::Completed);
    assert_eq!(resolution.fuel_consumed, 33);
    let ship = engine.get_ship(ship).unwrap();
    assert_eq!(ship.fuel_level, 27);
    assert_eq!(ship.condition, 90);
    assert_eq!(ship.status, ShipStatus::Docked);
    assert_eq!(engine.get_crew_member(crew).unwrap().status, CrewStatus::Available);
    assert_eq!(
        engine.sink().last().unwrap().message,
        "Mission Supply Run completed successfully!"
    );
}

#[test]
fn failed_mission_sends_battered_ship_to_maintenance() {
    let mut engine = engine(ScriptedRandom::new().with_outcomes([false]).with_ints([25, 20]));
    let ship = engine.add_ship("Cosmic Pioneer", 25, 35);
    let crew = engine.add_crew_member("Lt. James Wilson", "Lieutenant", "Engineering");
    let id = engine
        .create_mission("Asteroid Survey", Priority::High, Some(ship), &[crew])
        .unwrap();
    engine.sink_mut().drain();

    let resolutions = run_out_timer(&mut engine);

    assert_eq!(resolutions.len(), 1);
    let resolution = &resolutions[0];
    assert_eq!(resolution.outcome, MissionStatus::Failed);
    assert_eq!(resolution.ship_status, ShipStatus::Maintenance);
    let ship_state = engine.get_ship(ship).unwrap();
    assert_eq!(ship_state.fuel_level, 0);
    assert_eq!(ship_state.condition, 15);
    assert_eq!(ship_state.maintenance_progress, 0);
    assert_eq!(engine.get_mission(id).unwrap().status(), MissionStatus::Failed);

    let notices = engine.sink().notices();
    assert_eq!(notices.len(), 2);
    assert_eq!(notices[0].message, "Cosmic Pioneer requires maintenance!");
    assert_eq!(notices[0].kind, NoticeKind::Warning);
    assert_eq!(notices[1].message, "Mission Asteroid Survey failed!");
    assert_eq!(notices[1].kind, NoticeKind::Error);
}

#[test]
fn failed_mission_with_fuel_left_but_damaged_hull_needs_maintenance() {
    let mut engine = engine(ScriptedRandom::new().with_outcomes([false]).with_ints([20, 15]));
    let ship = engine.add_ship("Nova Explorer", 90, 44);
    let crew = engine.add_crew_member("Lt. James Wilson", "Lieutenant", "Engineering");
    let id = engine
        .create_mission("Patrol", Priority::Low, Some(ship), &[crew])
        .unwrap();

    run_out_timer(&mut engine);

    assert_eq!(engine.get_mission(id).unwrap().status(), MissionStatus::Failed);
    let ship = engine.get_ship(ship).unwrap();
    assert_eq!((ship.fuel_level, ship.condition), (70, 29));
    assert_eq!(ship.status, ShipStatus::Maintenance);
}

#[test]
fn resolving_twice_matches_resolving_once() {
    let mut engine = engine(
        ScriptedRandom::new()
            .with_outcomes([false, false])
            .with_ints([30, 20, 30, 20]),
    );
    let ship = engine.add_ship("Stellar Voyager", 80, 80);
    let crew = engine.add_crew_member("Cmdr. Sarah Chen", "Commander", "Navigation");
    let id = engine
        .create_mission("Survey", Priority::Low, Some(ship), &[crew])
        .unwrap();

    assert_eq!(run_out_timer(&mut engine).len(), 1);
    let once = engine.snapshot();
    let notices = engine.sink().len();

    assert!(engine.resolve_mission(id).is_none());
    let now = engine.now();
    assert!(engine.on_tick(now).resolutions.is_empty());
    assert_eq!(engine.snapshot(), once);
    assert_eq!(engine.sink().len(), notices);
    // Only the first resolution drew
    assert_eq!(engine.random_mut().remaining(), 3);
}

#[test]
fn resolve_before_timer_runs_out_changes_nothing() {
    let mut engine = engine(ScriptedRandom::new().with_outcomes([true]).with_ints([20]));
    let ship = engine.add_ship("Stellar Voyager", 100, 100);
    let crew = engine.add_crew_member("Cmdr. Sarah Chen", "Commander", "Navigation");
    let id = engine
        .create_mission("Survey", Priority::Low, Some(ship), &[crew])
        .unwrap();

    engine.on_tick(1.0);
    let before = engine.snapshot();

    assert!(engine.resolve_mission(id).is_none());
    assert_eq!(engine.snapshot(), before);
    let mission = engine.get_mission(id).unwrap();
    assert_eq!(mission.status(), MissionStatus::InProgress);
    assert!(mission.progress() < 2.0);
    assert_eq!(engine.get_ship(ship).unwrap().status, ShipStatus::Mission);
    assert_eq!(engine.random_mut().remaining(), 2);

    // The timer still resolves it at full duration
    engine.on_tick(60.0);
    assert!(engine.resolve_mission(id).is_none());
    assert_eq!(engine.get_mission(id).unwrap().status(), MissionStatus::Completed);
}

#[test]
fn mission_resolves_through_ticks_after_duration() {
    let mut engine = engine(ScriptedRandom::new().with_outcomes([true]).with_ints([20]));
    let ship = engine.add_ship("Stellar Voyager", 100, 100);
    let crew = engine.add_crew_member("Cmdr. Sarah Chen", "Commander", "Navigation");
    let id = engine
        .create_mission("Survey", Priority::Medium, Some(ship), &[crew])
        .unwrap();

    let reports = run_until(&mut engine, 59.0, 0.5);
    assert!(reports.iter().all(|r| r.resolutions.is_empty()));
    assert_eq!(engine.get_mission(id).unwrap().status(), MissionStatus::InProgress);
    assert!(engine.get_mission(id).unwrap().progress() > 95.0);

    let reports = run_until(&mut engine, 65.0, 0.5);
    let resolved: usize = reports.iter().map(|r| r.resolutions.len()).sum();
    assert_eq!(resolved, 1);
    assert_eq!(engine.get_mission(id).unwrap().status(), MissionStatus::Completed);
    assert_eq!(engine.get_ship(ship).unwrap().fuel_level, 80);
    assert!(engine.active_missions().is_empty());
}

// ── Direct status commands ─────────────────────────────────────────────

#[test]
fn on_mission_crew_cannot_be_edited() {
    let mut engine = engine(ScriptedRandom::new());
    let ship = engine.add_ship("Stellar Voyager", 100, 100);
    let crew = engine.add_crew_member("Cmdr. Sarah Chen", "Commander", "Navigation");
    engine
        .create_mission("Survey", Priority::Low, Some(ship), &[crew])
        .unwrap();

    let err = engine.set_crew_status(crew, CrewStatus::OffDuty).unwrap_err();

    assert_eq!(err, FleetError::CrewBusy(crew));
    assert_eq!(engine.get_crew_member(crew).unwrap().status, CrewStatus::OnMission);
    assert_eq!(
        engine.sink().last().unwrap().message,
        format!("Cannot update status of crew member {} on active mission", crew)
    );
}

#[test]
fn ship_on_mission_only_leaves_through_resolution() {
    let mut engine = engine(ScriptedRandom::new().with_outcomes([true]).with_ints([20]));
    let ship = engine.add_ship("Stellar Voyager", 100, 100);
    let crew = engine.add_crew_member("Cmdr. Sarah Chen", "Commander", "Navigation");
    let id = engine
        .create_mission("Survey", Priority::Low, Some(ship), &[crew])
        .unwrap();

    for status in [ShipStatus::Docked, ShipStatus::Maintenance, ShipStatus::Mission] {
        assert_eq!(
            engine.set_ship_status(ship, status),
            Err(FleetError::ShipBusy(ship))
        );
        assert_eq!(engine.get_ship(ship).unwrap().status, ShipStatus::Mission);
    }

    assert_eq!(run_out_timer(&mut engine)[0].mission, id);
    assert_eq!(engine.get_ship(ship).unwrap().status, ShipStatus::Docked);
}

#[test]
fn reserved_statuses_are_rejected() {
    let mut engine = engine(ScriptedRandom::new());
    let ship = engine.add_ship("Stellar Voyager", 100, 100);
    let crew = engine.add_crew_member("Cmdr. Sarah Chen", "Commander", "Navigation");

    assert!(matches!(
        engine.set_ship_status(ship, ShipStatus::Mission),
        Err(FleetError::ReservedStatus { .. })
    ));
    assert!(matches!(
        engine.set_crew_status(crew, CrewStatus::OnMission),
        Err(FleetError::ReservedStatus { .. })
    ));
    assert_eq!(engine.get_ship(ship).unwrap().status, ShipStatus::Docked);
    assert_eq!(engine.get_crew_member(crew).unwrap().status, CrewStatus::Available);
}

#[test]
fn unknown_ids_are_not_found() {
    let mut engine = engine(ScriptedRandom::new());
    assert!(matches!(
        engine.set_ship_status(ShipId(5), ShipStatus::Maintenance),
        Err(FleetError::NotFound { id: 5, .. })
    ));
    assert!(matches!(
        engine.set_crew_status(CrewId(5), CrewStatus::OffDuty),
        Err(FleetError::NotFound { id: 5, .. })
    ));
    assert!(engine.resolve_mission(MissionId(5)).is_none());
}

// ── Maintenance ────────────────────────────────────────────────────────

#[test]
fn maintenance_cycle_restores_ship_exactly_once() {
    let mut engine = engine(ScriptedRandom::new());
    let ship = engine.add_ship("Nova Explorer", 40, 20);
    engine.set_ship_status(ship, ShipStatus::Maintenance).unwrap();
    assert_eq!(engine.get_ship(ship).unwrap().maintenance_progress, 0);

    let mid = run_until(&mut engine, 15.0, 0.1);
    assert!(mid.iter().all(|r| r.maintenance_completed.is_empty()));
    let progress = engine.get_ship(ship).unwrap().maintenance_progress;
    assert!((45..=55).contains(&progress), "progress {}", progress);

    let rest = run_until(&mut engine, 45.0, 0.1);
    let completions: Vec<ShipId> = rest
        .into_iter()
        .flat_map(|r| r.maintenance_completed)
        .collect();
    assert_eq!(completions, vec![ship]);

    let restored = engine.get_ship(ship).unwrap();
    assert_eq!(restored.status, ShipStatus::Docked);
    assert_eq!(restored.fuel_level, 100);
    assert_eq!(restored.condition, 100);
    assert_eq!(restored.maintenance_progress, 0);
    assert_eq!(
        engine.sink().last().unwrap().message,
        "Nova Explorer maintenance complete - All systems restored"
    );
}

#[test]
fn ship_in_maintenance_cannot_be_redirected() {
    let mut engine = engine(ScriptedRandom::new());
    let ship = engine.add_ship("Nova Explorer", 40, 20);
    engine.set_ship_status(ship, ShipStatus::Maintenance).unwrap();

    assert_eq!(
        engine.set_ship_status(ship, ShipStatus::Docked),
        Err(FleetError::ShipBusy(ship))
    );
    let crew = engine.add_crew_member("Cmdr. Sarah Chen", "Commander", "Navigation");
    assert_eq!(
        engine.create_mission("Survey", Priority::Low, Some(ship), &[crew]),
        Err(FleetError::ShipBusy(ship))
    );
}

#[test]
fn full_shift_failure_repair_relaunch() {
    let mut engine = engine(
        ScriptedRandom::new()
            .with_outcomes([false, true])
            .with_ints([40, 30, 20]),
    );
    let ship = engine.add_ship("Cosmic Pioneer", 35, 40);
    let crew = engine.add_crew_member("Lt. James Wilson", "Lieutenant", "Engineering");

    engine
        .create_mission("First Contact", Priority::High, Some(ship), &[crew])
        .unwrap();
    run_until(&mut engine, 61.0, 0.25);

    // Failed, empty and battered: into the bay
    let battered = engine.get_ship(ship).unwrap();
    assert_eq!(battered.status, ShipStatus::Maintenance);
    assert_eq!((battered.fuel_level, battered.condition), (0, 10));
    assert!(engine.available_ships().is_empty());
    assert_eq!(engine.get_crew_member(crew).unwrap().status, CrewStatus::Available);

    run_until(&mut engine, 100.0, 0.25);
    assert_eq!(engine.available_ships().len(), 1);

    let second = engine
        .create_mission("Second Contact", Priority::High, Some(ship), &[crew])
        .unwrap();
    run_until(&mut engine, 170.0, 0.25);

    assert_eq!(
        engine.get_mission(second).unwrap().status(),
        MissionStatus::Completed
    );
    let ship = engine.get_ship(ship).unwrap();
    assert_eq!((ship.fuel_level, ship.condition), (80, 100));
    assert_eq!(ship.status, ShipStatus::Docked);
    assert_eq!(engine.list_missions().len(), 2);
}
