//! FleetCmd Headless Simulation Harness
//!
//! Drives the fleet engine with a fixed-interval tick loop, the way the
//! command center's timer would, and checks the fleet rules along the way.
//! Runs entirely in-process with no rendering.
//!
//! Usage:
//!   cargo run -p fleetcmd-simtest
//!   cargo run -p fleetcmd-simtest -- --seed 7 --ticks 1200 --verbose
//!   cargo run -p fleetcmd-simtest -- --config fleet.json --realtime

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use fleetcmd_core::error::ConfigError;
use fleetcmd_core::generation::seed_demo_roster;
use fleetcmd_core::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fleetcmd-simtest", about = "Headless fleet command simulation harness")]
struct Args {
    /// JSON file with simulation tuning (missing fields use defaults)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for mission outcome draws
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Number of ticks to run
    #[arg(long, default_value_t = 900)]
    ticks: u32,

    /// Simulated milliseconds between ticks
    #[arg(long, default_value_t = 100)]
    tick_ms: u64,

    /// Sleep between ticks and feed wall-clock instants
    #[arg(long)]
    realtime: bool,

    /// Print every check and the final snapshot
    #[arg(long)]
    verbose: bool,
}

type Engine = SimulationEngine<StdRandom, NotificationLog>;

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

impl TestResult {
    fn new(name: &str, passed: bool, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed,
            detail: detail.into(),
        }
    }
}

fn main() {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== FleetCmd Simulation Harness ===\n");

    let mut results = Vec::new();

    // 1. Config loading and validation
    let config = match load_config(args.config.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            println!("  ✗ config_load: {}", e);
            std::process::exit(1);
        }
    };
    results.extend(validate_config(&config));

    let mut state = FleetState::new();
    seed_demo_roster(&mut state);
    let mut engine = SimulationEngine::with_parts(
        state,
        config,
        StdRandom::seeded(args.seed),
        NotificationLog::new(),
    );

    // 2. Command rules on the opening roster
    results.extend(validate_commands(&mut engine));

    // 3. Timed shift
    results.extend(run_shift(&mut engine, &args));

    if args.verbose {
        match serde_json::to_string_pretty(&engine.snapshot()) {
            Ok(json) => println!("\n--- Final Snapshot ---\n{}", json),
            Err(e) => warn!("snapshot serialization failed: {}", e),
        }
    }

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || args.verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<SimConfig, ConfigError> {
    match path {
        Some(path) => {
            info!("loading config from {}", path.display());
            SimConfig::load(path)
        }
        None => Ok(SimConfig::default()),
    }
}

/// Log and discard pending notices
fn flush_notices(engine: &mut Engine) {
    for notice in engine.sink_mut().drain() {
        match notice.kind {
            NoticeKind::Error | NoticeKind::Warning => {
                warn!(kind = ?notice.kind, "{}", notice.message)
            }
            _ => info!(kind = ?notice.kind, "{}", notice.message),
        }
    }
}

fn find_ship(engine: &Engine, name: &str) -> Option<ShipId> {
    engine.list_ships().iter().find(|s| s.name == name).map(|s| s.id)
}

fn find_crew(engine: &Engine, name: &str) -> Option<CrewId> {
    engine.list_crew().iter().find(|m| m.name == name).map(|m| m.id)
}

// ── 1. Config ───────────────────────────────────────────────────────────

fn validate_config(config: &SimConfig) -> Vec<TestResult> {
    println!("--- Config ---");
    let mut results = Vec::new();

    results.push(TestResult::new(
        "config_valid",
        config.validate().is_ok(),
        format!(
            "duration {}s, success p={}, maintenance step {}s",
            config.mission_duration_secs, config.success_probability, config.maintenance_step_secs
        ),
    ));

    let partial = SimConfig::from_json(r#"{ "mission_duration_secs": 5.0 }"#);
    results.push(TestResult::new(
        "config_partial_overrides",
        matches!(&partial, Ok(c) if c.mission_duration_secs == 5.0 && c.min_mission_fuel == 25),
        "missing fields fall back to defaults",
    ));

    let invalid = SimConfig::from_json(r#"{ "success_probability": 1.5 }"#);
    results.push(TestResult::new(
        "config_rejects_bad_probability",
        matches!(invalid, Err(ConfigError::Invalid(_))),
        match invalid {
            Ok(_) => "accepted p=1.5".to_string(),
            Err(e) => e.to_string(),
        },
    ));

    results
}

// ── 2. Commands ─────────────────────────────────────────────────────────

fn validate_commands(engine: &mut Engine) -> Vec<TestResult> {
    println!("--- Command Rules ---");
    let mut results = Vec::new();

    let (Some(voyager), Some(explorer), Some(pioneer)) = (
        find_ship(engine, "Stellar Voyager"),
        find_ship(engine, "Nova Explorer"),
        find_ship(engine, "Cosmic Pioneer"),
    ) else {
        results.push(TestResult::new("roster_ships", false, "demo ships missing"));
        return results;
    };
    let (Some(chen), Some(wilson), Some(patel)) = (
        find_crew(engine, "Cmdr. Sarah Chen"),
        find_crew(engine, "Lt. James Wilson"),
        find_crew(engine, "Dr. Maya Patel"),
    ) else {
        results.push(TestResult::new("roster_crew", false, "demo crew missing"));
        return results;
    };

    let available = engine.available_ships().len();
    results.push(TestResult::new(
        "roster_all_ready",
        available == 3 && engine.available_crew().len() == 3,
        format!("{} ships, {} crew ready", available, engine.available_crew().len()),
    ));

    let empty = engine.create_mission("   ", Priority::High, Some(voyager), &[chen]);
    results.push(TestResult::new(
        "reject_empty_name",
        empty == Err(FleetError::InvalidMissionName),
        format!("{:?}", empty),
    ));

    let bay = engine.set_ship_status(explorer, ShipStatus::Maintenance);
    let redirected = engine.set_ship_status(explorer, ShipStatus::Docked);
    results.push(TestResult::new(
        "maintenance_locks_ship",
        bay.is_ok() && redirected == Err(FleetError::ShipBusy(explorer)),
        format!("enter {:?}, redirect {:?}", bay, redirected),
    ));

    let reserved = engine.set_ship_status(pioneer, ShipStatus::Mission);
    results.push(TestResult::new(
        "reject_direct_mission_status",
        matches!(reserved, Err(FleetError::ReservedStatus { .. })),
        format!("{:?}", reserved),
    ));

    let launch = engine.create_mission(
        "Nebula Research",
        Priority::High,
        Some(voyager),
        &[chen, wilson],
    );
    let launched = launch.is_ok()
        && engine.get_ship(voyager).map(|s| s.status) == Some(ShipStatus::Mission);
    results.push(TestResult::new(
        "launch_mission",
        launched,
        format!("{:?}", launch),
    ));

    let stale = engine.create_mission("Asteroid Survey", Priority::Low, Some(pioneer), &[chen]);
    results.push(TestResult::new(
        "reject_stale_crew",
        stale == Err(FleetError::CrewUnavailable(chen)),
        format!("{:?}", stale),
    ));

    let busy = engine.set_crew_status(wilson, CrewStatus::OffDuty);
    results.push(TestResult::new(
        "reject_edit_on_mission_crew",
        busy == Err(FleetError::CrewBusy(wilson)),
        format!("{:?}", busy),
    ));

    let off = engine.set_crew_status(patel, CrewStatus::OffDuty);
    let back = engine.set_crew_status(patel, CrewStatus::Available);
    results.push(TestResult::new(
        "crew_duty_toggle",
        off.is_ok() && back.is_ok(),
        format!("off {:?}, back {:?}", off, back),
    ));

    flush_notices(engine);
    results
}

// ── 3. Shift ────────────────────────────────────────────────────────────

/// Rule violations in the current state, if any
fn check_invariants(engine: &Engine) -> Vec<String> {
    let mut problems = Vec::new();
    let active = engine.active_missions();

    for ship in engine.list_ships() {
        if ship.fuel_level > 100 || ship.condition > 100 || ship.maintenance_progress > 100 {
            problems.push(format!("{} gauges out of range", ship.name));
        }
        let missions = active.iter().filter(|m| m.assigned_ship() == ship.id).count();
        if (missions == 1) != (ship.status == ShipStatus::Mission) || missions > 1 {
            problems.push(format!(
                "{} is {} with {} active missions",
                ship.name, ship.status, missions
            ));
        }
    }

    for member in engine.list_crew() {
        let missions = active
            .iter()
            .filter(|m| m.assigned_crew().contains(&member.id))
            .count();
        if (missions == 1) != (member.status == CrewStatus::OnMission) || missions > 1 {
            problems.push(format!(
                "{} is {} with {} active missions",
                member.name, member.status, missions
            ));
        }
    }

    problems
}

fn run_shift(engine: &mut Engine, args: &Args) -> Vec<TestResult> {
    println!("--- Shift ({} ticks @ {}ms) ---", args.ticks, args.tick_ms);
    let mut results = Vec::new();

    let interval = Duration::from_millis(args.tick_ms);
    let started = Instant::now();
    let mut now = engine.now();
    let mut violations = Vec::new();
    let mut resolutions = Vec::new();
    let mut completed = Vec::new();

    for tick in 0..args.ticks {
        if args.realtime {
            std::thread::sleep(interval);
            now = started.elapsed().as_secs_f64();
        } else {
            now += interval.as_secs_f64();
        }

        let report = engine.on_tick(now);
        resolutions.extend(report.resolutions);
        completed.extend(report.maintenance_completed);
        flush_notices(engine);

        for problem in check_invariants(engine) {
            violations.push(format!("tick {}: {}", tick, problem));
        }
    }

    let horizon = engine.now();
    info!(
        "shift ended at {:.1}s: {} resolutions, {} repairs",
        horizon,
        resolutions.len(),
        completed.len()
    );

    results.push(TestResult::new(
        "invariants_hold",
        violations.is_empty(),
        violations
            .first()
            .cloned()
            .unwrap_or_else(|| format!("{} ticks clean", args.ticks)),
    ));

    let duration = engine.config().mission_duration_secs;
    let expected_resolved = horizon >= duration;
    let unique: std::collections::HashSet<MissionId> =
        resolutions.iter().map(|r| r.mission).collect();
    results.push(TestResult::new(
        "missions_resolve_once",
        unique.len() == resolutions.len()
            && (!expected_resolved || engine.active_missions().is_empty()),
        format!(
            "{} resolved, {} still active at {:.1}s",
            resolutions.len(),
            engine.active_missions().len(),
            horizon
        ),
    ));

    let repair_time = engine.config().maintenance_step_secs * 100.0
        / f64::from(engine.config().maintenance_increment.max(1));
    if let Some(explorer) = find_ship(engine, "Nova Explorer") {
        let ship = engine.get_ship(explorer);
        let restored = ship
            .as_ref()
            .map(|s| s.status == ShipStatus::Docked && s.fuel_level == 100 && s.condition == 100)
            .unwrap_or(false);
        results.push(TestResult::new(
            "maintenance_restores_ship",
            horizon < repair_time + 1.0 || (restored && completed.contains(&explorer)),
            format!("{:?}", ship),
        ));
    }

    for resolution in &resolutions {
        let consistent = match resolution.outcome {
            MissionStatus::Completed => resolution.condition_damage == 0,
            MissionStatus::Failed => true,
            MissionStatus::InProgress => false,
        };
        results.push(TestResult::new(
            "resolution_outcome",
            consistent,
            format!(
                "mission {} {}: -{} fuel, -{} condition, ship {}",
                resolution.mission,
                resolution.outcome.as_str(),
                resolution.fuel_consumed,
                resolution.condition_damage,
                resolution.ship_status
            ),
        ));
    }

    results
}
