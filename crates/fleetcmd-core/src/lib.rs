//! FleetCmd Core - fleet operations simulation engine
//!
//! Ships, crew members and missions whose statuses evolve under
//! resource-availability rules, timed progress and random mission outcomes.
//!
//! # Architecture
//!
//! - **Components**: plain data for ships, crew and missions
//! - **Stores**: the authoritative mutable state, one store per entity type
//! - **Lifecycle**: every legality rule and status transition
//! - **Systems**: the maintenance and mission clocks run on each tick
//! - **Engine**: owns the stores and exposes queries, commands and `on_tick`
//!
//! The engine never reads a clock on its own; an external driver calls
//! [`SimulationEngine::on_tick`] with the current instant in seconds.
//!
//! # Example
//!
//! ```rust,no_run
//! use fleetcmd_core::prelude::*;
//!
//! let mut engine = SimulationEngine::new();
//! let ship = engine.add_ship("Stellar Voyager", 100, 100);
//! let chen = engine.add_crew_member("Cmdr. Sarah Chen", "Commander", "Navigation");
//!
//! engine
//!     .create_mission("Nebula Research", Priority::High, Some(ship), &[chen])
//!     .expect("ship and crew are ready");
//!
//! let mut now = 0.0;
//! loop {
//!     now += 0.1;
//!     engine.on_tick(now);
//! }
//! ```

pub mod components;
pub mod config;
pub mod engine;
pub mod error;
pub mod generation;
pub mod lifecycle;
pub mod notify;
pub mod random;
pub mod stores;
pub mod systems;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::components::*;
    pub use crate::config::SimConfig;
    pub use crate::engine::{FleetSnapshot, SimulationEngine, TickReport};
    pub use crate::error::{FleetError, IneligibleReason};
    pub use crate::lifecycle::MissionResolution;
    pub use crate::notify::{Notice, NoticeKind, NotificationLog, NotificationSink};
    pub use crate::random::{RandomSource, ScriptedRandom, StdRandom};
    pub use crate::stores::FleetState;
}
