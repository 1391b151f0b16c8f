//! Error types for fleet commands and configuration loading.
//!
//! Every `FleetError` is a rejected request, never a transient fault: the
//! engine leaves its state untouched and nothing is retried.

use crate::components::{CrewId, ShipId};
use std::fmt;
use thiserror::Error;

/// Which store a missing id was looked up in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Ship,
    CrewMember,
    Mission,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntityKind::Ship => "ship",
            EntityKind::CrewMember => "crew member",
            EntityKind::Mission => "mission",
        })
    }
}

/// Why a docked ship cannot launch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IneligibleReason {
    LowFuel,
    PoorCondition,
}

impl fmt::Display for IneligibleReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            IneligibleReason::LowFuel => "fuel level too low",
            IneligibleReason::PoorCondition => "condition too poor",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FleetError {
    #[error("no {kind} with id {id}")]
    NotFound { kind: EntityKind, id: u32 },

    #[error("Cannot update status of ship {0} while it is on a mission or in maintenance")]
    ShipBusy(ShipId),

    #[error("Cannot update status of crew member {0} on active mission")]
    CrewBusy(CrewId),

    #[error("Ship {ship} is not eligible for a mission: {reason}")]
    IneligibleShip {
        ship: ShipId,
        reason: IneligibleReason,
    },

    #[error("Crew member {0} is not available for assignment")]
    CrewUnavailable(CrewId),

    #[error("Mission name is required")]
    InvalidMissionName,

    #[error("Please assign a ship")]
    ShipNotSelected,

    #[error("Please assign at least one crew member")]
    NoCrewAssigned,

    #[error("Status '{status}' can only be set by mission control")]
    ReservedStatus { status: &'static str },
}

impl FleetError {
    pub fn ship_not_found(id: ShipId) -> Self {
        FleetError::NotFound {
            kind: EntityKind::Ship,
            id: id.0,
        }
    }

    pub fn crew_not_found(id: CrewId) -> Self {
        FleetError::NotFound {
            kind: EntityKind::CrewMember,
            id: id.0,
        }
    }
}

/// Failure to read a simulation config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}
