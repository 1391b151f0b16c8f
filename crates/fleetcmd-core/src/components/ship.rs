//! Ship component and the derived gauges shown on a ship card.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound of every ship gauge (fuel, condition, maintenance progress).
pub const GAUGE_MAX: u8 = 100;

/// Clamp a signed gauge reading into `0..=100`.
pub fn clamp_gauge(value: i32) -> u8 {
    value.clamp(0, GAUGE_MAX as i32) as u8
}

/// Stable identifier of a ship within the fleet store
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShipId(pub u32);

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShipStatus {
    Docked,
    Maintenance,
    Mission,
}

impl ShipStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShipStatus::Docked => "docked",
            ShipStatus::Maintenance => "maintenance",
            ShipStatus::Mission => "mission",
        }
    }
}

impl fmt::Display for ShipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fleet vessel.
///
/// `fuel_level`, `condition` and `maintenance_progress` are percentages and
/// never leave `0..=100`; every setter on this type clamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ship {
    pub id: ShipId,
    pub name: String,
    pub status: ShipStatus,
    pub fuel_level: u8,
    pub condition: u8,
    /// Only meaningful while `status == Maintenance`
    pub maintenance_progress: u8,
}

impl Ship {
    pub fn new(id: ShipId, name: impl Into<String>, fuel_level: i32, condition: i32) -> Self {
        Self {
            id,
            name: name.into(),
            status: ShipStatus::Docked,
            fuel_level: clamp_gauge(fuel_level),
            condition: clamp_gauge(condition),
            maintenance_progress: 0,
        }
    }

    /// Burn fuel, bottoming out at empty
    pub fn consume_fuel(&mut self, amount: u32) {
        self.fuel_level = clamp_gauge(self.fuel_level as i32 - amount.min(GAUGE_MAX as u32) as i32);
    }

    /// Reduce hull condition, bottoming out at zero
    pub fn damage(&mut self, amount: u32) {
        self.condition = clamp_gauge(self.condition as i32 - amount.min(GAUGE_MAX as u32) as i32);
    }

    /// Apply a partial update; numeric fields are clamped afterwards.
    pub fn apply(&mut self, patch: &ShipPatch) {
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(fuel) = patch.fuel_level {
            self.fuel_level = clamp_gauge(fuel);
        }
        if let Some(condition) = patch.condition {
            self.condition = clamp_gauge(condition);
        }
        if let Some(progress) = patch.maintenance_progress {
            self.maintenance_progress = clamp_gauge(progress);
        }
    }

    /// Docked ships are the only ones a user may act on
    pub fn is_busy(&self) -> bool {
        self.status != ShipStatus::Docked
    }

    pub fn condition_grade(&self) -> ConditionGrade {
        ConditionGrade::from_condition(self.condition)
    }

    pub fn fuel_band(&self) -> FuelBand {
        FuelBand::from_fuel(self.fuel_level)
    }
}

/// Partial field update for a ship. Unset fields are left untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShipPatch {
    pub status: Option<ShipStatus>,
    pub fuel_level: Option<i32>,
    pub condition: Option<i32>,
    pub maintenance_progress: Option<i32>,
}

impl ShipPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: ShipStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_fuel(mut self, fuel: i32) -> Self {
        self.fuel_level = Some(fuel);
        self
    }

    pub fn with_condition(mut self, condition: i32) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn with_maintenance_progress(mut self, progress: i32) -> Self {
        self.maintenance_progress = Some(progress);
        self
    }
}

/// Human-readable hull rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ConditionGrade {
    Critical,
    Poor,
    Fair,
    Good,
    Excellent,
}

impl ConditionGrade {
    pub fn from_condition(condition: u8) -> Self {
        match condition {
            c if c >= 90 => ConditionGrade::Excellent,
            c if c >= 75 => ConditionGrade::Good,
            c if c >= 50 => ConditionGrade::Fair,
            c if c >= 25 => ConditionGrade::Poor,
            _ => ConditionGrade::Critical,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConditionGrade::Excellent => "Excellent",
            ConditionGrade::Good => "Good",
            ConditionGrade::Fair => "Fair",
            ConditionGrade::Poor => "Poor",
            ConditionGrade::Critical => "Critical",
        }
    }
}

impl fmt::Display for ConditionGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fuel reserve band
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FuelBand {
    Critical,
    Low,
    Nominal,
}

impl FuelBand {
    pub fn from_fuel(fuel: u8) -> Self {
        match fuel {
            f if f >= 60 => FuelBand::Nominal,
            f if f >= 25 => FuelBand::Low,
            _ => FuelBand::Critical,
        }
    }
}
