//! Simulation tuning constants.
//!
//! Defaults reproduce the command center's pacing: maintenance takes 100
//! steps of 0.3 s, a mission runs for one minute and succeeds 70% of the time.
//! Config files are JSON; any field may be omitted.

use crate::components::GAUGE_MAX;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Inclusive integer range for a random draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawRange {
    pub min: u32,
    pub max: u32,
}

impl DrawRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Seconds between maintenance clock steps
    pub maintenance_step_secs: f64,
    /// Percentage points gained per maintenance step
    pub maintenance_increment: u8,
    /// Wall-clock length of every mission
    pub mission_duration_secs: f64,
    /// Chance a mission succeeds
    pub success_probability: f64,
    /// Fuel burned by any mission
    pub fuel_consumption: DrawRange,
    /// Hull damage taken by a failed mission
    pub failure_damage: DrawRange,
    /// Launch minimums
    pub min_mission_fuel: u8,
    pub min_mission_condition: u8,
    /// A returning ship below this condition goes straight to maintenance
    pub maintenance_condition: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            maintenance_step_secs: 0.3,
            maintenance_increment: 1,
            mission_duration_secs: 60.0,
            success_probability: 0.7,
            fuel_consumption: DrawRange::new(20, 40),
            failure_damage: DrawRange::new(15, 30),
            min_mission_fuel: 25,
            min_mission_condition: 30,
            maintenance_condition: 30,
        }
    }
}

impl SimConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.maintenance_step_secs > 0.0) {
            return Err(ConfigError::Invalid(
                "maintenance_step_secs must be positive".into(),
            ));
        }
        if self.maintenance_increment == 0 {
            return Err(ConfigError::Invalid(
                "maintenance_increment must be at least 1".into(),
            ));
        }
        if !(self.mission_duration_secs > 0.0) {
            return Err(ConfigError::Invalid(
                "mission_duration_secs must be positive".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.success_probability) {
            return Err(ConfigError::Invalid(
                "success_probability must be within 0..=1".into(),
            ));
        }
        for (name, value) in [
            ("maintenance_increment", self.maintenance_increment),
            ("min_mission_fuel", self.min_mission_fuel),
            ("min_mission_condition", self.min_mission_condition),
            ("maintenance_condition", self.maintenance_condition),
        ] {
            if value > GAUGE_MAX {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be within 0..={GAUGE_MAX}"
                )));
            }
        }
        for (name, range) in [
            ("fuel_consumption", self.fuel_consumption),
            ("failure_damage", self.failure_damage),
        ] {
            if range.min > range.max {
                return Err(ConfigError::Invalid(format!("{name}: min exceeds max")));
            }
        }
        Ok(())
    }
}
