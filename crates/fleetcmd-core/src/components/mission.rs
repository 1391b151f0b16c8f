//! Mission component.
//!
//! A mission refers to its ship and crew by id only; the fleet and crew
//! stores keep ownership of those entities. The assignment fields are fixed
//! at creation and the status moves to a terminal value at most once, so the
//! fields are private and only the crate can advance them.

use super::crew::CrewId;
use super::ship::ShipId;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MissionId(pub u32);

impl fmt::Display for MissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissionStatus {
    InProgress,
    Completed,
    Failed,
}

impl MissionStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, MissionStatus::InProgress)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MissionStatus::InProgress => "in-progress",
            MissionStatus::Completed => "completed",
            MissionStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for MissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    id: MissionId,
    name: String,
    status: MissionStatus,
    assigned_ship: ShipId,
    assigned_crew: Vec<CrewId>,
    priority: Priority,
    /// Simulation instant (seconds) the mission launched
    start_time: f64,
    /// Percentage complete, 0.0..=100.0
    progress: f64,
}

impl Mission {
    pub(crate) fn new(
        id: MissionId,
        name: String,
        priority: Priority,
        assigned_ship: ShipId,
        assigned_crew: Vec<CrewId>,
        start_time: f64,
    ) -> Self {
        Self {
            id,
            name,
            status: MissionStatus::InProgress,
            assigned_ship,
            assigned_crew,
            priority,
            start_time,
            progress: 0.0,
        }
    }

    pub fn id(&self) -> MissionId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> MissionStatus {
        self.status
    }

    pub fn assigned_ship(&self) -> ShipId {
        self.assigned_ship
    }

    pub fn assigned_crew(&self) -> &[CrewId] {
        &self.assigned_crew
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn is_active(&self) -> bool {
        self.status == MissionStatus::InProgress
    }

    /// Record observed progress. Ignored once terminal; never moves backwards.
    pub(crate) fn record_progress(&mut self, progress: f64) {
        if self.is_active() {
            self.progress = self.progress.max(progress.clamp(0.0, 100.0));
        }
    }

    /// Move to a terminal status. Returns false if the mission already ended.
    pub(crate) fn conclude(&mut self, outcome: MissionStatus) -> bool {
        if self.status.is_terminal() || !outcome.is_terminal() {
            return false;
        }
        self.status = outcome;
        self.progress = 100.0;
        true
    }
}
