//! Crew member component

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CrewId(pub u32);

impl fmt::Display for CrewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Availability of a crew member for assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CrewStatus {
    Available,
    OffDuty,
    OnMission,
}

impl CrewStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CrewStatus::Available => "available",
            CrewStatus::OffDuty => "off-duty",
            CrewStatus::OnMission => "on-mission",
        }
    }
}

impl fmt::Display for CrewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewMember {
    pub id: CrewId,
    pub name: String,
    pub rank: String,
    pub specialty: String,
    pub status: CrewStatus,
}

impl CrewMember {
    pub fn new(
        id: CrewId,
        name: impl Into<String>,
        rank: impl Into<String>,
        specialty: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            rank: rank.into(),
            specialty: specialty.into(),
            status: CrewStatus::Available,
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == CrewStatus::Available
    }

    pub fn apply(&mut self, patch: &CrewPatch) {
        if let Some(rank) = &patch.rank {
            self.rank = rank.clone();
        }
        if let Some(specialty) = &patch.specialty {
            self.specialty = specialty.clone();
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

/// Partial field update for a crew member
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrewPatch {
    pub rank: Option<String>,
    pub specialty: Option<String>,
    pub status: Option<CrewStatus>,
}

impl CrewPatch {
    pub fn with_rank(mut self, rank: impl Into<String>) -> Self {
        self.rank = Some(rank.into());
        self
    }

    pub fn with_specialty(mut self, specialty: impl Into<String>) -> Self {
        self.specialty = Some(specialty.into());
        self
    }

    pub fn with_status(mut self, status: CrewStatus) -> Self {
        self.status = Some(status);
        self
    }
}
