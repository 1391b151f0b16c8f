//! Mission store

use serde::{Deserialize, Serialize};

use crate::components::{CrewId, Mission, MissionId, Priority, ShipId};

/// Missions in creation order. Never shrinks; finished missions stay as history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MissionStore {
    missions: Vec<Mission>,
    next_id: u32,
}

impl MissionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(
        &mut self,
        name: String,
        priority: Priority,
        ship: ShipId,
        crew: Vec<CrewId>,
        start_time: f64,
    ) -> MissionId {
        self.next_id += 1;
        let id = MissionId(self.next_id);
        self.missions
            .push(Mission::new(id, name, priority, ship, crew, start_time));
        id
    }

    pub fn get(&self, id: MissionId) -> Option<&Mission> {
        self.missions.iter().find(|m| m.id() == id)
    }

    pub(crate) fn get_mut(&mut self, id: MissionId) -> Option<&mut Mission> {
        self.missions.iter_mut().find(|m| m.id() == id)
    }

    pub fn list(&self) -> &[Mission] {
        &self.missions
    }

    /// Missions still in progress
    pub fn active(&self) -> impl Iterator<Item = &Mission> {
        self.missions.iter().filter(|m| m.is_active())
    }

    pub fn active_ids(&self) -> Vec<MissionId> {
        self.active().map(|m| m.id()).collect()
    }

    /// The in-progress mission flying `ship`, if any
    pub fn active_for_ship(&self, ship: ShipId) -> Option<&Mission> {
        self.active().find(|m| m.assigned_ship() == ship)
    }

    /// The in-progress mission `member` is assigned to, if any
    pub fn active_for_crew(&self, member: CrewId) -> Option<&Mission> {
        self.active().find(|m| m.assigned_crew().contains(&member))
    }

    pub fn len(&self) -> usize {
        self.missions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.missions.is_empty()
    }
}
