//! Crew store - owns every crew member

use hecs::{Entity, World};
use std::collections::HashMap;

use crate::components::{CrewId, CrewMember, CrewPatch, CrewStatus};
use crate::error::FleetError;

#[derive(Default)]
pub struct CrewStore {
    world: World,
    order: Vec<Entity>,
    lookup: HashMap<CrewId, Entity>,
    next_id: u32,
}

impl CrewStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an available crew member
    pub fn add(
        &mut self,
        name: impl Into<String>,
        rank: impl Into<String>,
        specialty: impl Into<String>,
    ) -> CrewId {
        self.next_id += 1;
        let id = CrewId(self.next_id);
        let entity = self
            .world
            .spawn((CrewMember::new(id, name, rank, specialty),));
        self.order.push(entity);
        self.lookup.insert(id, entity);
        id
    }

    pub fn get(&self, id: CrewId) -> Option<CrewMember> {
        let entity = *self.lookup.get(&id)?;
        self.world
            .get::<&CrewMember>(entity)
            .ok()
            .map(|member| (*member).clone())
    }

    pub fn contains(&self, id: CrewId) -> bool {
        self.lookup.contains_key(&id)
    }

    pub fn list(&self) -> Vec<CrewMember> {
        self.order
            .iter()
            .filter_map(|&entity| {
                self.world
                    .get::<&CrewMember>(entity)
                    .ok()
                    .map(|m| (*m).clone())
            })
            .collect()
    }

    pub fn with_status(&self, status: CrewStatus) -> Vec<CrewMember> {
        self.list()
            .into_iter()
            .filter(|member| member.status == status)
            .collect()
    }

    pub fn count_with_status(&self, status: CrewStatus) -> usize {
        self.world
            .query::<&CrewMember>()
            .iter()
            .filter(|(_, member)| member.status == status)
            .count()
    }

    /// Unconditional status write. Callers check legality first.
    pub fn update_status(&mut self, id: CrewId, status: CrewStatus) -> Result<(), FleetError> {
        self.member_mut(id)?.status = status;
        Ok(())
    }

    pub fn mutate(&mut self, id: CrewId, patch: &CrewPatch) -> Result<CrewMember, FleetError> {
        let member = self.member_mut(id)?;
        member.apply(patch);
        Ok(member.clone())
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn member_mut(&mut self, id: CrewId) -> Result<&mut CrewMember, FleetError> {
        let entity = *self
            .lookup
            .get(&id)
            .ok_or(FleetError::crew_not_found(id))?;
        self.world
            .query_one_mut::<&mut CrewMember>(entity)
            .map_err(|_| FleetError::crew_not_found(id))
    }
}
