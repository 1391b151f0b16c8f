//! Fleet store - owns every ship for the life of the process

use hecs::{Entity, World};
use std::collections::HashMap;

use crate::components::{Ship, ShipId, ShipPatch, ShipStatus};
use crate::error::FleetError;

/// Ships live as entities in their own ECS world. `order` keeps insertion
/// order for listings, `lookup` maps public ids to entities.
#[derive(Default)]
pub struct FleetStore {
    world: World,
    order: Vec<Entity>,
    lookup: HashMap<ShipId, Entity>,
    next_id: u32,
}

impl FleetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a docked ship. Gauges are clamped into `0..=100`.
    pub fn add(&mut self, name: impl Into<String>, fuel_level: i32, condition: i32) -> ShipId {
        self.next_id += 1;
        let id = ShipId(self.next_id);
        let entity = self.world.spawn((Ship::new(id, name, fuel_level, condition),));
        self.order.push(entity);
        self.lookup.insert(id, entity);
        id
    }

    pub fn get(&self, id: ShipId) -> Option<Ship> {
        let entity = *self.lookup.get(&id)?;
        self.world.get::<&Ship>(entity).ok().map(|ship| (*ship).clone())
    }

    pub fn contains(&self, id: ShipId) -> bool {
        self.lookup.contains_key(&id)
    }

    /// Snapshot of every ship in insertion order
    pub fn list(&self) -> Vec<Ship> {
        self.order
            .iter()
            .filter_map(|&entity| self.world.get::<&Ship>(entity).ok().map(|s| (*s).clone()))
            .collect()
    }

    /// Ids of ships currently in `status`, in insertion order
    pub fn ids_with_status(&self, status: ShipStatus) -> Vec<ShipId> {
        self.order
            .iter()
            .filter_map(|&entity| {
                self.world
                    .get::<&Ship>(entity)
                    .ok()
                    .filter(|ship| ship.status == status)
                    .map(|ship| ship.id)
            })
            .collect()
    }

    pub fn count_with_status(&self, status: ShipStatus) -> usize {
        self.world
            .query::<&Ship>()
            .iter()
            .filter(|(_, ship)| ship.status == status)
            .count()
    }

    /// Unconditional status write. Callers check legality first.
    pub fn update_status(&mut self, id: ShipId, status: ShipStatus) -> Result<(), FleetError> {
        self.ship_mut(id)?.status = status;
        Ok(())
    }

    /// Apply a partial update and return the resulting ship
    pub fn mutate(&mut self, id: ShipId, patch: &ShipPatch) -> Result<Ship, FleetError> {
        let ship = self.ship_mut(id)?;
        ship.apply(patch);
        Ok(ship.clone())
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn ship_mut(&mut self, id: ShipId) -> Result<&mut Ship, FleetError> {
        let entity = *self
            .lookup
            .get(&id)
            .ok_or(FleetError::ship_not_found(id))?;
        self.world
            .query_one_mut::<&mut Ship>(entity)
            .map_err(|_| FleetError::ship_not_found(id))
    }
}
