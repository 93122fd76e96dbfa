//! In-memory entity graph.
//!
//! Models the parts of a game engine the teleporter depends on:
//! - Riding is symmetric: `a.passenger == b` iff `b.vehicle == a`.
//! - A passenger stands where its vehicle stands.
//! - An entity carrying a passenger cannot be relocated; it must be
//!   ejected first. Relocating a passenger dismounts it.
//! - Despawning breaks every riding and leash link to the entity.

use super::{EntityGraph, EntityId, Location, Radius};
use parking_lot::RwLock;
use std::collections::HashMap;

/// What kind of entity a record is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// A human player. Living, so it can be leashed.
    Player,
    /// A non-player living entity (horse, pig, villager).
    Creature,
    /// A non-living entity (boat, minecart, armour stand).
    Object,
}

impl EntityKind {
    #[inline]
    pub fn is_living(self) -> bool {
        matches!(self, EntityKind::Player | EntityKind::Creature)
    }
}

#[derive(Debug, Clone)]
struct Record {
    kind: EntityKind,
    location: Location,
    vehicle: Option<EntityId>,
    passenger: Option<EntityId>,
    leash_holder: Option<EntityId>,
}

/// Thread-safe in-memory [`EntityGraph`].
#[derive(Debug, Default)]
pub struct MemoryWorld {
    entities: RwLock<HashMap<EntityId, Record>>,
}

impl MemoryWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new entity and return its handle.
    pub fn spawn(&self, kind: EntityKind, location: Location) -> EntityId {
        let id = EntityId::new();
        self.entities.write().insert(
            id,
            Record {
                kind,
                location,
                vehicle: None,
                passenger: None,
                leash_holder: None,
            },
        );
        id
    }

    /// Remove an entity, breaking every link to it.
    ///
    /// Returns `false` if the entity was not present.
    pub fn despawn(&self, entity: EntityId) -> bool {
        let mut entities = self.entities.write();
        let Some(record) = entities.remove(&entity) else {
            return false;
        };

        if let Some(vehicle) = record.vehicle
            && let Some(v) = entities.get_mut(&vehicle)
        {
            v.passenger = None;
        }
        if let Some(passenger) = record.passenger
            && let Some(p) = entities.get_mut(&passenger)
        {
            p.vehicle = None;
        }
        for other in entities.values_mut() {
            if other.leash_holder == Some(entity) {
                other.leash_holder = None;
            }
        }
        true
    }

    pub fn kind(&self, entity: EntityId) -> Option<EntityKind> {
        self.entities.read().get(&entity).map(|r| r.kind)
    }

    /// Detach the entity's leash.
    pub fn unleash(&self, entity: EntityId) -> bool {
        match self.entities.write().get_mut(&entity) {
            Some(r) => r.leash_holder.take().is_some(),
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.entities.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.read().is_empty()
    }
}

/// Clear both ends of the riding link below `vehicle`.
fn unlink_passenger(entities: &mut HashMap<EntityId, Record>, vehicle: EntityId) -> bool {
    let Some(passenger) = entities.get_mut(&vehicle).and_then(|v| v.passenger.take()) else {
        return false;
    };
    if let Some(p) = entities.get_mut(&passenger) {
        p.vehicle = None;
    }
    true
}

impl EntityGraph for MemoryWorld {
    fn is_valid(&self, entity: EntityId) -> bool {
        self.entities.read().contains_key(&entity)
    }

    fn vehicle(&self, entity: EntityId) -> Option<EntityId> {
        self.entities.read().get(&entity).and_then(|r| r.vehicle)
    }

    fn passenger(&self, entity: EntityId) -> Option<EntityId> {
        self.entities.read().get(&entity).and_then(|r| r.passenger)
    }

    fn set_passenger(&self, vehicle: EntityId, passenger: EntityId) -> bool {
        if vehicle == passenger {
            return false;
        }
        let mut entities = self.entities.write();
        let Some(location) = entities.get(&vehicle).map(|v| v.location.clone()) else {
            return false;
        };
        let Some(old_vehicle) = entities.get(&passenger).map(|p| p.vehicle) else {
            return false;
        };

        unlink_passenger(&mut entities, vehicle);
        if let Some(old) = old_vehicle {
            unlink_passenger(&mut entities, old);
        }

        if let Some(v) = entities.get_mut(&vehicle) {
            v.passenger = Some(passenger);
        }
        if let Some(p) = entities.get_mut(&passenger) {
            p.vehicle = Some(vehicle);
            p.location = location;
        }
        true
    }

    fn eject(&self, vehicle: EntityId) -> bool {
        unlink_passenger(&mut self.entities.write(), vehicle)
    }

    fn is_player(&self, entity: EntityId) -> bool {
        self.kind(entity) == Some(EntityKind::Player)
    }

    fn is_leashable(&self, entity: EntityId) -> bool {
        self.kind(entity).is_some_and(EntityKind::is_living)
    }

    fn leash_holder(&self, entity: EntityId) -> Option<EntityId> {
        self.entities.read().get(&entity).and_then(|r| r.leash_holder)
    }

    fn set_leash_holder(&self, entity: EntityId, holder: EntityId) -> bool {
        if entity == holder {
            return false;
        }
        let mut entities = self.entities.write();
        if !entities.contains_key(&holder) {
            return false;
        }
        match entities.get_mut(&entity) {
            Some(r) if r.kind.is_living() => {
                r.leash_holder = Some(holder);
                true
            }
            _ => false,
        }
    }

    fn location(&self, entity: EntityId) -> Option<Location> {
        self.entities.read().get(&entity).map(|r| r.location.clone())
    }

    fn nearby(&self, entity: EntityId, radius: &Radius) -> Vec<EntityId> {
        let entities = self.entities.read();
        let Some(center) = entities.get(&entity).map(|r| &r.location) else {
            return Vec::new();
        };
        entities
            .iter()
            .filter(|(id, r)| **id != entity && center.is_within(&r.location, radius))
            .map(|(id, _)| *id)
            .collect()
    }

    fn relocate(&self, entity: EntityId, destination: &Location) -> bool {
        let mut entities = self.entities.write();
        let (vehicle, has_passenger) = match entities.get(&entity) {
            Some(r) => (r.vehicle, r.passenger.is_some()),
            None => return false,
        };
        if has_passenger {
            return false;
        }
        if let Some(vehicle) = vehicle {
            unlink_passenger(&mut entities, vehicle);
        }
        if let Some(r) = entities.get_mut(&entity) {
            r.location = destination.clone();
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawn_origin() -> Location {
        Location::new("world", 0.0, 64.0, 0.0)
    }

    #[test]
    fn riding_is_symmetric() {
        let world = MemoryWorld::new();
        let horse = world.spawn(EntityKind::Creature, spawn_origin());
        let rider = world.spawn(EntityKind::Player, Location::new("world", 3.0, 64.0, 0.0));

        assert!(world.set_passenger(horse, rider));
        assert_eq!(world.passenger(horse), Some(rider));
        assert_eq!(world.vehicle(rider), Some(horse));
        assert_eq!(world.location(rider), world.location(horse));

        assert!(world.eject(horse));
        assert_eq!(world.passenger(horse), None);
        assert_eq!(world.vehicle(rider), None);
        assert!(!world.eject(horse));
    }

    #[test]
    fn remount_moves_passenger_off_old_vehicle() {
        let world = MemoryWorld::new();
        let boat = world.spawn(EntityKind::Object, spawn_origin());
        let cart = world.spawn(EntityKind::Object, spawn_origin());
        let pig = world.spawn(EntityKind::Creature, spawn_origin());

        world.set_passenger(boat, pig);
        world.set_passenger(cart, pig);

        assert_eq!(world.passenger(boat), None);
        assert_eq!(world.passenger(cart), Some(pig));
        assert_eq!(world.vehicle(pig), Some(cart));
    }

    #[test]
    fn cannot_ride_self() {
        let world = MemoryWorld::new();
        let e = world.spawn(EntityKind::Creature, spawn_origin());
        assert!(!world.set_passenger(e, e));
    }

    #[test]
    fn relocate_refuses_loaded_vehicle() {
        let world = MemoryWorld::new();
        let horse = world.spawn(EntityKind::Creature, spawn_origin());
        let rider = world.spawn(EntityKind::Player, spawn_origin());
        world.set_passenger(horse, rider);

        let dest = Location::new("world", 100.0, 70.0, 100.0);
        assert!(!world.relocate(horse, &dest));
        assert_eq!(world.location(horse), Some(spawn_origin()));

        // Relocating the rider dismounts it.
        assert!(world.relocate(rider, &dest));
        assert_eq!(world.vehicle(rider), None);
        assert_eq!(world.passenger(horse), None);
        assert!(world.relocate(horse, &dest));
    }

    #[test]
    fn leash_requires_living_entity() {
        let world = MemoryWorld::new();
        let player = world.spawn(EntityKind::Player, spawn_origin());
        let dog = world.spawn(EntityKind::Creature, spawn_origin());
        let boat = world.spawn(EntityKind::Object, spawn_origin());

        assert!(world.set_leash_holder(dog, player));
        assert_eq!(world.leash_holder(dog), Some(player));
        assert!(!world.set_leash_holder(boat, player));
        assert!(!world.is_leashable(boat));

        assert!(world.unleash(dog));
        assert_eq!(world.leash_holder(dog), None);
    }

    #[test]
    fn nearby_excludes_self_and_far_entities() {
        let world = MemoryWorld::new();
        let me = world.spawn(EntityKind::Player, spawn_origin());
        let close = world.spawn(EntityKind::Creature, Location::new("world", 5.0, 64.0, 5.0));
        let _far = world.spawn(EntityKind::Creature, Location::new("world", 50.0, 64.0, 0.0));
        let _other_world =
            world.spawn(EntityKind::Creature, Location::new("world_nether", 0.0, 64.0, 0.0));

        let found = world.nearby(me, &Radius::new(20.0, 10.0, 20.0));
        assert_eq!(found, vec![close]);
    }

    #[test]
    fn despawn_breaks_links() {
        let world = MemoryWorld::new();
        let player = world.spawn(EntityKind::Player, spawn_origin());
        let horse = world.spawn(EntityKind::Creature, spawn_origin());
        let dog = world.spawn(EntityKind::Creature, spawn_origin());
        world.set_passenger(horse, player);
        world.set_leash_holder(dog, player);

        assert!(world.despawn(player));
        assert!(!world.is_valid(player));
        assert_eq!(world.passenger(horse), None);
        assert_eq!(world.leash_holder(dog), None);
        assert!(!world.despawn(player));
        assert_eq!(world.len(), 2);
    }

    #[test]
    fn stale_handles_are_inert() {
        let world = MemoryWorld::new();
        let ghost = EntityId::new();
        assert!(!world.is_valid(ghost));
        assert!(!world.relocate(ghost, &spawn_origin()));
        assert!(!world.set_passenger(ghost, ghost));
        assert!(world.nearby(ghost, &Radius::new(1.0, 1.0, 1.0)).is_empty());
        assert_eq!(world.location(ghost), None);
    }
}
