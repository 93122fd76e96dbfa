//! Vehicle/passenger chain discovery.

use crate::world::{EntityGraph, EntityId};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Entities linked by riding, outermost vehicle first.
///
/// `members[i + 1]` was riding `members[i]` when the chain was discovered.
/// Members are distinct.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chain {
    members: Vec<EntityId>,
}

impl Chain {
    /// Walk up from `entity` to the topmost vehicle, then down through
    /// passengers.
    ///
    /// Never collects more than `max_len` entities, and stops at the first
    /// entity seen twice, so malformed (cyclic) graphs still terminate.
    /// A stale `entity` yields an empty chain.
    pub fn discover<G: EntityGraph + ?Sized>(graph: &G, entity: EntityId, max_len: usize) -> Self {
        if !graph.is_valid(entity) || max_len == 0 {
            debug!(entity = %entity, "Chain discovery on stale entity");
            return Self::default();
        }

        let root = ascend(graph, entity, max_len);

        let mut members = vec![root];
        let mut seen = HashSet::from([root]);
        let mut current = root;
        while let Some(passenger) = graph.passenger(current) {
            if members.len() >= max_len {
                warn!(root = %root, max_len, "Chain length cap reached, truncating");
                break;
            }
            if !seen.insert(passenger) {
                warn!(root = %root, entity = %passenger, "Passenger cycle detected, truncating");
                break;
            }
            members.push(passenger);
            current = passenger;
        }

        debug!(entity = %entity, root = %root, len = members.len(), "Chain discovered");
        Self { members }
    }

    /// Build a chain from members already in root-first order.
    pub fn from_members(members: Vec<EntityId>) -> Self {
        Self { members }
    }

    /// The outermost vehicle.
    pub fn root(&self) -> Option<EntityId> {
        self.members.first().copied()
    }

    /// The bottommost passenger.
    pub fn last(&self) -> Option<EntityId> {
        self.members.last().copied()
    }

    pub fn members(&self) -> &[EntityId] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, entity: EntityId) -> bool {
        self.members.contains(&entity)
    }

    pub fn iter(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.members.iter().copied()
    }

    /// Adjacent `(vehicle, passenger)` pairs, root first.
    pub fn links(&self) -> impl Iterator<Item = (EntityId, EntityId)> + '_ {
        self.members.windows(2).map(|w| (w[0], w[1]))
    }

    pub fn into_vec(self) -> Vec<EntityId> {
        self.members
    }
}

impl IntoIterator for Chain {
    type Item = EntityId;
    type IntoIter = std::vec::IntoIter<EntityId>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

/// Follow vehicle links to the top, bounded by `max_len` and cycles.
fn ascend<G: EntityGraph + ?Sized>(graph: &G, entity: EntityId, max_len: usize) -> EntityId {
    let mut visited = HashSet::from([entity]);
    let mut current = entity;
    while let Some(vehicle) = graph.vehicle(current) {
        if visited.len() >= max_len {
            warn!(entity = %entity, max_len, "Vehicle chain cap reached while ascending");
            break;
        }
        if !visited.insert(vehicle) {
            warn!(entity = %entity, vehicle = %vehicle, "Vehicle cycle detected while ascending");
            break;
        }
        current = vehicle;
    }
    current
}
