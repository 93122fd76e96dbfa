//! The entity graph capability.

use super::{EntityId, Location, Radius};

/// Read/write access to the host's entity model.
///
/// Every method takes `&self`: hosts are expected to use interior
/// mutability, because the same graph is touched again from a delayed
/// task after the teleport call has returned.
///
/// Handles may go stale at any time (the entity despawned). Queries on a
/// stale handle return `None`/`false`/empty, and mutations on a stale
/// handle return `false` without side effects.
pub trait EntityGraph {
    /// Whether the handle still refers to a live entity.
    fn is_valid(&self, entity: EntityId) -> bool;

    /// The entity this one is riding.
    fn vehicle(&self, entity: EntityId) -> Option<EntityId>;

    /// The entity riding this one.
    fn passenger(&self, entity: EntityId) -> Option<EntityId>;

    /// Make `passenger` ride `vehicle`.
    fn set_passenger(&self, vehicle: EntityId, passenger: EntityId) -> bool;

    /// Throw off whatever is riding `vehicle`.
    fn eject(&self, vehicle: EntityId) -> bool;

    /// Whether the entity is a human player.
    fn is_player(&self, entity: EntityId) -> bool;

    /// Whether the entity can be held on a leash.
    fn is_leashable(&self, entity: EntityId) -> bool;

    /// The entity holding this one's leash.
    fn leash_holder(&self, entity: EntityId) -> Option<EntityId>;

    /// Attach the entity's leash to `holder`.
    fn set_leash_holder(&self, entity: EntityId, holder: EntityId) -> bool;

    /// Current position.
    fn location(&self, entity: EntityId) -> Option<Location>;

    /// Live entities inside the box `radius` around `entity`, excluding
    /// `entity` itself.
    fn nearby(&self, entity: EntityId, radius: &Radius) -> Vec<EntityId>;

    /// Move the entity to `destination`.
    fn relocate(&self, entity: EntityId, destination: &Location) -> bool;
}
