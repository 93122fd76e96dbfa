//! Chain teleport orchestration.

use super::Chain;
use crate::config::TeleportConfig;
use crate::error::TeleportError;
use crate::scheduler::{DelayedTaskScheduler, TaskHandle};
use crate::world::{EntityGraph, EntityId, Location};
use std::sync::Arc;
use tracing::{debug, info, trace, warn};

/// Teleports entities together with everything linked to them.
///
/// Relocation is best-effort: entities that despawn (or that the graph
/// refuses to move) are skipped and the rest of the chain still moves.
/// The only hard failure is a scheduler refusing the relink task.
pub struct Teleporter<G> {
    graph: Arc<G>,
    config: TeleportConfig,
}

impl<G> Teleporter<G>
where
    G: EntityGraph + Send + Sync + 'static,
{
    pub fn new(graph: Arc<G>, config: TeleportConfig) -> Self {
        Self { graph, config }
    }

    #[inline]
    pub fn graph(&self) -> &Arc<G> {
        &self.graph
    }

    #[inline]
    pub fn config(&self) -> &TeleportConfig {
        &self.config
    }

    /// Teleport `entity` and its whole riding chain to `destination`.
    ///
    /// Every member is moved before this returns. Followers leashed to a
    /// player in the chain are moved and re-leashed. Riding links are
    /// restored `relink_delay_ticks` later, after which `on_complete`
    /// receives the chain.
    ///
    /// Returns a handle that cancels the pending relink (and with it the
    /// callback).
    pub fn teleport<S, F>(
        &self,
        entity: EntityId,
        destination: &Location,
        scheduler: &S,
        on_complete: F,
    ) -> Result<TaskHandle, TeleportError>
    where
        S: DelayedTaskScheduler + ?Sized,
        F: FnOnce(Chain) + Send + 'static,
    {
        let chain = Chain::discover(&*self.graph, entity, self.config.max_chain_length);

        // Snapshot before anything moves: afterwards the followers are no
        // longer near anything.
        let followers = self.graph.nearby(entity, &self.config.follower_radius);

        let anchor = self.relocate_chain(&chain, destination);
        let dragged = match anchor {
            Some(anchor) => self.drag_followers(anchor, &followers, destination),
            None => 0,
        };

        info!(
            entity = %entity,
            chain_len = chain.len(),
            dragged,
            destination = %destination,
            "Teleported entity chain"
        );

        let graph = Arc::clone(&self.graph);
        let handle = scheduler
            .schedule(
                self.config.relink_delay_ticks,
                Box::new(move || {
                    relink(&*graph, &chain);
                    on_complete(chain);
                }),
            )
            .map_err(|e| {
                warn!(entity = %entity, error = %e, code = e.error_code(), "Relink could not be scheduled");
                e
            })?;
        Ok(handle)
    }

    /// Eject and move each member, root first.
    ///
    /// Returns the last player member, used as the drag anchor.
    fn relocate_chain(&self, chain: &Chain, destination: &Location) -> Option<EntityId> {
        let mut anchor = None;
        for member in chain.iter() {
            if !self.graph.is_valid(member) {
                debug!(entity = %member, "Skipping stale chain member");
                continue;
            }
            if self.graph.passenger(member).is_some() {
                self.graph.eject(member);
            }
            if self.graph.relocate(member, destination) {
                trace!(entity = %member, "Relocated chain member");
            } else {
                debug!(entity = %member, "Chain member could not be relocated");
            }
            if self.graph.is_player(member) {
                anchor = Some(member);
            }
        }
        anchor
    }

    /// Move and re-leash every snapshot entity leashed to `anchor`.
    ///
    /// `anchor` must already be at `destination`.
    fn drag_followers(&self, anchor: EntityId, followers: &[EntityId], destination: &Location) -> usize {
        let mut dragged = 0;
        for &follower in followers {
            if follower == anchor || !self.graph.is_valid(follower) {
                continue;
            }
            if !self.graph.is_leashable(follower)
                || self.graph.leash_holder(follower) != Some(anchor)
            {
                continue;
            }
            if !self.graph.relocate(follower, destination) {
                debug!(entity = %follower, holder = %anchor, "Leashed follower could not be relocated");
                continue;
            }
            self.graph.set_leash_holder(follower, anchor);
            trace!(entity = %follower, holder = %anchor, "Dragged leashed follower");
            dragged += 1;
        }
        dragged
    }
}

/// Remount each member on the one before it.
fn relink<G: EntityGraph + ?Sized>(graph: &G, chain: &Chain) {
    for (vehicle, passenger) in chain.links() {
        if !graph.is_valid(vehicle) || !graph.is_valid(passenger) {
            debug!(vehicle = %vehicle, passenger = %passenger, "Skipping relink of stale pair");
            continue;
        }
        if !graph.set_passenger(vehicle, passenger) {
            debug!(vehicle = %vehicle, passenger = %passenger, "Relink refused");
        }
    }
    trace!(len = chain.len(), "Chain relinked");
}
