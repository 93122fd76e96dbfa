//! Shared fixtures for integration tests.
//!
//! Builds an in-memory world with a tick scheduler and a teleporter over
//! it, and installs a test-writer tracing subscriber once per binary.

#![allow(dead_code)]

use parking_lot::Mutex;
use portalguns::config::TeleportConfig;
use portalguns::scheduler::TickScheduler;
use portalguns::teleport::{Chain, Teleporter};
use portalguns::world::{EntityGraph, EntityId, EntityKind, Location, MemoryWorld};
use std::sync::{Arc, Once};
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Route `tracing` output through the test harness (`RUST_LOG` to enable).
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn origin() -> Location {
    Location::new("world", 0.0, 64.0, 0.0)
}

pub fn destination() -> Location {
    Location::new("world_nether", -120.5, 70.0, 33.25).with_facing(180.0, 10.0)
}

/// A world, a scheduler and a teleporter over them.
pub struct Harness {
    pub world: Arc<MemoryWorld>,
    pub scheduler: TickScheduler,
    pub teleporter: Teleporter<MemoryWorld>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(TeleportConfig::default())
    }

    pub fn with_config(config: TeleportConfig) -> Self {
        init_tracing();
        let world = Arc::new(MemoryWorld::new());
        Self {
            teleporter: Teleporter::new(world.clone(), config),
            world,
            scheduler: TickScheduler::new(),
        }
    }

    pub fn spawn(&self, kind: EntityKind) -> EntityId {
        self.world.spawn(kind, origin())
    }

    /// Spawn `kinds` as a riding stack, first element at the bottom.
    pub fn stack(&self, kinds: &[EntityKind]) -> Vec<EntityId> {
        let ids: Vec<_> = kinds.iter().map(|k| self.spawn(*k)).collect();
        for pair in ids.windows(2) {
            assert!(self.world.set_passenger(pair[0], pair[1]));
        }
        ids
    }

    /// Teleport `entity` to [`destination`], capturing the completed chain.
    pub fn teleport(&self, entity: EntityId) -> Arc<Mutex<Option<Chain>>> {
        let slot = Arc::new(Mutex::new(None));
        let sink = slot.clone();
        self.teleporter
            .teleport(entity, &destination(), &self.scheduler, move |chain| {
                *sink.lock() = Some(chain);
            })
            .expect("relink should be scheduled");
        slot
    }

    /// Run every pending relink.
    pub fn settle(&self) {
        let delay = u64::from(self.teleporter.config().relink_delay_ticks.max(1));
        self.scheduler.advance(delay);
    }

    pub fn at_destination(&self, entity: EntityId) -> bool {
        self.world.location(entity) == Some(destination())
    }
}
