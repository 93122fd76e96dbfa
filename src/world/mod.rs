//! The world as the core sees it.
//!
//! The core never owns entity storage. Hosts expose their entity model
//! through [`EntityGraph`]; [`MemoryWorld`] is a self-contained graph for
//! simulations and tests.

mod entity;
mod geometry;
mod graph;
mod memory;

pub use entity::{EntityId, Location, Radius};
pub use geometry::{BlockFace, BlockPos, center_between};
pub use graph::EntityGraph;
pub use memory::{EntityKind, MemoryWorld};
