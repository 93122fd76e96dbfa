//! Linked entity-chain teleportation.
//!
//! Moving one half of a riding or leash link leaves clients out of sync,
//! so a teleport moves the whole connected chain:
//! 1. Discover the chain (topmost vehicle down to the bottom passenger)
//! 2. Snapshot entities near the teleported one
//! 3. Eject and relocate every member, root first
//! 4. Drag along followers leashed to a player in the chain
//! 5. After a delay, remount every passenger on its old vehicle

mod chain;
mod teleporter;

pub use chain::Chain;
pub use teleporter::Teleporter;
