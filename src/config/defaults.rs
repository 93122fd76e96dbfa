//! Default value functions for configuration.
//!
//! Separated into its own module for clarity and reuse.

use crate::world::Radius;

// =============================================================================
// Teleport Defaults
// =============================================================================

/// Host ticks between relocation and relink.
pub fn default_relink_delay_ticks() -> u32 {
    5
}

/// Longest vehicle/passenger chain walked before the guard trips.
pub fn default_max_chain_length() -> usize {
    64
}

/// Box around the teleported entity searched for leashed followers.
pub fn default_follower_radius() -> Radius {
    Radius::new(20.0, 10.0, 20.0)
}

// =============================================================================
// Scheduler Defaults
// =============================================================================

/// One host tick (20 ticks per second).
pub fn default_tick_millis() -> u64 {
    50
}

// =============================================================================
// Message Defaults
// =============================================================================

pub fn default_message_prefix() -> String {
    "&8[&5PortalGuns&8] ".to_string()
}
