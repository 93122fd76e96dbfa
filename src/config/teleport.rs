//! Chain teleport configuration.

use super::defaults::{
    default_follower_radius, default_max_chain_length, default_relink_delay_ticks,
};
use crate::world::Radius;
use serde::Deserialize;

/// Chain teleport configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TeleportConfig {
    /// Ticks to wait before passengers are remounted (default: 5).
    #[serde(default = "default_relink_delay_ticks")]
    pub relink_delay_ticks: u32,
    /// Maximum number of entities in one chain (default: 64).
    /// Walking stops once this many have been collected.
    #[serde(default = "default_max_chain_length")]
    pub max_chain_length: usize,
    /// Search box for leashed followers (default: 20 x 10 x 20).
    #[serde(default = "default_follower_radius")]
    pub follower_radius: Radius,
}

impl Default for TeleportConfig {
    fn default() -> Self {
        Self {
            relink_delay_ticks: default_relink_delay_ticks(),
            max_chain_length: default_max_chain_length(),
            follower_radius: default_follower_radius(),
        }
    }
}
