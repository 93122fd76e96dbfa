//! Portal gun capability types.
//!
//! One type per permission node the plugin checks.
//!
//! The node strings are this plugin's own naming, rooted at `portalguns`.
//! Hosts grant them literally or through any wildcard prefix
//! (`portalguns.*`, `portalguns.gun.*`).

use super::tokens::Capability;
use crate::world::EntityId;

/// Macro to define capability types with minimal boilerplate.
///
/// # Variants
///
/// - `global($name, $node)` - Plugin-wide capability (Scope = ())
/// - `targeted($name, $node)` - Capability over another entity (Scope = EntityId)
macro_rules! define_capability {
    (global $name:ident, $node:literal, $doc:literal) => {
        #[doc = $doc]
        ///
        /// Scope: Unit (global).
        pub struct $name;

        impl Capability for $name {
            type Scope = ();
            const NODE: &'static str = $node;
        }
    };

    (targeted $name:ident, $node:literal, $doc:literal) => {
        #[doc = $doc]
        ///
        /// Scope: The target entity.
        pub struct $name;

        impl Capability for $name {
            type Scope = EntityId;
            const NODE: &'static str = $node;
        }
    };
}

// ============================================================================
// Gun Capabilities
// ============================================================================

define_capability!(global UseGunCap, "portalguns.gun.use",
    "Capability to fire a portal gun and create portals.");

define_capability!(global CraftGunCap, "portalguns.gun.craft",
    "Capability to craft a new portal gun or a copy of a previous one.");

define_capability!(global GlobalGunCap, "portalguns.gun.global",
    "Capability to create global guns whose portals anyone can use.");

// ============================================================================
// Control Panel Capabilities
// ============================================================================

define_capability!(global ControlPanelCap, "portalguns.controlpanel",
    "Capability to open the control panel by shift clicking a gun.");

define_capability!(global PersistentPortalCap, "portalguns.portal.persistent",
    "Capability to mark a portal persistent so cleanup keeps it.");

define_capability!(targeted SharePortalCap, "portalguns.portal.share",
    "Capability to share portals with another player.");

// ============================================================================
// Command Capabilities
// ============================================================================

define_capability!(targeted GiveGunCap, "portalguns.cmd.give",
    "Capability to give a portal gun to a player.");

define_capability!(global ReloadCap, "portalguns.cmd.reload",
    "Capability to reload configuration and messages.");
