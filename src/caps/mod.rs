//! Capability tokens for portal gun actions.
//!
//! Instead of scattered `has_permission("portalguns....")` calls, code that
//! performs a privileged action takes a `Cap<T>` token, which only the
//! [`PermissionAuthority`](authority::PermissionAuthority) can mint.
//!
//! 1. **[`Cap<T>`](tokens::Cap)** - An unforgeable capability token.
//! 2. **[`Capability`](tokens::Capability)** - Trait implemented by capability
//!    types (e.g., `UseGunCap`, `GiveGunCap`), naming the permission node.
//! 3. **[`PermissionAuthority`](authority::PermissionAuthority)** - The mint.
//!    Resolves nodes hierarchically and logs every decision.
//!
//! # Usage
//!
//! ```ignore
//! let authority = PermissionAuthority::new(&player_name, &player_grants);
//! let Some(cap) = authority.require::<GiveGunCap, _, _>(target, &messages, &player) else {
//!     return; // the player was already told why
//! };
//! guns.give(cap);
//! ```

mod authority;
mod nodes;
mod tokens;

pub use authority::PermissionAuthority;
pub use nodes::{
    ControlPanelCap, CraftGunCap, GiveGunCap, GlobalGunCap, PersistentPortalCap, ReloadCap,
    SharePortalCap, UseGunCap,
};
pub use tokens::{Cap, Capability};
