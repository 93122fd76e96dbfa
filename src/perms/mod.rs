//! Hierarchical permission checks.
//!
//! A permission is a dotted node such as `portalguns.gun.use`. A holder of
//! any broader wildcard (`portalguns.*`, `portalguns.gun.*`) is treated as
//! holding the node itself.

mod granter;
mod resolver;

pub use granter::{FnGranter, GrantSet, PermissionGranter, from_fn};
pub use resolver::{Grant, has_permission, normalize, resolve};
