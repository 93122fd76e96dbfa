//! portalguns - portal gun core
//!
//! Host-independent logic for a portal gun game mode:
//! - [`perms`]: hierarchical dotted-permission checks with wildcard prefixes
//! - [`caps`]: capability tokens minted from those checks
//! - [`teleport`]: moving a whole vehicle/passenger chain, leashed
//!   followers included, and remounting it a few ticks later
//!
//! The game engine is reached only through [`world::EntityGraph`] and
//! [`scheduler::DelayedTaskScheduler`].

pub mod caps;
pub mod config;
pub mod error;
pub mod perms;
pub mod scheduler;
pub mod teleport;
pub mod world;

pub use config::Config;
pub use error::{ConfigError, SchedulerError, TeleportError};
pub use perms::{PermissionGranter, has_permission};
pub use teleport::{Chain, Teleporter};

/// Player-facing message catalog.
pub use portalguns_text as text;
