//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: The root [`Config`] and file loading
//! - [`teleport`]: Chain teleport tuning (TeleportConfig)
//! - [`scheduler`]: Host tick length (SchedulerConfig)
//! - [`messages`]: Message template overrides (MessagesConfig)
//! - [`validation`]: Startup validation of loaded values

mod defaults;
mod messages;
mod scheduler;
mod teleport;
mod types;
mod validation;

pub use messages::MessagesConfig;
pub use scheduler::SchedulerConfig;
pub use teleport::TeleportConfig;
pub use types::Config;
pub use validation::{ValidationError, validate};
