//! Core configuration types and loading.

use super::messages::MessagesConfig;
use super::scheduler::SchedulerConfig;
use super::teleport::TeleportConfig;
use super::validation::validate;
use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;

/// Plugin core configuration.
///
/// Every section is optional; a missing section uses its defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    /// Chain teleport tuning.
    #[serde(default)]
    pub teleport: TeleportConfig,
    /// Host scheduler timing.
    #[serde(default)]
    pub scheduler: SchedulerConfig,
    /// Message template overrides.
    #[serde(default)]
    pub messages: MessagesConfig,
}

impl Config {
    /// Load and validate configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        validate(&config).map_err(ConfigError::Invalid)?;
        Ok(config)
    }
}
