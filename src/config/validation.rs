//! Configuration validation.
//!
//! Validates configuration at load time to catch common errors early.

use super::Config;
use thiserror::Error;

/// Validation errors for configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("teleport.follower_radius.{axis} must be finite and non-negative, got {value}")]
    InvalidRadius { axis: char, value: f64 },
    #[error("teleport.max_chain_length must be at least 1")]
    ZeroChainLength,
    #[error("scheduler.tick_millis must be greater than 0")]
    ZeroTick,
    #[error("messages.{0} does not name a known message")]
    UnknownMessage(String),
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let radius = &config.teleport.follower_radius;
    for (axis, value) in [('x', radius.x), ('y', radius.y), ('z', radius.z)] {
        if !value.is_finite() || value < 0.0 {
            errors.push(ValidationError::InvalidRadius { axis, value });
        }
    }

    if config.teleport.max_chain_length == 0 {
        errors.push(ValidationError::ZeroChainLength);
    }

    if config.scheduler.tick_millis == 0 {
        errors.push(ValidationError::ZeroTick);
    }

    for key in config.messages.unknown_keys() {
        errors.push(ValidationError::UnknownMessage(key));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Radius;

    #[test]
    fn defaults_are_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn collects_every_error() {
        let mut config = Config::default();
        config.teleport.follower_radius = Radius::new(-1.0, f64::NAN, 4.0);
        config.teleport.max_chain_length = 0;
        config.scheduler.tick_millis = 0;

        let errors = validate(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ValidationError::ZeroChainLength));
        assert!(errors.contains(&ValidationError::ZeroTick));
        assert!(matches!(
            errors[0],
            ValidationError::InvalidRadius { axis: 'x', .. }
        ));
    }

    #[test]
    fn unknown_message_override() {
        let mut config = Config::default();
        config
            .messages
            .sections
            .entry("general".to_string())
            .or_default()
            .insert("no-such-thing".to_string(), "x".to_string());

        let errors = validate(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::UnknownMessage(
                "general.no-such-thing".to_string()
            )]
        );
    }
}
