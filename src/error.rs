//! Unified error handling for portalguns.
//!
//! Only host failures surface as errors. Malformed permission tokens,
//! despawned entities and cyclic vehicle graphs degrade to partial
//! success and are reported through logging instead.

use crate::config::ValidationError;
use thiserror::Error;

// ============================================================================
// Scheduler Errors
// ============================================================================

/// Errors returned when a delayed task cannot be accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulerError {
    #[error("scheduler is shut down")]
    Shutdown,

    #[error("no async runtime available to run delayed tasks")]
    NoRuntime,
}

impl SchedulerError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Shutdown => "scheduler_shutdown",
            Self::NoRuntime => "scheduler_no_runtime",
        }
    }
}

// ============================================================================
// Teleport Errors
// ============================================================================

/// Errors surfaced by [`Teleporter::teleport`](crate::teleport::Teleporter::teleport).
///
/// By the time this is returned the chain has already been relocated;
/// only the delayed relink (and the completion callback) was lost.
#[derive(Debug, Error)]
pub enum TeleportError {
    #[error("failed to schedule relink: {0}")]
    Schedule(#[from] SchedulerError),
}

// ============================================================================
// Config Errors
// ============================================================================

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {}", join_errors(.0))]
    Invalid(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheduler_error_codes() {
        assert_eq!(SchedulerError::Shutdown.error_code(), "scheduler_shutdown");
        assert_eq!(SchedulerError::NoRuntime.error_code(), "scheduler_no_runtime");
    }

    #[test]
    fn teleport_error_wraps_scheduler() {
        let err: TeleportError = SchedulerError::Shutdown.into();
        assert!(err.to_string().contains("shut down"));
    }

    #[test]
    fn invalid_config_lists_every_error() {
        let err = ConfigError::Invalid(vec![
            ValidationError::ZeroTick,
            ValidationError::ZeroChainLength,
        ]);
        let text = err.to_string();
        assert!(text.contains("tick_millis"));
        assert!(text.contains("max_chain_length"));
    }
}
