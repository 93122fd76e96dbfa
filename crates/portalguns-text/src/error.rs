//! Error types for message catalog lookups.

use thiserror::Error;

/// Errors raised when resolving catalog keys from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextError {
    /// The key was not of the form `category.name`.
    #[error("malformed message key: {0:?} (expected category.name)")]
    MalformedKey(String),

    /// No category with this name exists.
    #[error("unknown message category: {0}")]
    UnknownCategory(String),

    /// The category exists but has no entry with this name.
    #[error("unknown message {category}.{name}")]
    UnknownMessage {
        /// Category that was searched.
        category: &'static str,
        /// Name that was not found.
        name: String,
    },
}
