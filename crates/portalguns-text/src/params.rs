//! Placeholder substitution.
//!
//! Templates reference values as `{name}`. Substitution is a plain
//! ordered replace: each [`Param`] replaces every occurrence of its
//! placeholder. A value that itself contains the placeholder of a later
//! parameter is substituted again by that parameter.

use std::fmt;

/// A named value substituted into a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    placeholder: String,
    value: String,
}

impl Param {
    /// Create a parameter for `{key}`.
    pub fn new(key: &str, value: impl fmt::Display) -> Self {
        Self {
            placeholder: format!("{{{}}}", key),
            value: value.to_string(),
        }
    }

    /// The placeholder text, braces included.
    #[inline]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// The substituted value.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Apply every parameter to `message`, in order.
pub fn apply_params(mut message: String, params: &[Param]) -> String {
    for p in params {
        if message.contains(p.placeholder()) {
            message = message.replace(p.placeholder(), p.value());
        }
    }
    message
}
