//! # portalguns-text
//!
//! User-facing text for portalguns: a keyed message catalog with
//! configurable templates, `{placeholder}` substitution, and translation
//! of legacy `&` colour codes.
//!
//! ```rust
//! use portalguns_text::{Defaults, Msg, Param, Render};
//!
//! let line = Msg::InvalidUsage.render(
//!     &Defaults,
//!     Render::PLAIN,
//!     &[Param::new("usage", "/pg give")],
//! );
//! assert_eq!(line, "&cInvalid usage! &7/pg give");
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod catalog;
pub mod colors;
pub mod error;
pub mod params;

pub use self::catalog::{Category, Defaults, MessageSource, Msg, Recipient, Render};
pub use self::colors::{ColoredStringExt, ALT_COLOR_CHAR, SECTION_SIGN};
pub use self::error::TextError;
pub use self::params::{apply_params, Param};
