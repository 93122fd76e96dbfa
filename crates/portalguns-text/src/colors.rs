//! Legacy chat colour-code handling.
//!
//! Configuration files write colours with the alternate `&` marker
//! (`&c`, `&l`, ...). Clients only understand the section sign (`§`)
//! form, so templates are translated before they are sent.
//!
//! # Codes
//! - `0`-`9`, `a`-`f`: Colours
//! - `k`: Obfuscated
//! - `l`: Bold
//! - `m`: Strikethrough
//! - `n`: Underline
//! - `o`: Italic
//! - `r`: Reset

use std::borrow::Cow;

/// Marker used by clients for formatting codes.
pub const SECTION_SIGN: char = '\u{00A7}';

/// Marker used in configuration files.
pub const ALT_COLOR_CHAR: char = '&';

/// Returns true if `c` is a valid code following a colour marker.
#[inline]
pub fn is_color_code(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), '0'..='9' | 'a'..='f' | 'k'..='o' | 'r')
}

/// Extension trait for strings that may carry colour codes.
pub trait ColoredStringExt<'a> {
    /// Check if the string contains any `§` formatting sequence.
    fn is_colored(&self) -> bool;

    /// Translate `&x` sequences to `§x` for every valid code `x`.
    ///
    /// Codes are lowercased. An `&` not followed by a valid code is kept
    /// as-is.
    fn colorize(self) -> Cow<'a, str>;

    /// Remove every `§x` sequence.
    ///
    /// Returns `Cow::Borrowed` if nothing was stripped.
    fn strip_colors(self) -> Cow<'a, str>;
}

impl<'a> ColoredStringExt<'a> for &'a str {
    fn is_colored(&self) -> bool {
        let mut chars = self.chars().peekable();
        while let Some(c) = chars.next() {
            if c == SECTION_SIGN && chars.peek().is_some_and(|n| is_color_code(*n)) {
                return true;
            }
        }
        false
    }

    fn colorize(self) -> Cow<'a, str> {
        if !self.contains(ALT_COLOR_CHAR) {
            return Cow::Borrowed(self);
        }

        let mut result = String::with_capacity(self.len() + 4);
        let mut chars = self.chars().peekable();
        while let Some(c) = chars.next() {
            match chars.peek() {
                Some(&next) if c == ALT_COLOR_CHAR && is_color_code(next) => {
                    result.push(SECTION_SIGN);
                    result.push(next.to_ascii_lowercase());
                    chars.next();
                }
                _ => result.push(c),
            }
        }
        Cow::Owned(result)
    }

    fn strip_colors(self) -> Cow<'a, str> {
        if !self.is_colored() {
            return Cow::Borrowed(self);
        }

        let mut result = String::with_capacity(self.len());
        let mut chars = self.chars().peekable();
        while let Some(c) = chars.next() {
            if c == SECTION_SIGN && chars.peek().is_some_and(|n| is_color_code(*n)) {
                chars.next();
                continue;
            }
            result.push(c);
        }
        Cow::Owned(result)
    }
}

impl ColoredStringExt<'static> for String {
    fn is_colored(&self) -> bool {
        self.as_str().is_colored()
    }

    fn colorize(self) -> Cow<'static, str> {
        match self.as_str().colorize() {
            Cow::Borrowed(_) => Cow::Owned(self),
            Cow::Owned(s) => Cow::Owned(s),
        }
    }

    fn strip_colors(self) -> Cow<'static, str> {
        match self.as_str().strip_colors() {
            Cow::Borrowed(_) => Cow::Owned(self),
            Cow::Owned(s) => Cow::Owned(s),
        }
    }
}
