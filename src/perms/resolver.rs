//! Permission resolution logic.
//!
//! Resolution order for `a.b.c`:
//! 1. `a.b.c` (exact)
//! 2. `a.*`
//! 3. `a.b.*`
//! 4. `a.b.c.*`
//!
//! The first granted candidate wins. A `*` inside the requested node is an
//! ordinary segment, and granted wildcards only ever match as a full prefix
//! (`a.*.c` never covers `a.b.c`).

use super::PermissionGranter;
use std::fmt;

/// The candidate that satisfied a check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Grant {
    /// The normalized node itself was granted.
    Exact(String),
    /// A wildcard prefix of the node was granted.
    Wildcard(String),
}

impl Grant {
    /// The literal node string the granter accepted.
    pub fn node(&self) -> &str {
        match self {
            Grant::Exact(node) | Grant::Wildcard(node) => node,
        }
    }
}

impl fmt::Display for Grant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.node())
    }
}

/// Lowercase and trim a permission node.
pub fn normalize(permission: &str) -> String {
    permission.trim().to_lowercase()
}

/// Dot-separated segments, with trailing empty segments dropped.
///
/// A node without any dot is a single segment, even when empty.
fn segments(node: &str) -> impl Iterator<Item = &str> {
    let body = if node.contains('.') {
        node.trim_end_matches('.')
    } else {
        node
    };
    let skip_all = body.is_empty() && !node.is_empty();
    body.split('.').filter(move |_| !skip_all)
}

/// Find the candidate granting `permission`, if any.
pub fn resolve<G: PermissionGranter + ?Sized>(granter: &G, permission: &str) -> Option<Grant> {
    let node = normalize(permission);
    if granter.is_granted(&node) {
        return Some(Grant::Exact(node));
    }

    let mut prefix = String::with_capacity(node.len() + 2);
    for segment in segments(&node) {
        prefix.push_str(segment);
        prefix.push_str(".*");
        if granter.is_granted(&prefix) {
            return Some(Grant::Wildcard(prefix));
        }
        prefix.pop();
    }
    None
}

/// Check whether `granter` holds `permission` or any wildcard prefix of it.
#[inline]
pub fn has_permission<G: PermissionGranter + ?Sized>(granter: &G, permission: &str) -> bool {
    resolve(granter, permission).is_some()
}
