//! Sources of literal permission grants.

use std::collections::{BTreeSet, HashSet};

/// Answers whether one literal permission string is granted.
///
/// Implementations do no wildcard expansion of their own; that is the
/// resolver's job. They are expected to be cheap (typically a set lookup).
pub trait PermissionGranter {
    fn is_granted(&self, permission: &str) -> bool;
}

impl<T: PermissionGranter + ?Sized> PermissionGranter for &T {
    #[inline]
    fn is_granted(&self, permission: &str) -> bool {
        (**self).is_granted(permission)
    }
}

impl PermissionGranter for HashSet<String> {
    #[inline]
    fn is_granted(&self, permission: &str) -> bool {
        self.contains(permission)
    }
}

impl PermissionGranter for BTreeSet<String> {
    #[inline]
    fn is_granted(&self, permission: &str) -> bool {
        self.contains(permission)
    }
}

/// A set of granted nodes, stored lowercase and trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrantSet {
    nodes: HashSet<String>,
}

impl GrantSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grant a node. Returns `false` if it was already granted.
    pub fn grant(&mut self, node: &str) -> bool {
        self.nodes.insert(node.trim().to_lowercase())
    }

    /// Revoke a node. Returns `false` if it was not granted.
    pub fn revoke(&mut self, node: &str) -> bool {
        self.nodes.remove(&node.trim().to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(String::as_str)
    }
}

impl PermissionGranter for GrantSet {
    #[inline]
    fn is_granted(&self, permission: &str) -> bool {
        self.nodes.contains(permission)
    }
}

impl<S: AsRef<str>> FromIterator<S> for GrantSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = GrantSet::new();
        for node in iter {
            set.grant(node.as_ref());
        }
        set
    }
}

/// Adapts a closure into a [`PermissionGranter`].
#[derive(Clone, Copy)]
pub struct FnGranter<F>(F);

/// Wrap `f` so it can be used as a granter.
pub fn from_fn<F: Fn(&str) -> bool>(f: F) -> FnGranter<F> {
    FnGranter(f)
}

impl<F: Fn(&str) -> bool> PermissionGranter for FnGranter<F> {
    #[inline]
    fn is_granted(&self, permission: &str) -> bool {
        (self.0)(permission)
    }
}
