//! Capability tokens and the trait naming their permission nodes.

use crate::perms::Grant;
use portalguns_text::Msg;
use std::fmt;
use std::marker::PhantomData;

/// Proof that a subject held `T::NODE` (or a wildcard covering it).
///
/// Only [`PermissionAuthority`](super::authority::PermissionAuthority) can
/// build one, and it cannot be cloned, so an action taking a `Cap<T>` runs
/// at most once per successful check. The token remembers which grant
/// satisfied the check, so audit logs can tell `portalguns.*` holders
/// apart from holders of the exact node.
///
/// ```ignore
/// let cap: Cap<GiveGunCap> = authority.request_give_cap(target)?;
/// assert_eq!(cap.scope(), &target);
/// guns.give(cap);
/// ```
pub struct Cap<T: Capability> {
    scope: T::Scope,
    grant: Grant,
    _marker: PhantomData<T>,
}

// No Clone, Copy or Default: a token must not outlive the check that minted it.

impl<T: Capability> Cap<T> {
    #[inline]
    pub(super) fn new(scope: T::Scope, grant: Grant) -> Self {
        Self {
            scope,
            grant,
            _marker: PhantomData,
        }
    }

    /// The entity (or `()`) this capability was granted for.
    #[inline]
    pub fn scope(&self) -> &T::Scope {
        &self.scope
    }

    #[inline]
    pub fn into_scope(self) -> T::Scope {
        self.scope
    }

    /// The node that was checked to mint this token.
    #[inline]
    pub fn node(&self) -> &'static str {
        T::NODE
    }

    /// The granted node that satisfied the check.
    #[inline]
    pub fn granted_by(&self) -> &Grant {
        &self.grant
    }

    /// True if the subject held the node itself rather than a wildcard.
    #[inline]
    pub fn is_exact(&self) -> bool {
        matches!(self.grant, Grant::Exact(_))
    }
}

impl<T: Capability> fmt::Debug for Cap<T>
where
    T::Scope: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cap")
            .field("node", &T::NODE)
            .field("granted_by", &self.grant)
            .field("scope", &self.scope)
            .finish()
    }
}

impl<T: Capability> fmt::Display for Cap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_exact() {
            f.write_str(T::NODE)
        } else {
            write!(f, "{} (via {})", T::NODE, self.grant)
        }
    }
}

/// A permission-gated portal gun action.
pub trait Capability: 'static + Send + Sync {
    /// What the capability is scoped to: `()` for plugin-wide actions,
    /// an entity for actions on another player.
    type Scope: Clone + Send + Sync;

    /// Dotted permission node checked before minting.
    const NODE: &'static str;

    /// Message sent to a subject that lacks the node.
    const DENIED: Msg = Msg::NoPermission;
}
