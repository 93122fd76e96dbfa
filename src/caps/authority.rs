//! Permission Authority - The capability mint.
//!
//! This module implements [`PermissionAuthority`], the sole entity authorized
//! to create capability tokens. It resolves the capability's permission node
//! through the hierarchical resolver, logs every grant, and issues tokens.

use super::nodes::*;
use super::tokens::{Cap, Capability};
use crate::perms::{PermissionGranter, resolve};
use crate::world::EntityId;
use portalguns_text::{MessageSource, Recipient};
use tracing::{debug, trace};

// ============================================================================
// Request Method Generation Macros
// ============================================================================

/// Macro to generate global capability request methods.
macro_rules! impl_global_cap_request {
    ($(
        $(#[$meta:meta])*
        $method:ident -> $cap:ident
    ),* $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $method(&self) -> Option<Cap<$cap>> {
                self.request::<$cap>(())
            }
        )*
    };
}

/// Macro to generate targeted capability request methods.
macro_rules! impl_targeted_cap_request {
    ($(
        $(#[$meta:meta])*
        $method:ident -> $cap:ident
    ),* $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $method(&self, target: EntityId) -> Option<Cap<$cap>> {
                self.request::<$cap>(target)
            }
        )*
    };
}

// ============================================================================
// Permission Authority
// ============================================================================

/// The Permission Authority - sole minter of capability tokens.
///
/// Wraps the permission granter of one subject (a player or the console)
/// and checks nodes on its behalf. Each request:
///
/// 1. Resolves `T::NODE` exactly, then through wildcard prefixes
/// 2. Logs the grant (or denial) with the node that matched
/// 3. Returns `Some(Cap<T>)` if granted, `None` otherwise
pub struct PermissionAuthority<'a, G: PermissionGranter + ?Sized> {
    subject: &'a str,
    granter: &'a G,
}

impl<'a, G: PermissionGranter + ?Sized> PermissionAuthority<'a, G> {
    /// Create an authority for `subject`, named only for logging.
    #[inline]
    pub fn new(subject: &'a str, granter: &'a G) -> Self {
        Self { subject, granter }
    }

    /// Request any capability.
    pub fn request<T: Capability>(&self, scope: T::Scope) -> Option<Cap<T>>
    where
        T::Scope: std::fmt::Debug,
    {
        match resolve(self.granter, T::NODE) {
            Some(grant) => {
                debug!(
                    node = T::NODE,
                    subject = %self.subject,
                    matched = %grant,
                    scope = ?scope,
                    "Capability granted"
                );
                Some(Cap::new(scope, grant))
            }
            None => {
                trace!(
                    node = T::NODE,
                    subject = %self.subject,
                    scope = ?scope,
                    "Capability denied"
                );
                None
            }
        }
    }

    /// Request a capability, telling `recipient` why on denial.
    ///
    /// The denial text is `T::DENIED` rendered from `messages`.
    pub fn require<T, S, R>(&self, scope: T::Scope, messages: &S, recipient: &R) -> Option<Cap<T>>
    where
        T: Capability,
        T::Scope: std::fmt::Debug,
        S: MessageSource + ?Sized,
        R: Recipient + ?Sized,
    {
        let cap = self.request::<T>(scope);
        if cap.is_none() {
            T::DENIED.send(messages, recipient, &[]);
        }
        cap
    }

    /// Check an arbitrary node without minting a token.
    pub fn check(&self, node: &str) -> bool {
        resolve(self.granter, node).is_some()
    }

    impl_global_cap_request! {
        /// Request capability to fire a portal gun.
        request_use_cap -> UseGunCap,

        /// Request capability to craft portal guns.
        request_craft_cap -> CraftGunCap,

        /// Request capability to create global guns.
        request_global_gun_cap -> GlobalGunCap,

        /// Request capability to open the control panel.
        request_control_panel_cap -> ControlPanelCap,

        /// Request capability to toggle portal persistence.
        request_persistent_cap -> PersistentPortalCap,

        /// Request capability to reload configuration.
        request_reload_cap -> ReloadCap,
    }

    impl_targeted_cap_request! {
        /// Request capability to share portals with `target`.
        request_share_cap -> SharePortalCap,

        /// Request capability to give a gun to `target`.
        request_give_cap -> GiveGunCap,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::perms::{Grant, GrantSet};
    use portalguns_text::Defaults;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Chat(RefCell<Vec<String>>);

    impl Recipient for Chat {
        fn send_message(&self, text: &str) {
            self.0.borrow_mut().push(text.to_string());
        }
    }

    #[test]
    fn wildcard_grants_every_gun_cap() {
        let grants: GrantSet = ["portalguns.gun.*"].into_iter().collect();
        let authority = PermissionAuthority::new("alice", &grants);

        assert!(authority.request_use_cap().is_some());
        assert!(authority.request_craft_cap().is_some());
        assert!(authority.request_global_gun_cap().is_some());
        assert!(authority.request_control_panel_cap().is_none());
        assert!(authority.request_reload_cap().is_none());
    }

    #[test]
    fn root_wildcard_grants_everything() {
        let grants: GrantSet = ["portalguns.*"].into_iter().collect();
        let authority = PermissionAuthority::new("admin", &grants);
        let target = EntityId::new();

        let give = authority.request_give_cap(target).unwrap();
        assert_eq!(give.scope(), &target);
        assert_eq!(give.node(), "portalguns.cmd.give");
        assert!(authority.request_share_cap(target).is_some());
        assert!(authority.request_persistent_cap().is_some());
    }

    #[test]
    fn exact_node_only() {
        let grants: GrantSet = ["portalguns.controlpanel"].into_iter().collect();
        let authority = PermissionAuthority::new("bob", &grants);

        assert!(authority.request_control_panel_cap().is_some());
        assert!(authority.request_use_cap().is_none());
        assert!(authority.check("PortalGuns.ControlPanel"));
    }

    #[test]
    fn unsized_granter() {
        let grants: GrantSet = ["portalguns.cmd.reload"].into_iter().collect();
        let dynamic: &dyn PermissionGranter = &grants;
        let authority = PermissionAuthority::new("console", dynamic);
        assert!(authority.request_reload_cap().is_some());
    }

    #[test]
    fn token_records_matching_grant() {
        let grants: GrantSet = ["portalguns.gun.*", "portalguns.cmd.reload"].into_iter().collect();
        let authority = PermissionAuthority::new("carol", &grants);

        let used = authority.request_use_cap().unwrap();
        assert_eq!(used.granted_by(), &Grant::Wildcard("portalguns.gun.*".to_string()));
        assert!(authority.request_reload_cap().unwrap().is_exact());
    }

    #[test]
    fn require_reports_denial_to_subject() {
        let grants: GrantSet = ["portalguns.gun.use"].into_iter().collect();
        let authority = PermissionAuthority::new("dave", &grants);
        let chat = Chat::default();

        assert!(authority.require::<UseGunCap, _, _>((), &Defaults, &chat).is_some());
        assert!(chat.0.borrow().is_empty());

        assert!(authority.require::<ReloadCap, _, _>((), &Defaults, &chat).is_none());
        assert_eq!(*chat.0.borrow(), ["\u{00A7}cInsufficient permissions."]);
    }
}
