//! The decision functions.
//!
//! Precedence, in the order callers should consult it:
//!
//! 1. `is_tlds_manager` - all-TLD managers bypass every narrower check.
//!    The two functions below do NOT embed this bypass; callers apply it
//!    first (the `tldreg-access` facade does).
//! 2. An explicit per-TLD override, when present, solely governs a
//!    registrant's authorization for that TLD.
//! 3. Default-group membership is the fallback and grants all three domain
//!    actions uniformly.
//!
//! The zero address is never authorized, whatever the stores say.

use crate::traits::{DefaultRoster, PermissionOverrides, RoleMembership, TldOwnership};
use tldreg_types::{AccountAddress, ActionSet, GroupKind, Role, TldId, TldPermission};
use tracing::debug;

/// Pure authorization queries over borrowed stores.
pub struct PermissionResolver<'a> {
    roles: &'a dyn RoleMembership,
    ownership: &'a dyn TldOwnership,
    overrides: &'a dyn PermissionOverrides,
    defaults: &'a dyn DefaultRoster,
}

impl<'a> PermissionResolver<'a> {
    /// Borrow the four stores the decisions are derived from.
    pub fn new(
        roles: &'a dyn RoleMembership,
        ownership: &'a dyn TldOwnership,
        overrides: &'a dyn PermissionOverrides,
        defaults: &'a dyn DefaultRoster,
    ) -> Self {
        Self {
            roles,
            ownership,
            overrides,
            defaults,
        }
    }

    /// Is this account an all-TLD manager?
    ///
    /// Callers treat a positive answer as authorization for every other
    /// query without further checks.
    pub fn is_tlds_manager(&self, who: &AccountAddress) -> bool {
        !who.is_zero() && self.roles.has_role(Role::TldsManager, who)
    }

    /// Is this account a manager of the given TLD?
    ///
    /// Two-factor: the role bit is necessary but not sufficient; the
    /// account must additionally be defaulted-in globally or assigned to
    /// this specific TLD. Either factor can be withdrawn independently to
    /// cut effective authority.
    pub fn is_tld_manager(&self, tld: &TldId, who: &AccountAddress) -> bool {
        if who.is_zero() || !self.roles.has_role(Role::TldManager, who) {
            return false;
        }
        self.defaults.is_default(GroupKind::TldManagers, who)
            || self.ownership.manages_tld(tld, who)
    }

    /// May this account perform the required domain actions on the TLD?
    ///
    /// When an explicit override exists it solely governs the answer:
    /// every required action must be permitted by its override flag, and
    /// default membership is not consulted at all. Without an override,
    /// default-registrant membership grants all three actions uniformly.
    pub fn is_domain_registrant(
        &self,
        tld: &TldId,
        who: &AccountAddress,
        required: ActionSet,
    ) -> bool {
        if who.is_zero() || !self.roles.has_role(Role::DomainRegistrant, who) {
            return false;
        }

        let permission = self.overrides.explicit_permission(tld, who);
        if permission.explicit {
            let allowed = permission.allows(required);
            debug!(%tld, account = %who, allowed, "Explicit override governs");
            return allowed;
        }

        self.defaults.is_default(GroupKind::DomainRegistrants, who)
    }

    /// The raw override entry for a (TLD, account) pair.
    ///
    /// `explicit = false` carries no meaningful flag values.
    pub fn has_explicit_tld_permission(
        &self,
        tld: &TldId,
        who: &AccountAddress,
    ) -> TldPermission {
        self.overrides.explicit_permission(tld, who)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{InMemoryOverrides, InMemoryRoleStore, InMemoryTldOwnership};
    use tldreg_groups::DefaultGroupRegistry;
    use tldreg_types::AuditJournal;

    struct Fixture {
        roles: InMemoryRoleStore,
        ownership: InMemoryTldOwnership,
        overrides: InMemoryOverrides,
        defaults: DefaultGroupRegistry,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                roles: InMemoryRoleStore::new(),
                ownership: InMemoryTldOwnership::new(),
                overrides: InMemoryOverrides::new(),
                defaults: DefaultGroupRegistry::new(),
            }
        }

        fn resolver(&self) -> PermissionResolver<'_> {
            PermissionResolver::new(&self.roles, &self.ownership, &self.overrides, &self.defaults)
        }

        fn default_in(&self, kind: GroupKind, who: AccountAddress) {
            let mut journal = AuditJournal::new();
            self.defaults
                .group(kind)
                .set_member(who, true, &mut journal)
                .unwrap();
        }
    }

    fn addr(last: u8) -> AccountAddress {
        let mut bytes = [0u8; 20];
        bytes[19] = last;
        AccountAddress::from_bytes(bytes)
    }

    #[test]
    fn test_zero_address_is_never_authorized() {
        let fx = Fixture::new();
        let zero = AccountAddress::ZERO;
        // Even with every store primed in its favor.
        fx.roles.grant(Role::TldsManager, zero);
        fx.roles.grant(Role::TldManager, zero);
        fx.roles.grant(Role::DomainRegistrant, zero);
        fx.default_in(GroupKind::TldManagers, zero);
        fx.default_in(GroupKind::DomainRegistrants, zero);
        let tld = TldId::new("wallet");
        fx.ownership.assign(tld.clone(), zero);
        fx.overrides
            .set(tld.clone(), zero, TldPermission::explicit(true, true, true));

        let resolver = fx.resolver();
        assert!(!resolver.is_tlds_manager(&zero));
        assert!(!resolver.is_tld_manager(&tld, &zero));
        assert!(!resolver.is_domain_registrant(&tld, &zero, ActionSet::ALL));
    }

    #[test]
    fn test_tlds_manager_is_role_bit_only() {
        let fx = Fixture::new();
        let who = addr(1);

        assert!(!fx.resolver().is_tlds_manager(&who));
        fx.roles.grant(Role::TldsManager, who);
        assert!(fx.resolver().is_tlds_manager(&who));
        // No bypass inside the narrower queries.
        assert!(!fx.resolver().is_tld_manager(&TldId::new("wallet"), &who));
    }

    #[test]
    fn test_tld_manager_needs_role_and_membership() {
        let fx = Fixture::new();
        let who = addr(2);
        let tld = TldId::new("wallet");

        // Role bit alone is not sufficient.
        fx.roles.grant(Role::TldManager, who);
        assert!(!fx.resolver().is_tld_manager(&tld, &who));

        // Specific assignment flips it on.
        fx.ownership.assign(tld.clone(), who);
        assert!(fx.resolver().is_tld_manager(&tld, &who));
        // But only for that TLD.
        assert!(!fx.resolver().is_tld_manager(&TldId::new("exchange"), &who));

        // Stripping the role bit denies everything, assignment or not.
        fx.roles.revoke(Role::TldManager, &who);
        assert!(!fx.resolver().is_tld_manager(&tld, &who));
    }

    #[test]
    fn test_tld_manager_default_membership_spans_tlds() {
        let fx = Fixture::new();
        let who = addr(3);

        fx.roles.grant(Role::TldManager, who);
        fx.default_in(GroupKind::TldManagers, who);

        assert!(fx.resolver().is_tld_manager(&TldId::new("wallet"), &who));
        assert!(fx.resolver().is_tld_manager(&TldId::new("exchange"), &who));
    }

    #[test]
    fn test_membership_without_role_bit_is_not_enough() {
        let fx = Fixture::new();
        let who = addr(4);

        fx.default_in(GroupKind::TldManagers, who);
        fx.ownership.assign(TldId::new("wallet"), who);

        assert!(!fx.resolver().is_tld_manager(&TldId::new("wallet"), &who));
    }

    #[test]
    fn test_override_takes_precedence_over_defaults() {
        let fx = Fixture::new();
        let who = addr(5);
        let tld = TldId::new("wallet");

        fx.roles.grant(Role::DomainRegistrant, who);
        fx.default_in(GroupKind::DomainRegistrants, who);
        fx.overrides
            .set(tld.clone(), who, TldPermission::explicit(false, true, true));

        let resolver = fx.resolver();
        // Default membership would grant add, but the override denies it.
        assert!(!resolver.is_domain_registrant(&tld, &who, ActionSet::add()));
        assert!(!resolver.is_domain_registrant(&tld, &who, ActionSet::ALL));
        assert!(resolver.is_domain_registrant(&tld, &who, ActionSet::release()));
        assert!(resolver.is_domain_registrant(
            &tld,
            &who,
            ActionSet {
                add: false,
                release: true,
                transfer: true,
            }
        ));
    }

    #[test]
    fn test_override_is_per_tld() {
        let fx = Fixture::new();
        let who = addr(6);
        let restricted = TldId::new("wallet");
        let open = TldId::new("exchange");

        fx.roles.grant(Role::DomainRegistrant, who);
        fx.default_in(GroupKind::DomainRegistrants, who);
        fx.overrides.set(
            restricted.clone(),
            who,
            TldPermission::explicit(false, false, false),
        );

        let resolver = fx.resolver();
        assert!(!resolver.is_domain_registrant(&restricted, &who, ActionSet::add()));
        // The other TLD falls back to default membership.
        assert!(resolver.is_domain_registrant(&open, &who, ActionSet::ALL));
    }

    #[test]
    fn test_default_fallback_without_override() {
        let fx = Fixture::new();
        let who = addr(7);
        let tld = TldId::new("exchange");

        fx.roles.grant(Role::DomainRegistrant, who);
        assert!(!fx.resolver().is_domain_registrant(&tld, &who, ActionSet::ALL));

        fx.default_in(GroupKind::DomainRegistrants, who);
        assert!(fx.resolver().is_domain_registrant(&tld, &who, ActionSet::ALL));
    }

    #[test]
    fn test_registrant_role_bit_gates_everything() {
        let fx = Fixture::new();
        let who = addr(8);
        let tld = TldId::new("wallet");

        fx.default_in(GroupKind::DomainRegistrants, who);
        fx.overrides
            .set(tld.clone(), who, TldPermission::explicit(true, true, true));

        // Without the role bit, override and defaults are irrelevant.
        assert!(!fx.resolver().is_domain_registrant(&tld, &who, ActionSet::add()));
    }

    #[test]
    fn test_empty_requirement_passes_once_gates_pass() {
        let fx = Fixture::new();
        let who = addr(9);
        let tld = TldId::new("wallet");

        fx.roles.grant(Role::DomainRegistrant, who);
        fx.overrides.set(
            tld.clone(),
            who,
            TldPermission::explicit(false, false, false),
        );

        assert!(fx.resolver().is_domain_registrant(&tld, &who, ActionSet::NONE));
    }

    #[test]
    fn test_explicit_permission_lookup() {
        let fx = Fixture::new();
        let who = addr(10);
        let tld = TldId::new("wallet");

        let resolver = fx.resolver();
        assert_eq!(
            resolver.has_explicit_tld_permission(&tld, &who),
            TldPermission::NOT_SET
        );

        fx.overrides
            .set(tld.clone(), who, TldPermission::explicit(true, false, true));
        let perm = fx.resolver().has_explicit_tld_permission(&tld, &who);
        assert!(perm.explicit);
        assert!(perm.can_add);
        assert!(!perm.can_release);
        assert!(perm.can_transfer);
    }
}
