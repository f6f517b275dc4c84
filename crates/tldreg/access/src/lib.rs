//! Access Controller - the caller context in front of the resolver
//!
//! Registry operations (add/release/transfer a domain, edit TLD
//! configuration, create TLDs) consult this facade before mutating state.
//! It owns the manager and default-group registries plus the audit journal,
//! holds handles to the three external stores, and applies the two rules
//! the raw resolver deliberately leaves to its callers:
//!
//! - the all-TLD-manager bypass is checked first on every query;
//! - default-group membership can only be *enabled* for an address that is
//!   currently an enabled manager (admit-then-enable ordering).

#![deny(unsafe_code)]

use std::sync::Arc;
use tldreg_groups::DefaultGroupRegistry;
use tldreg_managers::ManagerRegistry;
use tldreg_policy::memory::{InMemoryOverrides, InMemoryRoleStore, InMemoryTldOwnership};
use tldreg_policy::{PermissionOverrides, PermissionResolver, RoleMembership, TldOwnership};
use tldreg_types::{
    AccessError, AccessReceipt, AccessResult, AccountAddress, ActionSet, AuditJournal, GroupKind,
    ManagerRecord, TldId, TldPermission,
};
use tracing::warn;

/// The access-control facade.
pub struct AccessController {
    managers: ManagerRegistry,
    defaults: DefaultGroupRegistry,
    roles: Arc<dyn RoleMembership>,
    ownership: Arc<dyn TldOwnership>,
    overrides: Arc<dyn PermissionOverrides>,
    journal: AuditJournal,
}

/// Handles to the in-memory stores backing a test or single-process
/// controller; production callers pass their own store implementations to
/// [`AccessController::new`] instead.
pub struct InMemoryBackends {
    pub roles: Arc<InMemoryRoleStore>,
    pub ownership: Arc<InMemoryTldOwnership>,
    pub overrides: Arc<InMemoryOverrides>,
}

impl AccessController {
    /// Create a controller over externally supplied stores.
    pub fn new(
        roles: Arc<dyn RoleMembership>,
        ownership: Arc<dyn TldOwnership>,
        overrides: Arc<dyn PermissionOverrides>,
    ) -> Self {
        Self {
            managers: ManagerRegistry::new(),
            defaults: DefaultGroupRegistry::new(),
            roles,
            ownership,
            overrides,
            journal: AuditJournal::new(),
        }
    }

    /// Create a controller backed by in-memory stores, returning the store
    /// handles so the caller can drive grants and assignments.
    pub fn with_memory_backends() -> (Self, InMemoryBackends) {
        let backends = InMemoryBackends {
            roles: Arc::new(InMemoryRoleStore::new()),
            ownership: Arc::new(InMemoryTldOwnership::new()),
            overrides: Arc::new(InMemoryOverrides::new()),
        };
        let controller = Self::new(
            backends.roles.clone(),
            backends.ownership.clone(),
            backends.overrides.clone(),
        );
        (controller, backends)
    }

    fn resolver(&self) -> PermissionResolver<'_> {
        PermissionResolver::new(
            self.roles.as_ref(),
            self.ownership.as_ref(),
            self.overrides.as_ref(),
            &self.defaults,
        )
    }

    // --- Manager bookkeeping ---

    /// Admit an address as a manager (create or re-enable).
    pub fn admit_manager(
        &mut self,
        address: AccountAddress,
        name: Option<&str>,
    ) -> AccessResult<()> {
        self.managers
            .admit(address, name, &mut self.journal)
            .map_err(AccessError::from)
    }

    /// Freeze a manager; the removal receipt is emitted unconditionally.
    pub fn freeze_manager(&mut self, address: AccountAddress) -> AccessResult<()> {
        self.managers
            .freeze(address, &mut self.journal)
            .map_err(AccessError::from)
    }

    /// Whether an address is an enabled manager.
    pub fn is_manager(&self, address: &AccountAddress) -> bool {
        self.managers.is_manager(address)
    }

    /// A copy of the manager record, enabled or not.
    pub fn manager_record(&self, address: &AccountAddress) -> Option<ManagerRecord> {
        self.managers.record(address)
    }

    // --- Default-group toggling ---

    /// Toggle default domain-registrant membership.
    pub fn set_default_registrant(
        &mut self,
        address: AccountAddress,
        enabled: bool,
    ) -> AccessResult<()> {
        self.set_default(GroupKind::DomainRegistrants, address, enabled)
    }

    /// Toggle default TLD-manager membership.
    pub fn set_default_tld_manager(
        &mut self,
        address: AccountAddress,
        enabled: bool,
    ) -> AccessResult<()> {
        self.set_default(GroupKind::TldManagers, address, enabled)
    }

    /// Enabling requires a currently enabled manager record; disabling is
    /// always allowed so operators can clean up after a freeze.
    fn set_default(
        &mut self,
        kind: GroupKind,
        address: AccountAddress,
        enabled: bool,
    ) -> AccessResult<()> {
        if enabled && !self.managers.is_manager(&address) {
            warn!(group = %kind, member = %address, "Refusing default for non-manager");
            return Err(AccessError::NotAManager(address));
        }
        self.defaults
            .group(kind)
            .set_member(address, enabled, &mut self.journal)
            .map_err(AccessError::from)
    }

    /// Full roster of a default group, stale entries included.
    pub fn enumerate_defaults(&self, kind: GroupKind) -> Vec<AccountAddress> {
        self.defaults.group(kind).enumerate()
    }

    /// Currently active members of a default group.
    pub fn active_defaults(&self, kind: GroupKind) -> Vec<AccountAddress> {
        self.defaults.group(kind).active_members()
    }

    // --- Authorization queries (bypass applied) ---

    /// May this account create new TLDs and administer every existing one?
    pub fn may_create_tlds(&self, who: &AccountAddress) -> bool {
        self.resolver().is_tlds_manager(who)
    }

    /// May this account administer the given TLD's configuration?
    pub fn may_manage_tld(&self, tld: &TldId, who: &AccountAddress) -> bool {
        let resolver = self.resolver();
        resolver.is_tlds_manager(who) || resolver.is_tld_manager(tld, who)
    }

    /// May this account perform the required domain actions on the TLD?
    pub fn may_register_domain(
        &self,
        tld: &TldId,
        who: &AccountAddress,
        required: ActionSet,
    ) -> bool {
        let resolver = self.resolver();
        resolver.is_tlds_manager(who) || resolver.is_domain_registrant(tld, who, required)
    }

    /// Raw override entry for a (TLD, account) pair.
    pub fn explicit_tld_permission(&self, tld: &TldId, who: &AccountAddress) -> TldPermission {
        self.resolver().has_explicit_tld_permission(tld, who)
    }

    // --- Audit ---

    /// The journal every mutation logs into.
    pub fn journal(&self) -> &AuditJournal {
        &self.journal
    }

    /// All receipts in emission order.
    pub fn receipts(&self) -> &[AccessReceipt] {
        self.journal.receipts()
    }
}
