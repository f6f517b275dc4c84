//! In-memory reference stores.
//!
//! Stand-ins for the external role, ownership, and override collaborators.
//! The surrounding registry supplies its own implementations in production;
//! these back tests and single-process deployments.
//!
//! Reads degrade to deny-by-default if a lock is poisoned; grants observed
//! through a poisoned lock are indistinguishable from absent ones, which is
//! the safe direction for an authorizer.

use crate::traits::{PermissionOverrides, RoleMembership, TldOwnership};
use std::collections::{HashMap, HashSet};
use std::sync::RwLock;
use tldreg_types::{AccountAddress, Role, TldId, TldPermission};

/// Role grants keyed by (role, account).
pub struct InMemoryRoleStore {
    grants: RwLock<HashSet<(Role, AccountAddress)>>,
}

impl InMemoryRoleStore {
    pub fn new() -> Self {
        Self {
            grants: RwLock::new(HashSet::new()),
        }
    }

    /// Grant a role to an account.
    pub fn grant(&self, role: Role, who: AccountAddress) {
        if let Ok(mut grants) = self.grants.write() {
            grants.insert((role, who));
        }
    }

    /// Revoke a role from an account.
    pub fn revoke(&self, role: Role, who: &AccountAddress) {
        if let Ok(mut grants) = self.grants.write() {
            grants.remove(&(role, *who));
        }
    }
}

impl Default for InMemoryRoleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RoleMembership for InMemoryRoleStore {
    fn has_role(&self, role: Role, who: &AccountAddress) -> bool {
        self.grants
            .read()
            .map(|grants| grants.contains(&(role, *who)))
            .unwrap_or(false)
    }
}

/// Per-TLD manager assignments.
pub struct InMemoryTldOwnership {
    assignments: RwLock<HashSet<(TldId, AccountAddress)>>,
}

impl InMemoryTldOwnership {
    pub fn new() -> Self {
        Self {
            assignments: RwLock::new(HashSet::new()),
        }
    }

    /// Assign an account as manager of a specific TLD.
    pub fn assign(&self, tld: TldId, who: AccountAddress) {
        if let Ok(mut assignments) = self.assignments.write() {
            assignments.insert((tld, who));
        }
    }

    /// Withdraw a per-TLD assignment.
    pub fn withdraw(&self, tld: &TldId, who: &AccountAddress) {
        if let Ok(mut assignments) = self.assignments.write() {
            assignments.remove(&(tld.clone(), *who));
        }
    }
}

impl Default for InMemoryTldOwnership {
    fn default() -> Self {
        Self::new()
    }
}

impl TldOwnership for InMemoryTldOwnership {
    fn manages_tld(&self, tld: &TldId, who: &AccountAddress) -> bool {
        self.assignments
            .read()
            .map(|assignments| assignments.contains(&(tld.clone(), *who)))
            .unwrap_or(false)
    }
}

/// Explicit per-(TLD, account) overrides.
pub struct InMemoryOverrides {
    overrides: RwLock<HashMap<(TldId, AccountAddress), TldPermission>>,
}

impl InMemoryOverrides {
    pub fn new() -> Self {
        Self {
            overrides: RwLock::new(HashMap::new()),
        }
    }

    /// Record or replace an override.
    pub fn set(&self, tld: TldId, who: AccountAddress, permission: TldPermission) {
        if let Ok(mut overrides) = self.overrides.write() {
            overrides.insert((tld, who), permission);
        }
    }

    /// Drop an override, restoring the default-group fallback.
    pub fn clear(&self, tld: &TldId, who: &AccountAddress) {
        if let Ok(mut overrides) = self.overrides.write() {
            overrides.remove(&(tld.clone(), *who));
        }
    }
}

impl Default for InMemoryOverrides {
    fn default() -> Self {
        Self::new()
    }
}

impl PermissionOverrides for InMemoryOverrides {
    fn explicit_permission(&self, tld: &TldId, who: &AccountAddress) -> TldPermission {
        self.overrides
            .read()
            .ok()
            .and_then(|overrides| overrides.get(&(tld.clone(), *who)).copied())
            .unwrap_or(TldPermission::NOT_SET)
    }
}
