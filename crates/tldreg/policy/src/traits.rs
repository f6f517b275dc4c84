//! Store seams the resolver consumes.
//!
//! The role, ownership, and override stores are owned by external
//! collaborators (the role-grant machinery and the surrounding registry);
//! this crate only reads them. `DefaultRoster` is the read side of the
//! default-group registry and is implemented for it here.

use tldreg_groups::DefaultGroupRegistry;
use tldreg_types::{AccountAddress, GroupKind, Role, TldId, TldPermission};

/// "Does account X hold role R" - the external role-membership store.
pub trait RoleMembership: Send + Sync {
    fn has_role(&self, role: Role, who: &AccountAddress) -> bool;
}

/// Per-(TLD, account) manager assignments, supplied by the registry.
pub trait TldOwnership: Send + Sync {
    fn manages_tld(&self, tld: &TldId, who: &AccountAddress) -> bool;
}

/// Per-(TLD, account) explicit permission overrides.
pub trait PermissionOverrides: Send + Sync {
    /// Returns [`TldPermission::NOT_SET`] when no override is recorded.
    fn explicit_permission(&self, tld: &TldId, who: &AccountAddress) -> TldPermission;
}

/// Read side of the default groups.
pub trait DefaultRoster: Send + Sync {
    fn is_default(&self, kind: GroupKind, who: &AccountAddress) -> bool;
}

impl DefaultRoster for DefaultGroupRegistry {
    fn is_default(&self, kind: GroupKind, who: &AccountAddress) -> bool {
        self.is_member(kind, who)
    }
}
