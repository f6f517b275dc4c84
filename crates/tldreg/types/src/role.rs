//! Role identifiers
//!
//! The external role-membership store keys grants by a stable role
//! identifier. Identifiers are derived by hashing the human-readable role
//! label, so they stay stable across deployments and cannot collide by
//! accident.
//!
//! The documented hierarchy (all-TLD manager ⊇ TLD manager ⊇ domain
//! registrant) is a grant-time convention, not something these identifiers
//! encode; the resolver checks the widest role first instead of relying on
//! implication.

use serde::{Deserialize, Serialize};

/// The three roles the registry recognizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// May add, release, or transfer domains, subject to per-TLD overrides.
    DomainRegistrant,
    /// May administer the configuration of TLDs it is assigned to.
    TldManager,
    /// May administer every TLD and create new ones outright.
    TldsManager,
}

impl Role {
    /// Human-readable label the identifier is derived from.
    pub fn label(&self) -> &'static str {
        match self {
            Role::DomainRegistrant => "tldreg.role.domain-registrant",
            Role::TldManager => "tldreg.role.tld-manager",
            Role::TldsManager => "tldreg.role.tlds-manager",
        }
    }

    /// Stable identifier for this role.
    pub fn id(&self) -> RoleId {
        RoleId::from_label(self.label())
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Stable, collision-resistant role identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleId(pub [u8; 32]);

impl RoleId {
    /// Derive an identifier by hashing a human-readable label.
    pub fn from_label(label: &str) -> Self {
        let hash = blake3::hash(label.as_bytes());
        Self(*hash.as_bytes())
    }
}

impl std::fmt::Display for RoleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for byte in &self.0[..8] {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}
