//! Permission triples and default-group kinds
//!
//! A `TldPermission` is the per-(TLD, account) explicit override the
//! external override store hands back. When `explicit` is false the three
//! flags carry no meaning and default-group membership decides instead.

use serde::{Deserialize, Serialize};

/// The two default groups that apply across all TLDs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupKind {
    /// Default domain registrants
    DomainRegistrants,
    /// Default TLD managers
    TldManagers,
}

impl GroupKind {
    /// Human-readable group label, used in receipts and logs.
    pub fn label(&self) -> &'static str {
        match self {
            GroupKind::DomainRegistrants => "default-domain-registrants",
            GroupKind::TldManagers => "default-tld-managers",
        }
    }
}

impl std::fmt::Display for GroupKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Which of the three domain actions a caller needs authorized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSet {
    pub add: bool,
    pub release: bool,
    pub transfer: bool,
}

impl ActionSet {
    /// Require all three actions.
    pub const ALL: ActionSet = ActionSet {
        add: true,
        release: true,
        transfer: true,
    };

    /// Require nothing; trivially satisfied once the role gate passes.
    pub const NONE: ActionSet = ActionSet {
        add: false,
        release: false,
        transfer: false,
    };

    pub fn add() -> Self {
        ActionSet {
            add: true,
            ..Self::NONE
        }
    }

    pub fn release() -> Self {
        ActionSet {
            release: true,
            ..Self::NONE
        }
    }

    pub fn transfer() -> Self {
        ActionSet {
            transfer: true,
            ..Self::NONE
        }
    }
}

/// Explicit per-(TLD, account) permission override.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TldPermission {
    /// Whether an override exists at all; the flags below are meaningless
    /// when this is false
    pub explicit: bool,
    pub can_add: bool,
    pub can_release: bool,
    pub can_transfer: bool,
}

impl TldPermission {
    /// The "no override recorded" value.
    pub const NOT_SET: TldPermission = TldPermission {
        explicit: false,
        can_add: false,
        can_release: false,
        can_transfer: false,
    };

    /// Create an explicit override with the given flags.
    pub fn explicit(can_add: bool, can_release: bool, can_transfer: bool) -> Self {
        Self {
            explicit: true,
            can_add,
            can_release,
            can_transfer,
        }
    }

    /// Apply the uniform require/permit rule: every required action must be
    /// permitted; actions not required are ignored.
    pub fn allows(&self, required: ActionSet) -> bool {
        (!required.add || self.can_add)
            && (!required.release || self.can_release)
            && (!required.transfer || self.can_transfer)
    }
}

impl Default for TldPermission {
    fn default() -> Self {
        Self::NOT_SET
    }
}
