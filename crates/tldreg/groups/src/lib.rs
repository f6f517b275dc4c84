//! Default Group Registry - who is defaulted-in across all TLDs
//!
//! Two membership sets, one per [`GroupKind`]: default domain registrants
//! and default TLD managers. Each set keeps a flag map plus an append-only
//! roster so historically admitted addresses stay enumerable after they are
//! toggled off. Toggling only flips flags; the roster never shrinks.
//!
//! Admission preconditions (the address must hold a manager record) are the
//! caller context's job, not re-validated here.

#![deny(unsafe_code)]

use std::collections::HashMap;
use std::sync::RwLock;
use thiserror::Error;
use tldreg_types::{
    AccessReceipt, AccountAddress, AuditJournal, GroupKind, ReceiptKind, ReceiptScope,
};
use tracing::info;

/// Flag map plus admission-ordered roster for a single group.
#[derive(Debug, Default)]
struct GroupState {
    flags: HashMap<AccountAddress, bool>,
    roster: Vec<AccountAddress>,
}

/// One toggleable membership set.
pub struct DefaultGroup {
    kind: GroupKind,
    state: RwLock<GroupState>,
}

impl DefaultGroup {
    /// Create an empty group of the given kind.
    pub fn new(kind: GroupKind) -> Self {
        Self {
            kind,
            state: RwLock::new(GroupState::default()),
        }
    }

    /// Which group this is.
    pub fn kind(&self) -> GroupKind {
        self.kind
    }

    /// Set an address's membership flag.
    ///
    /// The first enabling call appends the address to the roster; every
    /// later call only flips the flag, so the roster holds each address at
    /// most once and never loses an entry.
    pub fn set_member(
        &self,
        address: AccountAddress,
        enabled: bool,
        journal: &mut AuditJournal,
    ) -> Result<(), GroupError> {
        let mut state = self.state.write().map_err(|_| GroupError::LockError)?;

        if enabled && !state.roster.contains(&address) {
            state.roster.push(address);
        }
        state.flags.insert(address, enabled);

        info!(group = %self.kind, member = %address, enabled, "Default membership set");

        journal.log_receipt(AccessReceipt::new(
            if enabled {
                ReceiptKind::Added
            } else {
                ReceiptKind::Removed
            },
            ReceiptScope::DefaultGroup(self.kind),
            address,
            None,
        ));

        Ok(())
    }

    /// Check whether an address is currently a member.
    pub fn is_member(&self, address: &AccountAddress) -> bool {
        self.state
            .read()
            .ok()
            .and_then(|state| state.flags.get(address).copied())
            .unwrap_or(false)
    }

    /// The full roster in admission order, stale entries included.
    ///
    /// Callers that want "currently active" must filter through
    /// [`DefaultGroup::is_member`] or use [`DefaultGroup::active_members`].
    pub fn enumerate(&self) -> Vec<AccountAddress> {
        self.state
            .read()
            .map(|state| state.roster.clone())
            .unwrap_or_default()
    }

    /// Roster entries whose membership flag is currently set.
    pub fn active_members(&self) -> Vec<AccountAddress> {
        self.state
            .read()
            .map(|state| {
                state
                    .roster
                    .iter()
                    .filter(|address| state.flags.get(address).copied().unwrap_or(false))
                    .copied()
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// The two default groups the resolver consults.
pub struct DefaultGroupRegistry {
    registrants: DefaultGroup,
    tld_managers: DefaultGroup,
}

impl DefaultGroupRegistry {
    /// Create both groups, empty.
    pub fn new() -> Self {
        Self {
            registrants: DefaultGroup::new(GroupKind::DomainRegistrants),
            tld_managers: DefaultGroup::new(GroupKind::TldManagers),
        }
    }

    /// The group of the given kind.
    pub fn group(&self, kind: GroupKind) -> &DefaultGroup {
        match kind {
            GroupKind::DomainRegistrants => &self.registrants,
            GroupKind::TldManagers => &self.tld_managers,
        }
    }

    /// Shorthand for `group(kind).is_member(address)`.
    pub fn is_member(&self, kind: GroupKind, address: &AccountAddress) -> bool {
        self.group(kind).is_member(address)
    }
}

impl Default for DefaultGroupRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Group-registry errors.
#[derive(Debug, Error)]
pub enum GroupError {
    #[error("Lock error")]
    LockError,
}

impl From<GroupError> for tldreg_types::AccessError {
    fn from(value: GroupError) -> Self {
        match value {
            GroupError::LockError => Self::LockError,
        }
    }
}
