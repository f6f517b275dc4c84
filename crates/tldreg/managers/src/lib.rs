//! Manager Registry - lifecycle for administrative accounts
//!
//! Managers are the accounts an operator may later admit into the default
//! groups. Records are soft-deletable: freezing disables a manager without
//! deleting anything, and re-admission restores it with its original name.

#![deny(unsafe_code)]

use std::collections::HashMap;
use std::sync::RwLock;
use thiserror::Error;
use tldreg_types::{
    AccessReceipt, AccountAddress, AuditJournal, ManagerRecord, ReceiptKind, ReceiptScope,
};
use tracing::{info, warn};

/// Registry of administrative accounts.
///
/// Mutations take the write lock for their full duration, so every query
/// observes a fully-settled prior state.
pub struct ManagerRegistry {
    records: RwLock<HashMap<AccountAddress, ManagerRecord>>,
}

impl ManagerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Admit an address as a manager.
    ///
    /// First admission creates an enabled record with the given name (empty
    /// when none is supplied). Re-admitting only re-enables the record; the
    /// stored name is kept and any name argument is ignored. The emitted
    /// receipt always carries the final stored name.
    pub fn admit(
        &self,
        address: AccountAddress,
        name: Option<&str>,
        journal: &mut AuditJournal,
    ) -> Result<(), ManagerError> {
        if address.is_zero() {
            return Err(ManagerError::ZeroAddress);
        }

        let mut records = self.records.write().map_err(|_| ManagerError::LockError)?;

        let stored_name = match records.get_mut(&address) {
            Some(record) => {
                record.enabled = true;
                record.name.clone()
            }
            None => {
                let record = ManagerRecord::new(address, name.unwrap_or(""));
                let stored = record.name.clone();
                records.insert(address, record);
                stored
            }
        };

        info!(manager = %address, name = %stored_name, "Manager admitted");

        journal.log_receipt(AccessReceipt::new(
            ReceiptKind::Added,
            ReceiptScope::Managers,
            address,
            Some(stored_name),
        ));

        Ok(())
    }

    /// Freeze a manager.
    ///
    /// Disables the record when one exists. The `Removed` receipt is emitted
    /// unconditionally, even for addresses that were never admitted; audit
    /// consumers must tolerate that.
    pub fn freeze(
        &self,
        address: AccountAddress,
        journal: &mut AuditJournal,
    ) -> Result<(), ManagerError> {
        let mut records = self.records.write().map_err(|_| ManagerError::LockError)?;

        if let Some(record) = records.get_mut(&address) {
            record.enabled = false;
            warn!(manager = %address, "Manager frozen");
        }

        journal.log_receipt(AccessReceipt::new(
            ReceiptKind::Removed,
            ReceiptScope::Managers,
            address,
            None,
        ));

        Ok(())
    }

    /// Check whether an address is an enabled manager.
    pub fn is_manager(&self, address: &AccountAddress) -> bool {
        self.records
            .read()
            .ok()
            .and_then(|records| records.get(address).map(|r| r.enabled))
            .unwrap_or(false)
    }

    /// Get a copy of a manager record, enabled or not.
    pub fn record(&self, address: &AccountAddress) -> Option<ManagerRecord> {
        self.records
            .read()
            .ok()
            .and_then(|records| records.get(address).cloned())
    }

    /// Number of currently enabled managers.
    pub fn manager_count(&self) -> usize {
        self.records
            .read()
            .map(|records| records.values().filter(|r| r.enabled).count())
            .unwrap_or(0)
    }
}

impl Default for ManagerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Manager-registry errors.
#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("The zero address cannot be admitted as a manager")]
    ZeroAddress,

    #[error("Lock error")]
    LockError,
}

impl From<ManagerError> for tldreg_types::AccessError {
    fn from(value: ManagerError) -> Self {
        match value {
            ManagerError::ZeroAddress => Self::ZeroAddress,
            ManagerError::LockError => Self::LockError,
        }
    }
}
