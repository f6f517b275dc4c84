//! TLD Registry domain types
//!
//! Shared vocabulary for the access-control crates: account addresses,
//! role identifiers, manager records, permission triples, and the audit
//! receipts every mutating operation emits.

#![deny(unsafe_code)]

mod account;
mod audit;
mod manager;
mod permission;
mod role;

pub use account::{AccountAddress, AddressParseError, TldId, ADDRESS_LEN};
pub use audit::{AccessReceipt, AuditJournal, ReceiptKind, ReceiptScope};
pub use manager::ManagerRecord;
pub use permission::{ActionSet, GroupKind, TldPermission};
pub use role::{Role, RoleId};

use thiserror::Error;

/// Errors shared across the access-control surface.
#[derive(Debug, Error)]
pub enum AccessError {
    #[error("Address is not an enabled manager: {0}")]
    NotAManager(AccountAddress),

    #[error("The zero address is never authorized")]
    ZeroAddress,

    #[error("Lock error")]
    LockError,
}

/// Result alias for access-control operations.
pub type AccessResult<T> = Result<T, AccessError>;
