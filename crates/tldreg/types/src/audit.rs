//! Audit receipts
//!
//! Every mutating operation on the registries emits a receipt into an
//! append-only journal so external audit consumers can replay who was
//! admitted, removed, or toggled, and when.

use crate::{AccountAddress, GroupKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What happened to the subject address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReceiptKind {
    Added,
    Removed,
}

/// Which membership surface the receipt concerns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReceiptScope {
    /// The manager registry
    Managers,
    /// One of the two default groups
    DefaultGroup(GroupKind),
}

/// An observable notification for external audit consumption.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AccessReceipt {
    pub receipt_id: String,
    pub kind: ReceiptKind,
    pub scope: ReceiptScope,
    pub address: AccountAddress,
    /// Stored display name, when the subject surface carries one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

impl AccessReceipt {
    /// Create a new receipt stamped with the current time.
    pub fn new(
        kind: ReceiptKind,
        scope: ReceiptScope,
        address: AccountAddress,
        name: Option<String>,
    ) -> Self {
        Self {
            receipt_id: uuid::Uuid::new_v4().to_string(),
            kind,
            scope,
            address,
            name,
            recorded_at: Utc::now(),
        }
    }
}

/// Append-only receipt log.
///
/// The journal stores receipts in emission order and never drops one.
/// Persistence is the concern of whatever external ledger consumes it.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AuditJournal {
    receipts: Vec<AccessReceipt>,
}

impl AuditJournal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a receipt.
    pub fn log_receipt(&mut self, receipt: AccessReceipt) {
        self.receipts.push(receipt);
    }

    /// All receipts in emission order.
    pub fn receipts(&self) -> &[AccessReceipt] {
        &self.receipts
    }

    /// Number of receipts logged so far.
    pub fn receipt_count(&self) -> usize {
        self.receipts.len()
    }
}
