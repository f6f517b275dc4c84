//! Manager records
//!
//! A manager is an administrative account the registry knows about. Records
//! are created once per address and never physically deleted; "removal"
//! flips the enabled flag so the history stays enumerable.

use crate::AccountAddress;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A record for a single administrative account.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ManagerRecord {
    /// The manager's account address
    pub address: AccountAddress,
    /// When the record was first created
    pub created_at: DateTime<Utc>,
    /// Whether the manager is currently enabled
    pub enabled: bool,
    /// Display name stored at first admission; empty when none was given
    pub name: String,
}

impl ManagerRecord {
    /// Create a new enabled record with the given display name.
    pub fn new(address: AccountAddress, name: impl Into<String>) -> Self {
        Self {
            address,
            created_at: Utc::now(),
            enabled: true,
            name: name.into(),
        }
    }
}
