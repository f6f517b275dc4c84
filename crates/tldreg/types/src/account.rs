//! Account and TLD identifiers
//!
//! An `AccountAddress` is a fixed-width account identifier supplied by the
//! external identity substrate. The zero address is reserved: no query ever
//! authorizes it, and the registries refuse to admit it.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Width of an account address in bytes.
pub const ADDRESS_LEN: usize = 20;

/// A fixed-width account identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountAddress(pub [u8; ADDRESS_LEN]);

impl AccountAddress {
    /// The reserved all-zero address. Never authorized for anything.
    pub const ZERO: AccountAddress = AccountAddress([0u8; ADDRESS_LEN]);

    /// Create an address from raw bytes.
    pub fn from_bytes(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// Check whether this is the reserved zero address.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; ADDRESS_LEN]
    }

    /// Raw byte view.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }
}

impl std::fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Errors from parsing an address out of its hex form.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressParseError {
    #[error("Expected {expected} hex characters, got {got}")]
    BadLength { expected: usize, got: usize },

    #[error("Invalid hex character at position {0}")]
    BadDigit(usize),
}

impl FromStr for AccountAddress {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix("0x").unwrap_or(s);
        if hex.len() != ADDRESS_LEN * 2 {
            return Err(AddressParseError::BadLength {
                expected: ADDRESS_LEN * 2,
                got: hex.len(),
            });
        }

        let mut bytes = [0u8; ADDRESS_LEN];
        for (i, chunk) in hex.as_bytes().chunks_exact(2).enumerate() {
            let pair = std::str::from_utf8(chunk).map_err(|_| AddressParseError::BadDigit(i * 2))?;
            bytes[i] =
                u8::from_str_radix(pair, 16).map_err(|_| AddressParseError::BadDigit(i * 2))?;
        }
        Ok(Self(bytes))
    }
}

/// Opaque identifier for a top-level domain.
///
/// The surrounding registry decides what the identifier actually is (a name,
/// a label hash); this core only compares them for equality.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TldId(pub String);

impl TldId {
    /// Create a TLD identifier from a known string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for TldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
