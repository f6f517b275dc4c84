//! Permission Resolver - the authorization decision core
//!
//! Combines four stores into the three authorization queries the rest of
//! the registry relies on: role membership and the per-TLD ownership and
//! override stores are external collaborators consumed through traits; the
//! default groups come from [`tldreg_groups`].
//!
//! The resolver is pure with respect to its inputs: given the same store
//! contents it always derives the same answer, and it never mutates or
//! caches anything.

#![deny(unsafe_code)]

pub mod memory;
mod resolver;
mod traits;

pub use resolver::PermissionResolver;
pub use traits::{DefaultRoster, PermissionOverrides, RoleMembership, TldOwnership};
