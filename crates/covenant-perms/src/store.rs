//! The permission store.
//!
//! One row per (owner, accessor, category) key. The row cycles
//! Absent -> Granted -> Revoked -> Granted -> ... where a revoked row is
//! equivalent to an absent one for access decisions but stays queryable.

use std::collections::HashMap;

use covenant_core::{AccessCategory, Height, PrincipalId};

use crate::error::{PermsError, Result};
use crate::permission::Permission;

/// Key of one permission row.
pub type PermissionKey = (PrincipalId, PrincipalId, AccessCategory);

/// Map of permission rows keyed by (owner, accessor, category).
///
/// Registration and verification preconditions on grant/revoke belong to
/// the caller, which owns the registries; this store enforces only the
/// expiry rule it can judge on its own.
#[derive(Debug, Default)]
pub struct PermissionStore {
    permissions: HashMap<PermissionKey, Permission>,
}

impl PermissionStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Grant access, overwriting any prior row for the key.
    ///
    /// A bounded expiry must be strictly in the future; a grant can
    /// never be created already expired.
    pub fn grant(
        &mut self,
        owner: PrincipalId,
        accessor: PrincipalId,
        category: AccessCategory,
        expiry: Option<Height>,
        fee_amount: u64,
        now: Height,
    ) -> Result<()> {
        if let Some(expiry) = expiry {
            if expiry <= now {
                return Err(PermsError::InvalidExpiry { expiry, now });
            }
        }

        self.permissions.insert(
            (owner, accessor, category),
            Permission::granted(expiry, fee_amount, now),
        );
        Ok(())
    }

    /// Revoke access, idempotently.
    ///
    /// Writes a revoked row whether or not a grant exists; revoking an
    /// absent or already-revoked key succeeds.
    pub fn revoke(
        &mut self,
        owner: PrincipalId,
        accessor: PrincipalId,
        category: AccessCategory,
        now: Height,
    ) {
        self.permissions
            .insert((owner, accessor, category), Permission::revoked(now));
    }

    /// The access decision: the effective-validity predicate over the
    /// row, false for absent keys.
    pub fn check(
        &self,
        owner: &PrincipalId,
        accessor: &PrincipalId,
        category: AccessCategory,
        now: Height,
    ) -> bool {
        self.permissions
            .get(&(*owner, *accessor, category))
            .is_some_and(|p| p.is_valid(now))
    }

    /// Get a permission row, granted or revoked.
    pub fn permission(
        &self,
        owner: &PrincipalId,
        accessor: &PrincipalId,
        category: AccessCategory,
    ) -> Option<&Permission> {
        self.permissions.get(&(*owner, *accessor, category))
    }
}
