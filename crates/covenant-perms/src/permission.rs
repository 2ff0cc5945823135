//! A single permission row and its validity predicate.

use serde::{Deserialize, Serialize};

use covenant_core::Height;

/// State of one (owner, accessor, category) permission.
///
/// A grant overwrites any prior row for the same key; a revoke rewrites
/// the row with `granted: false` rather than deleting it, so revoked
/// permissions stay visible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    /// Whether the permission is currently granted.
    pub granted: bool,

    /// Height at which validity lapses, if bounded. The stored height
    /// itself is already expired.
    pub expiry: Option<Height>,

    /// Height of the last grant or revoke that wrote this row.
    pub granted_at: Height,

    /// Fee asserted by the grantor. Recorded, never verified or settled.
    pub fee_amount: u64,
}

impl Permission {
    /// A freshly granted permission.
    pub fn granted(expiry: Option<Height>, fee_amount: u64, now: Height) -> Self {
        Self {
            granted: true,
            expiry,
            granted_at: now,
            fee_amount,
        }
    }

    /// A revoked permission row.
    pub fn revoked(now: Height) -> Self {
        Self {
            granted: false,
            expiry: None,
            granted_at: now,
            fee_amount: 0,
        }
    }

    /// The effective-validity predicate.
    ///
    /// Valid iff granted and either unbounded or strictly before the
    /// expiry height.
    pub fn is_valid(&self, now: Height) -> bool {
        if !self.granted {
            return false;
        }

        match self.expiry {
            Some(expiry) => now < expiry,
            None => true,
        }
    }
}
