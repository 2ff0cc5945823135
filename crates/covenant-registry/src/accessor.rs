//! The accessor verification registry.
//!
//! Accessors are principals authorized to request access at all,
//! independent of any specific grant. Verification is one-way: there is
//! no un-verify operation, so once verified, always verified.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use covenant_core::{AccessorType, Height, PrincipalId};

use crate::error::{RegistryError, Result};

/// A verified accessor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accessor {
    /// Free-form kind tag supplied at verification.
    pub accessor_type: AccessorType,

    /// Height at which the accessor was verified.
    pub verified_at: Height,
}

/// Registry of verified accessors.
///
/// The privilege gate for verification lives with the caller (the ledger
/// facade demands an admin capability); this registry only tracks the
/// verified set.
#[derive(Debug, Default)]
pub struct AccessorRegistry {
    accessors: HashMap<PrincipalId, Accessor>,
}

impl AccessorRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `accessor` as verified.
    ///
    /// Fails if the accessor is already verified.
    pub fn verify(
        &mut self,
        accessor: PrincipalId,
        accessor_type: AccessorType,
        now: Height,
    ) -> Result<()> {
        if self.accessors.contains_key(&accessor) {
            return Err(RegistryError::AlreadyVerified(accessor));
        }

        self.accessors.insert(
            accessor,
            Accessor {
                accessor_type,
                verified_at: now,
            },
        );
        Ok(())
    }

    /// Whether the principal is a verified accessor.
    pub fn is_verified(&self, principal: &PrincipalId) -> bool {
        self.accessors.contains_key(principal)
    }

    /// Get an accessor record.
    pub fn accessor(&self, principal: &PrincipalId) -> Option<&Accessor> {
        self.accessors.get(principal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn principal(byte: u8) -> PrincipalId {
        PrincipalId::from_bytes([byte; 32])
    }

    #[test]
    fn test_verify_accessor() {
        let mut registry = AccessorRegistry::new();
        let lab = principal(7);

        assert!(!registry.is_verified(&lab));
        registry
            .verify(lab, AccessorType::new("laboratory").unwrap(), Height::new(3))
            .unwrap();
        assert!(registry.is_verified(&lab));
        assert_eq!(registry.accessor(&lab).unwrap().verified_at, Height::new(3));
    }

    #[test]
    fn test_re_verification_fails_and_preserves_state() {
        let mut registry = AccessorRegistry::new();
        let lab = principal(7);

        registry
            .verify(lab, AccessorType::new("laboratory").unwrap(), Height::new(3))
            .unwrap();
        let err = registry
            .verify(lab, AccessorType::new("clinic").unwrap(), Height::new(9))
            .unwrap_err();

        assert_eq!(err, RegistryError::AlreadyVerified(lab));
        let record = registry.accessor(&lab).unwrap();
        assert_eq!(record.accessor_type.as_str(), "laboratory");
        assert_eq!(record.verified_at, Height::new(3));
    }
}
