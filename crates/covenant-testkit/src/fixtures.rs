//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use covenant_core::{AccessorType, ManualClock, PrincipalId};
use covenant_ledger::{AdminCapability, Ledger};

/// A test fixture with a ledger, its clock, and its admin capability.
pub struct TestFixture {
    pub ledger: Ledger<ManualClock>,
    pub clock: ManualClock,
    pub admin: AdminCapability,
}

impl TestFixture {
    /// Create a fresh ledger at height zero.
    pub fn new() -> Self {
        let clock = ManualClock::new();
        let (ledger, admin) = Ledger::new(clock.clone());
        Self {
            ledger,
            clock,
            admin,
        }
    }

    /// A deterministic principal derived from a single byte.
    pub fn principal(byte: u8) -> PrincipalId {
        PrincipalId::from_bytes([byte; 32])
    }

    /// A random principal.
    pub fn random_principal() -> PrincipalId {
        PrincipalId::from_bytes(rand::random())
    }

    /// Register a deterministic participant and return it.
    pub fn registered_participant(&self, byte: u8) -> PrincipalId {
        let principal = Self::principal(byte);
        self.ledger.register_participant(principal).unwrap();
        principal
    }

    /// Verify a deterministic accessor and return it.
    pub fn verified_accessor(&self, byte: u8) -> PrincipalId {
        let accessor = Self::principal(byte);
        self.ledger
            .verify_accessor(
                &self.admin,
                accessor,
                AccessorType::new("test-accessor").unwrap(),
            )
            .unwrap();
        accessor
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Create `count` distinct deterministic principals.
pub fn principals(count: usize) -> Vec<PrincipalId> {
    (0..count)
        .map(|i| {
            let mut bytes = [0u8; 32];
            bytes[0] = (i & 0xff) as u8;
            bytes[1] = ((i >> 8) & 0xff) as u8;
            PrincipalId::from_bytes(bytes)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use covenant_core::AccessCategory;

    #[test]
    fn test_fixture_setup() {
        let fixture = TestFixture::new();
        let owner = fixture.registered_participant(1);
        let accessor = fixture.verified_accessor(2);

        assert!(fixture.ledger.is_registered(&owner));
        assert!(fixture.ledger.is_verified(&accessor));

        fixture
            .ledger
            .grant_access(owner, accessor, AccessCategory::Document, None, 0)
            .unwrap();
        assert!(fixture
            .ledger
            .check_access(&owner, &accessor, AccessCategory::Document));
    }

    #[test]
    fn test_principals_are_distinct() {
        let many = principals(300);
        for (i, a) in many.iter().enumerate() {
            for b in &many[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_random_principals_differ() {
        assert_ne!(
            TestFixture::random_principal(),
            TestFixture::random_principal()
        );
    }
}
