//! The admin capability for accessor verification.

/// Capability required to verify accessors.
///
/// Issued exactly once, by [`Ledger::new`](crate::Ledger::new). Whoever
/// constructs the ledger decides who holds the token; the ledger itself
/// only checks that a presented token came from its own construction.
/// There is no way to mint a second one for the same ledger.
#[derive(Debug, Clone)]
pub struct AdminCapability {
    instance: u64,
}

impl AdminCapability {
    pub(crate) fn new(instance: u64) -> Self {
        Self { instance }
    }

    pub(crate) fn instance(&self) -> u64 {
        self.instance
    }
}
