//! Error types for the ledger facade.

use thiserror::Error;

use covenant_core::CoreError;
use covenant_perms::PermsError;
use covenant_registry::RegistryError;

/// Errors that can occur during ledger operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// Core value construction error.
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// Registry error.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Permission error.
    #[error("permission error: {0}")]
    Perms(#[from] PermsError),

    /// The presented admin capability does not belong to this ledger.
    #[error("not authorized: admin capability from a different ledger")]
    Unauthorized,
}

/// Result type for ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;
