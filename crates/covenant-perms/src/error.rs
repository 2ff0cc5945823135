//! Error types for the permission store.

use thiserror::Error;

use covenant_core::Height;

/// Errors that can occur during permission operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PermsError {
    /// The requested expiry is not strictly in the future.
    #[error("invalid expiry: {expiry} is not after current height {now}")]
    InvalidExpiry { expiry: Height, now: Height },
}

/// Result type for permission operations.
pub type Result<T> = std::result::Result<T, PermsError>;
