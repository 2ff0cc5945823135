//! Error types for the covenant core.

use thiserror::Error;

/// Core errors that can occur while constructing primitive values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("{field} exceeds {max} bytes (got {actual})")]
    ValueTooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("unknown access category: {0}")]
    UnknownCategory(String),
}
