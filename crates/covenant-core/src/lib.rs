//! # Covenant Core
//!
//! Pure primitives for the covenant ledger: principals, heights, bounded
//! strings, and the access-category set.
//!
//! This crate contains no I/O and no storage. It is pure computation over
//! small value types, plus the clock seam the rest of the ledger compares
//! against.
//!
//! ## Key Types
//!
//! - [`PrincipalId`] - Opaque 32-byte identity of a caller
//! - [`Height`] - The host-advanced monotonic clock value
//! - [`Clock`] / [`ManualClock`] - The injected height source
//! - [`AccessCategory`] - Closed set of grantable categories
//! - [`AccessId`] - Monotonic identifier of an audit record
//!
//! ## Clock Model
//!
//! The ledger never reads wall time. Heights are supplied by the host
//! through a [`Clock`] implementation and are non-decreasing; every
//! operation sees the same height within one logical step. This keeps
//! grant/check logic deterministic and testable.

pub mod bounded;
pub mod category;
pub mod error;
pub mod height;
pub mod types;

pub use bounded::{AccessorType, Purpose, ResourceId, ResourceType};
pub use category::AccessCategory;
pub use error::CoreError;
pub use height::{Clock, Height, ManualClock};
pub use types::{AccessId, PrincipalId};
