//! # Covenant Registry
//!
//! The identity side of the covenant ledger: which principals are
//! registered participants, which resources they own, and which
//! principals are verified accessors.
//!
//! Two registries live here:
//!
//! - [`IdentityRegistry`] - participants and their resources
//! - [`AccessorRegistry`] - the verified-accessor set
//!
//! Both are plain in-memory maps with check-then-act mutation: every
//! precondition is verified before any insert, so a failed call leaves
//! state untouched. Serialized access is the caller's job; the ledger
//! facade holds both registries behind a single lock.

pub mod accessor;
pub mod error;
pub mod identity;

pub use accessor::{Accessor, AccessorRegistry};
pub use error::{RegistryError, Result};
pub use identity::{IdentityRegistry, Participant, Resource};
