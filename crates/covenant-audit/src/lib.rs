//! # Covenant Audit
//!
//! The append-only audit trail of the covenant ledger. Every access
//! event lands here as an immutable [`AccessRecord`] numbered by a
//! single monotonic counter.
//!
//! Recording is deliberately decoupled from enforcement: the trail
//! trusts its caller to have checked permission first, and answers only
//! "what happened", never "was it allowed".

pub mod record;
pub mod trail;

pub use record::AccessRecord;
pub use trail::AuditTrail;
