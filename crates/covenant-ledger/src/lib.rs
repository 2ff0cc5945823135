//! # Covenant Ledger
//!
//! The unified API for the covenant system - a permission ledger with
//! an append-only audit trail.
//!
//! ## Overview
//!
//! The ledger tracks four things:
//!
//! - **Participants**: principals that registered themselves
//! - **Resources**: devices or data sources registered under a participant
//! - **Accessors**: principals verified (admin-gated) to request access
//! - **Permissions**: time-bounded, categorized grants from a participant
//!   to an accessor, plus the audit trail of access events
//!
//! ## Key Concepts
//!
//! - **Height**: the monotonic clock, injected and host-advanced. The
//!   ledger never reads wall time.
//! - **Effective validity**: a permission authorizes access iff it is
//!   granted and either unbounded or strictly before its expiry height.
//! - **Recording vs. enforcement**: the audit trail records what
//!   happened and checks nothing; callers check permission first.
//!
//! ## Usage
//!
//! ```rust
//! use covenant_ledger::{AccessCategory, Height, Ledger, ManualClock, PrincipalId};
//!
//! let clock = ManualClock::new();
//! let (ledger, admin) = Ledger::new(clock.clone());
//!
//! let owner = PrincipalId::from_bytes([1; 32]);
//! let lab = PrincipalId::from_bytes([2; 32]);
//!
//! // Identity setup.
//! ledger.register_participant(owner).unwrap();
//! ledger
//!     .verify_accessor(&admin, lab, "laboratory".parse().unwrap())
//!     .unwrap();
//!
//! // Grant bounded access and check it.
//! ledger
//!     .grant_access(owner, lab, AccessCategory::Document, Some(Height::new(10)), 500)
//!     .unwrap();
//! assert!(ledger.check_access(&owner, &lab, AccessCategory::Document));
//!
//! // Record the access event after the check passed.
//! let access_id = ledger.record_access(
//!     owner,
//!     lab,
//!     AccessCategory::Document,
//!     "quarterly review".parse().unwrap(),
//!     500,
//! );
//! assert_eq!(access_id.value(), 0);
//!
//! // Validity lapses exactly at the expiry height.
//! clock.advance(10);
//! assert!(!ledger.check_access(&owner, &lab, AccessCategory::Document));
//! ```

pub mod admin;
pub mod error;
pub mod ledger;

// Re-export component crates
pub use covenant_audit as audit;
pub use covenant_core as core;
pub use covenant_perms as perms;
pub use covenant_registry as registry;

// Re-export main types for convenience
pub use admin::AdminCapability;
pub use error::{LedgerError, Result};
pub use ledger::Ledger;

// Re-export commonly used component types
pub use covenant_audit::{AccessRecord, AuditTrail};
pub use covenant_core::{
    AccessCategory, AccessId, AccessorType, Clock, CoreError, Height, ManualClock, PrincipalId,
    Purpose, ResourceId, ResourceType,
};
pub use covenant_perms::{Permission, PermsError};
pub use covenant_registry::{Accessor, Participant, RegistryError, Resource};
