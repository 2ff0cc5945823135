//! The audit trail: an append-only, monotonically-numbered log.

use covenant_core::{AccessCategory, AccessId, Height, PrincipalId, Purpose};

use crate::record::AccessRecord;

/// Append-only log of access events.
///
/// Ids come from a single read-increment-store counter, so they are
/// strictly increasing and gap-free: N appends yield exactly 0..N-1.
/// The caller must serialize access; the ledger facade keeps the trail
/// behind its write lock.
///
/// Recording performs no permission checks. This is a recording
/// primitive, not an enforcement primitive; callers compose a
/// permission check with `record` themselves.
#[derive(Debug, Default)]
pub struct AuditTrail {
    /// The next id to allocate.
    next_id: u64,

    /// Records in insertion order. A record's position equals its id.
    records: Vec<AccessRecord>,
}

impl AuditTrail {
    /// Create a new empty trail.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an access record, returning its allocated id.
    pub fn record(
        &mut self,
        owner: PrincipalId,
        accessor: PrincipalId,
        category: AccessCategory,
        purpose: Purpose,
        fee_amount: u64,
        now: Height,
    ) -> AccessId {
        let access_id = AccessId::new(self.next_id);
        self.next_id += 1;

        self.records.push(AccessRecord {
            access_id,
            owner,
            accessor,
            category,
            recorded_at: now,
            purpose,
            fee_amount,
        });

        access_id
    }

    /// Get a record by id.
    pub fn get(&self, access_id: AccessId) -> Option<&AccessRecord> {
        self.records.get(access_id.value() as usize)
    }

    /// Number of records, which is also the next id to be allocated.
    ///
    /// This is the whole aggregate query surface: per-participant
    /// history is not indexed. Consumers that need it can scan
    /// [`AuditTrail::records`] or index the exported log externally.
    pub fn count(&self) -> u64 {
        self.next_id
    }

    /// All records, in id order.
    pub fn records(&self) -> &[AccessRecord] {
        &self.records
    }

    /// Serialize the whole log to CBOR for off-process archival.
    pub fn export(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        ciborium::into_writer(&self.records, &mut buf).expect("CBOR serialization failed");
        buf
    }
}
