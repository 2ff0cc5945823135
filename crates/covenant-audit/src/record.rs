//! Access records: the immutable entries of the audit trail.

use serde::{Deserialize, Serialize};

use covenant_core::{AccessCategory, AccessId, Height, PrincipalId, Purpose};

/// One recorded access event.
///
/// Write-once. A record describes that an access happened; whether it
/// was permitted is the caller's question to have answered beforehand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessRecord {
    /// Identifier allocated from the trail's monotonic counter.
    pub access_id: AccessId,

    /// The participant whose resource was accessed.
    pub owner: PrincipalId,

    /// The accessor that performed the access.
    pub accessor: PrincipalId,

    /// Category of the accessed resource.
    pub category: AccessCategory,

    /// Height at which the access was recorded.
    pub recorded_at: Height,

    /// Stated purpose of the access.
    pub purpose: Purpose,

    /// Fee asserted for this access. Recorded, never settled.
    pub fee_amount: u64,
}

impl AccessRecord {
    /// Serialize to CBOR bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        ciborium::into_writer(self, &mut buf).expect("CBOR serialization failed");
        buf
    }

    /// Deserialize from CBOR bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ciborium::de::Error<std::io::Error>> {
        ciborium::from_reader(bytes)
    }
}
