//! Proptest generators for property-based testing.

use proptest::prelude::*;

use covenant_core::{AccessCategory, Clock, Height, PrincipalId, Purpose, ResourceId, ResourceType};

/// Generate a random PrincipalId.
pub fn principal_id() -> impl Strategy<Value = PrincipalId> {
    any::<[u8; 32]>().prop_map(PrincipalId::from_bytes)
}

/// Generate an AccessCategory.
pub fn access_category() -> impl Strategy<Value = AccessCategory> {
    prop_oneof![
        Just(AccessCategory::Document),
        Just(AccessCategory::Image),
        Just(AccessCategory::Video),
        Just(AccessCategory::Financial),
        Just(AccessCategory::HealthRecord),
        Just(AccessCategory::Telemetry),
    ]
}

/// Generate a reasonable height, leaving room to advance.
pub fn height() -> impl Strategy<Value = Height> {
    (0u64..=u64::MAX / 2).prop_map(Height::new)
}

/// Generate a valid resource id.
pub fn resource_id() -> impl Strategy<Value = ResourceId> {
    "[a-z][a-z0-9-]{0,31}".prop_map(|s| ResourceId::new(s).unwrap())
}

/// Generate a valid resource type.
pub fn resource_type() -> impl Strategy<Value = ResourceType> {
    "[a-z][a-z0-9-]{0,31}".prop_map(|s| ResourceType::new(s).unwrap())
}

/// Generate a valid purpose string.
pub fn purpose() -> impl Strategy<Value = Purpose> {
    "[a-z][a-z0-9 ]{0,63}".prop_map(|s| Purpose::new(s).unwrap())
}

/// Generate a fee amount.
pub fn fee_amount() -> impl Strategy<Value = u64> {
    0u64..=1_000_000
}

/// Parameters for a grant attempt.
#[derive(Debug, Clone)]
pub struct GrantParams {
    pub category: AccessCategory,
    /// Heights past "now" at which the grant expires; None is unbounded.
    pub expiry_offset: Option<u64>,
    pub fee_amount: u64,
}

impl Arbitrary for GrantParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            access_category(),
            prop::option::of(1u64..=10_000),
            fee_amount(),
        )
            .prop_map(|(category, expiry_offset, fee_amount)| GrantParams {
                category,
                expiry_offset,
                fee_amount,
            })
            .boxed()
    }
}
