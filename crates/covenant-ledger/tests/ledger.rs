//! End-to-end tests for the ledger facade.
//!
//! These exercise the full operation surface the way a host would:
//! registration, verification, grant/revoke/check against an advancing
//! clock, and the audit trail.

use covenant_ledger::{
    AccessCategory, AccessId, AccessRecord, AdminCapability, Clock, Height, Ledger, LedgerError,
    ManualClock, PermsError, PrincipalId, Purpose, RegistryError, ResourceId,
};

fn principal(byte: u8) -> PrincipalId {
    PrincipalId::from_bytes([byte; 32])
}

/// A ledger with one registered participant and one verified accessor.
fn setup() -> (Ledger<ManualClock>, ManualClock, AdminCapability) {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let clock = ManualClock::new();
    let (ledger, admin) = Ledger::new(clock.clone());

    ledger.register_participant(principal(1)).unwrap();
    ledger
        .verify_accessor(&admin, principal(2), "laboratory".parse().unwrap())
        .unwrap();

    (ledger, clock, admin)
}

#[test]
fn full_scenario() {
    let (ledger, clock, _admin) = setup();
    let owner = principal(1);
    let lab = principal(2);
    let now = clock.now();

    // Grant document access expiring ten heights out.
    ledger
        .grant_access(owner, lab, AccessCategory::Document, Some(now + 10), 500)
        .unwrap();
    assert!(ledger.check_access(&owner, &lab, AccessCategory::Document));

    let row = ledger
        .permission(&owner, &lab, AccessCategory::Document)
        .unwrap();
    assert_eq!(row.fee_amount, 500);

    // Past the expiry the check flips.
    clock.advance(11);
    assert!(!ledger.check_access(&owner, &lab, AccessCategory::Document));

    // Revoke keeps it false.
    ledger
        .revoke_access(owner, lab, AccessCategory::Document)
        .unwrap();
    assert!(!ledger.check_access(&owner, &lab, AccessCategory::Document));

    // An unbounded re-grant makes it true again.
    ledger
        .grant_access(owner, lab, AccessCategory::Document, None, 0)
        .unwrap();
    assert!(ledger.check_access(&owner, &lab, AccessCategory::Document));
}

#[test]
fn double_registration_fails() {
    let (ledger, _clock, _admin) = setup();
    let owner = principal(1);

    let registered_at = ledger.participant(&owner).unwrap().registered_at;
    let err = ledger.register_participant(owner).unwrap_err();
    assert_eq!(
        err,
        LedgerError::Registry(RegistryError::AlreadyRegistered(owner))
    );

    // State is identical to the state after the first call alone.
    assert_eq!(ledger.participant(&owner).unwrap().registered_at, registered_at);
}

#[test]
fn grant_before_registration_writes_nothing() {
    let (ledger, _clock, _admin) = setup();
    let stranger = principal(9);
    let lab = principal(2);

    let err = ledger
        .grant_access(stranger, lab, AccessCategory::Document, None, 0)
        .unwrap_err();
    assert_eq!(
        err,
        LedgerError::Registry(RegistryError::ParticipantNotFound(stranger))
    );
    assert!(ledger
        .permission(&stranger, &lab, AccessCategory::Document)
        .is_none());
}

#[test]
fn grant_to_unverified_accessor_writes_nothing() {
    let (ledger, _clock, _admin) = setup();
    let owner = principal(1);
    let stranger = principal(9);

    let err = ledger
        .grant_access(owner, stranger, AccessCategory::Document, None, 0)
        .unwrap_err();
    assert_eq!(
        err,
        LedgerError::Registry(RegistryError::AccessorNotVerified(stranger))
    );
    assert!(ledger
        .permission(&owner, &stranger, AccessCategory::Document)
        .is_none());
}

#[test]
fn invalid_expiry_rejected_up_front() {
    let (ledger, clock, _admin) = setup();
    let owner = principal(1);
    let lab = principal(2);

    clock.advance(100);
    let now = clock.now();

    // Expiry equal to now is already expired, below now even more so.
    for expiry in [now, Height::new(now.value() - 1)] {
        let err = ledger
            .grant_access(owner, lab, AccessCategory::Financial, Some(expiry), 0)
            .unwrap_err();
        assert_eq!(err, LedgerError::Perms(PermsError::InvalidExpiry { expiry, now }));
    }
    assert!(ledger
        .permission(&owner, &lab, AccessCategory::Financial)
        .is_none());

    // The smallest valid expiry is now + 1: valid for exactly one height.
    ledger
        .grant_access(owner, lab, AccessCategory::Financial, Some(now + 1), 0)
        .unwrap();
    assert!(ledger.check_access(&owner, &lab, AccessCategory::Financial));
    clock.advance(1);
    assert!(!ledger.check_access(&owner, &lab, AccessCategory::Financial));
}

#[test]
fn unbounded_grant_valid_until_revoked() {
    let (ledger, clock, _admin) = setup();
    let owner = principal(1);
    let lab = principal(2);

    ledger
        .grant_access(owner, lab, AccessCategory::Telemetry, None, 0)
        .unwrap();

    clock.advance(1_000_000);
    assert!(ledger.check_access(&owner, &lab, AccessCategory::Telemetry));

    ledger
        .revoke_access(owner, lab, AccessCategory::Telemetry)
        .unwrap();
    assert!(!ledger.check_access(&owner, &lab, AccessCategory::Telemetry));
}

#[test]
fn revoke_twice_equals_revoke_once() {
    let (ledger, _clock, _admin) = setup();
    let owner = principal(1);
    let lab = principal(2);

    ledger
        .grant_access(owner, lab, AccessCategory::Image, None, 250)
        .unwrap();

    ledger.revoke_access(owner, lab, AccessCategory::Image).unwrap();
    let after_once = ledger.permission(&owner, &lab, AccessCategory::Image).unwrap();

    ledger.revoke_access(owner, lab, AccessCategory::Image).unwrap();
    let after_twice = ledger.permission(&owner, &lab, AccessCategory::Image).unwrap();

    assert_eq!(after_once, after_twice);
    assert!(!after_twice.granted);
    assert_eq!(after_twice.expiry, None);
    assert_eq!(after_twice.fee_amount, 0);
}

#[test]
fn revoke_by_unregistered_caller_fails() {
    let (ledger, _clock, _admin) = setup();
    let stranger = principal(9);

    let err = ledger
        .revoke_access(stranger, principal(2), AccessCategory::Image)
        .unwrap_err();
    assert_eq!(
        err,
        LedgerError::Registry(RegistryError::ParticipantNotFound(stranger))
    );
}

#[test]
fn foreign_admin_capability_rejected() {
    let (ledger, _clock, _admin) = setup();
    let (_other_ledger, other_admin) = Ledger::new(ManualClock::new());

    let err = ledger
        .verify_accessor(&other_admin, principal(5), "clinic".parse().unwrap())
        .unwrap_err();
    assert_eq!(err, LedgerError::Unauthorized);
    assert!(!ledger.is_verified(&principal(5)));
}

#[test]
fn re_verification_fails() {
    let (ledger, _clock, admin) = setup();
    let lab = principal(2);

    let err = ledger
        .verify_accessor(&admin, lab, "clinic".parse().unwrap())
        .unwrap_err();
    assert_eq!(err, LedgerError::Registry(RegistryError::AlreadyVerified(lab)));

    // The original verification record survives.
    assert_eq!(
        ledger.accessor(&lab).unwrap().accessor_type.as_str(),
        "laboratory"
    );
}

#[test]
fn resource_lifecycle() {
    let (ledger, _clock, _admin) = setup();
    let owner = principal(1);
    let stranger = principal(9);
    let sensor: ResourceId = "vitals-monitor".parse().unwrap();

    // Unregistered principals cannot register resources.
    let err = ledger
        .register_resource(stranger, "x".parse().unwrap(), "sensor".parse().unwrap())
        .unwrap_err();
    assert_eq!(
        err,
        LedgerError::Registry(RegistryError::ParticipantNotFound(stranger))
    );

    ledger
        .register_resource(owner, sensor.clone(), "heart-rate-sensor".parse().unwrap())
        .unwrap();
    assert!(ledger.is_resource_registered(&owner, &sensor));

    // Duplicate registration fails while the resource is active.
    let err = ledger
        .register_resource(owner, sensor.clone(), "other".parse().unwrap())
        .unwrap_err();
    assert!(matches!(
        err,
        LedgerError::Registry(RegistryError::ResourceAlreadyRegistered { .. })
    ));

    // Soft delete retains the record.
    ledger.remove_resource(owner, &sensor).unwrap();
    assert!(!ledger.is_resource_registered(&owner, &sensor));
    let record = ledger.resource(&owner, &sensor).unwrap();
    assert!(!record.active);
    assert_eq!(record.resource_type.as_str(), "heart-rate-sensor");

    // Removing twice fails; re-registering succeeds.
    assert!(ledger.remove_resource(owner, &sensor).is_err());
    ledger
        .register_resource(owner, sensor.clone(), "heart-rate-sensor".parse().unwrap())
        .unwrap();
    assert!(ledger.is_resource_registered(&owner, &sensor));
}

#[test]
fn audit_ids_are_gap_free() {
    let (ledger, _clock, _admin) = setup();
    let owner = principal(1);
    let lab = principal(2);

    let ids: Vec<AccessId> = (0..5)
        .map(|i| {
            ledger.record_access(
                owner,
                lab,
                AccessCategory::Document,
                Purpose::new(format!("read {}", i)).unwrap(),
                0,
            )
        })
        .collect();

    let expected: Vec<AccessId> = (0..5).map(AccessId::new).collect();
    assert_eq!(ids, expected);
    assert_eq!(ledger.access_count(), 5);
}

#[test]
fn recording_is_decoupled_from_enforcement() {
    let (ledger, clock, _admin) = setup();
    let owner = principal(1);
    let lab = principal(2);

    // No grant exists, yet recording succeeds: the trail trusts its
    // caller to have checked first.
    assert!(!ledger.check_access(&owner, &lab, AccessCategory::Video));
    clock.advance(42);
    let id = ledger.record_access(
        owner,
        lab,
        AccessCategory::Video,
        "incident replay".parse().unwrap(),
        75,
    );

    let record = ledger.get_access(id).unwrap();
    assert_eq!(record.owner, owner);
    assert_eq!(record.accessor, lab);
    assert_eq!(record.category, AccessCategory::Video);
    assert_eq!(record.recorded_at, Height::new(42));
    assert_eq!(record.fee_amount, 75);

    assert!(ledger.get_access(AccessId::new(1)).is_none());
}

#[test]
fn audit_log_export_roundtrips() {
    let (ledger, _clock, _admin) = setup();
    let owner = principal(1);
    let lab = principal(2);

    for i in 0..3 {
        ledger.record_access(
            owner,
            lab,
            AccessCategory::HealthRecord,
            Purpose::new(format!("sync {}", i)).unwrap(),
            0,
        );
    }

    let bytes = ledger.export_audit_log();
    let records: Vec<AccessRecord> = ciborium::from_reader(bytes.as_slice()).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[2].access_id, AccessId::new(2));
    assert_eq!(records[2].purpose.as_str(), "sync 2");
}

#[test]
fn failed_grant_leaves_prior_row_intact() {
    let (ledger, clock, _admin) = setup();
    let owner = principal(1);
    let lab = principal(2);

    ledger
        .grant_access(owner, lab, AccessCategory::Document, None, 100)
        .unwrap();
    clock.advance(5);

    // An invalid follow-up grant must not disturb the standing one.
    let now = clock.now();
    assert!(ledger
        .grant_access(owner, lab, AccessCategory::Document, Some(now), 999)
        .is_err());

    let row = ledger.permission(&owner, &lab, AccessCategory::Document).unwrap();
    assert_eq!(row.fee_amount, 100);
    assert!(ledger.check_access(&owner, &lab, AccessCategory::Document));
}
