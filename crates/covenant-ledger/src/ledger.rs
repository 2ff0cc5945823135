//! The Ledger: unified API for the covenant system.
//!
//! The Ledger brings the identity registry, accessor registry,
//! permission store, and audit trail together behind one
//! mutual-exclusion boundary.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use covenant_audit::{AccessRecord, AuditTrail};
use covenant_core::{
    AccessCategory, AccessId, AccessorType, Clock, Height, PrincipalId, Purpose, ResourceId,
    ResourceType,
};
use covenant_perms::{Permission, PermissionStore};
use covenant_registry::{
    Accessor, AccessorRegistry, IdentityRegistry, Participant, RegistryError, Resource,
};

use crate::admin::AdminCapability;
use crate::error::{LedgerError, Result};

/// Distinguishes ledger instances so a capability minted by one ledger
/// is rejected by every other.
static NEXT_INSTANCE: AtomicU64 = AtomicU64::new(0);

/// All mutable ledger state, behind one lock.
///
/// The origin execution model is strictly serial, with no concept of
/// partial visibility. One coarse boundary around everything preserves
/// that: read-modify-write sequences across components (check a
/// registry, then write a permission; read the counter, then append)
/// are atomic with respect to each other.
#[derive(Debug, Default)]
struct LedgerState {
    identity: IdentityRegistry,
    accessors: AccessorRegistry,
    permissions: PermissionStore,
    audit: AuditTrail,
}

/// The main Ledger struct.
///
/// Provides a unified API for:
/// - Registering participants and their resources
/// - Verifying accessors (admin-gated)
/// - Granting, revoking, and checking categorized access
/// - Recording and querying audit events
///
/// The clock is injected and externally advanced; the ledger only ever
/// compares against it.
pub struct Ledger<C: Clock> {
    /// The host-advanced height source.
    clock: C,
    /// Identity of this ledger instance, shared with its capability.
    instance: u64,
    /// All component state.
    state: RwLock<LedgerState>,
}

impl<C: Clock> Ledger<C> {
    /// Create a new ledger and its one admin capability.
    ///
    /// The capability is the only value that authorizes
    /// [`verify_accessor`](Self::verify_accessor); the caller decides
    /// who holds it.
    pub fn new(clock: C) -> (Self, AdminCapability) {
        let instance = NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed);
        let ledger = Self {
            clock,
            instance,
            state: RwLock::new(LedgerState::default()),
        };
        (ledger, AdminCapability::new(instance))
    }

    /// The current height as seen by this ledger.
    pub fn now(&self) -> Height {
        self.clock.now()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Identity Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Register the caller as a participant.
    pub fn register_participant(&self, caller: PrincipalId) -> Result<()> {
        let now = self.clock.now();
        let mut state = self.state.write().unwrap();
        state.identity.register_participant(caller, now)?;

        tracing::debug!("participant {} registered at height {}", caller, now);
        Ok(())
    }

    /// Register a resource under the caller.
    pub fn register_resource(
        &self,
        caller: PrincipalId,
        resource_id: ResourceId,
        resource_type: ResourceType,
    ) -> Result<()> {
        let now = self.clock.now();
        let mut state = self.state.write().unwrap();
        state
            .identity
            .register_resource(caller, resource_id, resource_type, now)?;
        Ok(())
    }

    /// Mark a resource inactive, retaining its record.
    pub fn remove_resource(&self, caller: PrincipalId, resource_id: &ResourceId) -> Result<()> {
        let mut state = self.state.write().unwrap();
        state.identity.remove_resource(caller, resource_id)?;
        Ok(())
    }

    /// Whether the principal is a registered participant.
    pub fn is_registered(&self, principal: &PrincipalId) -> bool {
        self.state.read().unwrap().identity.is_registered(principal)
    }

    /// Whether an active resource exists under (owner, resource id).
    pub fn is_resource_registered(&self, owner: &PrincipalId, resource_id: &ResourceId) -> bool {
        self.state
            .read()
            .unwrap()
            .identity
            .is_resource_registered(owner, resource_id)
    }

    /// Get a participant record.
    pub fn participant(&self, principal: &PrincipalId) -> Option<Participant> {
        self.state
            .read()
            .unwrap()
            .identity
            .participant(principal)
            .cloned()
    }

    /// Get a resource record, active or not.
    pub fn resource(&self, owner: &PrincipalId, resource_id: &ResourceId) -> Option<Resource> {
        self.state
            .read()
            .unwrap()
            .identity
            .resource(owner, resource_id)
            .cloned()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessor Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Verify an accessor. Requires this ledger's admin capability.
    pub fn verify_accessor(
        &self,
        admin: &AdminCapability,
        accessor: PrincipalId,
        accessor_type: AccessorType,
    ) -> Result<()> {
        if admin.instance() != self.instance {
            tracing::warn!("rejected accessor verification with foreign admin capability");
            return Err(LedgerError::Unauthorized);
        }

        let now = self.clock.now();
        let mut state = self.state.write().unwrap();
        state.accessors.verify(accessor, accessor_type, now)?;

        tracing::debug!("accessor {} verified at height {}", accessor, now);
        Ok(())
    }

    /// Whether the principal is a verified accessor.
    pub fn is_verified(&self, principal: &PrincipalId) -> bool {
        self.state.read().unwrap().accessors.is_verified(principal)
    }

    /// Get an accessor record.
    pub fn accessor(&self, principal: &PrincipalId) -> Option<Accessor> {
        self.state
            .read()
            .unwrap()
            .accessors
            .accessor(principal)
            .cloned()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Permission Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Grant `accessor` access to one of the caller's categories.
    ///
    /// The caller must be registered and the accessor verified. A
    /// bounded expiry must be strictly in the future. On success the
    /// permission row is overwritten whatever its prior state.
    pub fn grant_access(
        &self,
        caller: PrincipalId,
        accessor: PrincipalId,
        category: AccessCategory,
        expiry: Option<Height>,
        fee_amount: u64,
    ) -> Result<()> {
        let now = self.clock.now();
        let mut state = self.state.write().unwrap();

        if !state.identity.is_registered(&caller) {
            return Err(RegistryError::ParticipantNotFound(caller).into());
        }
        if !state.accessors.is_verified(&accessor) {
            return Err(RegistryError::AccessorNotVerified(accessor).into());
        }

        state
            .permissions
            .grant(caller, accessor, category, expiry, fee_amount, now)?;

        tracing::debug!(
            "access granted: {} -> {} for {} (expiry {:?})",
            caller,
            accessor,
            category,
            expiry,
        );
        Ok(())
    }

    /// Revoke `accessor`'s access to one of the caller's categories.
    ///
    /// Idempotent: revoking an absent or already-revoked permission
    /// succeeds. The caller must be registered.
    pub fn revoke_access(
        &self,
        caller: PrincipalId,
        accessor: PrincipalId,
        category: AccessCategory,
    ) -> Result<()> {
        let now = self.clock.now();
        let mut state = self.state.write().unwrap();

        if !state.identity.is_registered(&caller) {
            return Err(RegistryError::ParticipantNotFound(caller).into());
        }

        state.permissions.revoke(caller, accessor, category, now);

        tracing::debug!("access revoked: {} -> {} for {}", caller, accessor, category);
        Ok(())
    }

    /// The access decision for (owner, accessor, category) at the
    /// current height.
    pub fn check_access(
        &self,
        owner: &PrincipalId,
        accessor: &PrincipalId,
        category: AccessCategory,
    ) -> bool {
        let now = self.clock.now();
        self.state
            .read()
            .unwrap()
            .permissions
            .check(owner, accessor, category, now)
    }

    /// Get a permission row, granted or revoked.
    pub fn permission(
        &self,
        owner: &PrincipalId,
        accessor: &PrincipalId,
        category: AccessCategory,
    ) -> Option<Permission> {
        self.state
            .read()
            .unwrap()
            .permissions
            .permission(owner, accessor, category)
            .cloned()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Audit Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Record an access event, returning its allocated id.
    ///
    /// Never fails and checks nothing: recording is decoupled from
    /// enforcement. Callers that want enforced recording compose
    /// [`check_access`](Self::check_access) with this themselves.
    pub fn record_access(
        &self,
        owner: PrincipalId,
        accessor: PrincipalId,
        category: AccessCategory,
        purpose: Purpose,
        fee_amount: u64,
    ) -> AccessId {
        let now = self.clock.now();
        let mut state = self.state.write().unwrap();
        state
            .audit
            .record(owner, accessor, category, purpose, fee_amount, now)
    }

    /// Get an audit record by id.
    pub fn get_access(&self, access_id: AccessId) -> Option<AccessRecord> {
        self.state.read().unwrap().audit.get(access_id).cloned()
    }

    /// Number of audit records.
    ///
    /// Per-participant history is not indexed; this counter and the
    /// exported log are the whole aggregate surface.
    pub fn access_count(&self) -> u64 {
        self.state.read().unwrap().audit.count()
    }

    /// Serialize the whole audit log to CBOR for off-process archival.
    pub fn export_audit_log(&self) -> Vec<u8> {
        self.state.read().unwrap().audit.export()
    }
}
