//! The identity registry: participants and the resources they own.
//!
//! Participants are never deleted, so presence in the map encodes
//! registration. Resources soft-delete: removal flips an explicit
//! `active` flag and the record is retained.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use covenant_core::{Height, PrincipalId, ResourceId, ResourceType};

use crate::error::{RegistryError, Result};

/// A registered participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Height at which the participant self-registered.
    pub registered_at: Height,
}

/// A resource (or device) registered under a participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Free-form kind tag supplied at registration.
    pub resource_type: ResourceType,

    /// Height at which this record was (last) registered.
    pub registered_at: Height,

    /// Whether the resource is currently registered. Removal flips this
    /// to false; the record stays for visibility.
    pub active: bool,
}

/// Registry of participants and their resources.
///
/// Every mutation checks all preconditions before touching either map;
/// a failed call leaves the registry exactly as it was.
#[derive(Debug, Default)]
pub struct IdentityRegistry {
    /// Participants keyed by principal.
    participants: HashMap<PrincipalId, Participant>,

    /// Resources keyed by (owner, resource id).
    resources: HashMap<(PrincipalId, ResourceId), Resource>,
}

impl IdentityRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `caller` as a participant.
    ///
    /// Fails if the principal is already registered; participants are
    /// never deleted, so re-registration can never succeed later either.
    pub fn register_participant(&mut self, caller: PrincipalId, now: Height) -> Result<()> {
        if self.participants.contains_key(&caller) {
            return Err(RegistryError::AlreadyRegistered(caller));
        }

        self.participants
            .insert(caller, Participant { registered_at: now });
        Ok(())
    }

    /// Register a resource under `caller`.
    ///
    /// The caller must already be a participant. Registering over an
    /// inactive record succeeds and overwrites it; registering over an
    /// active one fails.
    pub fn register_resource(
        &mut self,
        caller: PrincipalId,
        resource_id: ResourceId,
        resource_type: ResourceType,
        now: Height,
    ) -> Result<()> {
        if !self.participants.contains_key(&caller) {
            return Err(RegistryError::ParticipantNotFound(caller));
        }

        let key = (caller, resource_id);
        if self.resources.get(&key).is_some_and(|r| r.active) {
            return Err(RegistryError::ResourceAlreadyRegistered {
                owner: key.0,
                resource_id: key.1,
            });
        }

        self.resources.insert(
            key,
            Resource {
                resource_type,
                registered_at: now,
                active: true,
            },
        );
        Ok(())
    }

    /// Mark a resource inactive, retaining the record.
    ///
    /// Fails if no active resource exists under the id.
    pub fn remove_resource(&mut self, caller: PrincipalId, resource_id: &ResourceId) -> Result<()> {
        let key = (caller, resource_id.clone());
        match self.resources.get_mut(&key) {
            Some(resource) if resource.active => {
                resource.active = false;
                Ok(())
            }
            _ => Err(RegistryError::ResourceNotFound {
                owner: key.0,
                resource_id: key.1,
            }),
        }
    }

    /// Whether the principal is a registered participant.
    pub fn is_registered(&self, principal: &PrincipalId) -> bool {
        self.participants.contains_key(principal)
    }

    /// Whether an active resource exists under (owner, resource id).
    pub fn is_resource_registered(&self, owner: &PrincipalId, resource_id: &ResourceId) -> bool {
        self.resources
            .get(&(*owner, resource_id.clone()))
            .is_some_and(|r| r.active)
    }

    /// Get a participant record.
    pub fn participant(&self, principal: &PrincipalId) -> Option<&Participant> {
        self.participants.get(principal)
    }

    /// Get a resource record, active or not.
    pub fn resource(&self, owner: &PrincipalId, resource_id: &ResourceId) -> Option<&Resource> {
        self.resources.get(&(*owner, resource_id.clone()))
    }
}
