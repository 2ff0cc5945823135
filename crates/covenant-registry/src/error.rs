//! Error types for the registries.

use thiserror::Error;

use covenant_core::{PrincipalId, ResourceId};

/// Errors that can occur during registry operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// The principal is already a registered participant.
    #[error("participant already registered: {0}")]
    AlreadyRegistered(PrincipalId),

    /// The principal is not a registered participant.
    #[error("participant not found: {0}")]
    ParticipantNotFound(PrincipalId),

    /// An active resource already exists under this id.
    #[error("resource already registered: {owner}/{resource_id}")]
    ResourceAlreadyRegistered {
        owner: PrincipalId,
        resource_id: ResourceId,
    },

    /// No active resource exists under this id.
    #[error("resource not found: {owner}/{resource_id}")]
    ResourceNotFound {
        owner: PrincipalId,
        resource_id: ResourceId,
    },

    /// The accessor is already verified.
    #[error("accessor already verified: {0}")]
    AlreadyVerified(PrincipalId),

    /// The principal is not a verified accessor.
    #[error("accessor not verified: {0}")]
    AccessorNotVerified(PrincipalId),
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
