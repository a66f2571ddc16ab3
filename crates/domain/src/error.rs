//! Common error types used across the workspace.
//!
//! Each category wraps a typed source error so adapters can map a
//! [`VillaError`] to a transport status without inspecting messages.

use crate::id::VillaId;

/// Top-level error returned by every villa operation.
#[derive(Debug, thiserror::Error)]
pub enum VillaError {
    /// The caller supplied a sentinel identity or an absent payload.
    #[error(transparent)]
    BadRequest(#[from] BadRequestError),

    /// No record matches the given identity.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// A semantic constraint was violated.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The caller tried to assign an identity that only the service may assign.
    #[error(transparent)]
    Conflict(#[from] ConflictError),
}

/// Malformed request: the input cannot be acted upon at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BadRequestError {
    #[error("villa id must be a positive integer")]
    SentinelId,

    #[error("request body is required")]
    MissingBody,

    #[error("no villa with id {0} to update")]
    UnknownTarget(VillaId),
}

/// A record lookup found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

impl NotFoundError {
    /// Not-found error for a villa identity.
    #[must_use]
    pub fn villa(id: VillaId) -> Self {
        Self {
            entity: "Villa",
            id: id.to_string(),
        }
    }

    /// Not-found error when no identity was supplied at all.
    #[must_use]
    pub fn missing_villa() -> Self {
        Self {
            entity: "Villa",
            id: String::from("<none>"),
        }
    }
}

/// Field-level or collection-level constraint violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("name must be at most {max} characters, got {actual}")]
    NameTooLong { max: usize, actual: usize },

    #[error("{field} must not be negative")]
    Negative { field: &'static str },

    #[error("Villa already exists!")]
    DuplicateName(String),

    #[error("patch path {0:?} does not address a villa field")]
    UnknownPath(String),

    #[error("patch operation {op} at {path} requires a value")]
    MissingValue { op: &'static str, path: &'static str },

    #[error("patch value for {path} has the wrong type")]
    InvalidValue { path: &'static str },

    #[error("no villa ids left to assign after {0}")]
    IdsExhausted(VillaId),
}

/// The caller supplied something only the service may assign.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConflictError {
    #[error("villa id {0} is assigned by the server and must not be supplied")]
    ClientAssignedId(VillaId),
}
