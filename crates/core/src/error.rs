//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Each variant corresponds to exactly one HTTP status at the (out of scope)
/// request boundary; see [`DomainError::status_code`]. Keep this focused on
/// deterministic business failures; storage faults arrive via [`StoreError`]
/// and surface as `Internal`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Malformed or missing input.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Missing, invalid or expired credentials.
    ///
    /// Deliberately carries no detail: an expired token and a forged token
    /// must be indistinguishable to the caller.
    #[error("unauthenticated")]
    Unauthenticated,

    /// Role or ownership mismatch.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// A requested resource was not found.
    #[error("not found")]
    NotFound,

    /// A uniqueness constraint was violated.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Store failure or unexpected condition.
    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// HTTP status the request boundary maps this error to.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::Unauthenticated => 401,
            Self::Forbidden(_) => 403,
            Self::NotFound => 404,
            Self::Conflict(_) => 409,
            Self::Internal(_) => 500,
        }
    }
}

/// Store operation error.
///
/// Raised by document-store implementations. `Duplicate` is the store-level
/// half of the uniqueness invariants (email, employee code, one attendance
/// record per employee per day); everything else is infrastructure trouble.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("duplicate value for unique field '{field}'")]
    Duplicate { field: String },

    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("corrupted record: {0}")]
    Corrupted(String),
}

impl StoreError {
    pub fn duplicate(field: impl Into<String>) -> Self {
        Self::Duplicate {
            field: field.into(),
        }
    }
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate { field } => {
                DomainError::Conflict(format!("'{field}' already exists"))
            }
            other => DomainError::Internal(other.to_string()),
        }
    }
}
