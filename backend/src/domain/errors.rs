//! Error kinds crossing the domain boundary.
//!
//! Services return these typed kinds instead of raising through layers; the
//! REST boundary owns the translation to HTTP status codes.

use thiserror::Error;

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain error taxonomy
#[derive(Debug, Error)]
pub enum DomainError {
    /// Structurally invalid input, detected before the store is touched
    #[error("invalid input: {0}")]
    Validation(String),

    /// The session token carries no registered user
    #[error("no user is linked to this session")]
    NoLinkedUser,

    /// The referenced record does not exist for this session
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Durable-store failure, cause logged at the boundary but never leaked
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation(message.into())
    }
}
