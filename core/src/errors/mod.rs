//! Domain-specific error types and error handling.

mod types;

pub use types::{AuthError, TokenError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    /// A uniqueness constraint was violated: duplicate user on
    /// registration, duplicate identifier on revocation. Callers that
    /// revoke idempotently absorb this as already-revoked.
    #[error("Conflict: {resource} already exists")]
    Conflict { resource: String },

    /// The backing store or cache could not serve the request. Surfaced
    /// as a server error without detail; never silently swallowed.
    #[error("Store unavailable: {message}")]
    StoreUnavailable { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

pub type DomainResult<T> = Result<T, DomainError>;
