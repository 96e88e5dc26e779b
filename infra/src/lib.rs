//! # Infrastructure Layer
//!
//! Concrete implementations of the Gatehouse core's collaborator
//! interfaces:
//! - **Database**: MySQL repositories using SQLx
//! - **Cache**: Redis client for the verification-code cache
//! - **Mail**: SMTP delivery of verification emails, plus a mock
//!
//! Nothing in here holds global state; clients are constructed at
//! process start and injected into the services that need them.

use thiserror::Error;

pub mod cache;
pub mod database;
pub mod mail;

use gh_core::errors::DomainError;

/// Errors raised by infrastructure components before they cross into
/// the domain layer.
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    #[error("Mail error: {0}")]
    Mail(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        match err {
            InfrastructureError::Config(message) => DomainError::Internal { message },
            InfrastructureError::Database(e) => DomainError::StoreUnavailable {
                message: e.to_string(),
            },
            InfrastructureError::Cache(e) => DomainError::StoreUnavailable {
                message: e.to_string(),
            },
            InfrastructureError::Mail(message) => DomainError::Internal { message },
        }
    }
}
