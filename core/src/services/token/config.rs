//! Configuration for the token service

use jsonwebtoken::Algorithm;
use std::str::FromStr;

use gh_shared::config::JwtConfig;

use crate::domain::entities::token::{ACCESS_TOKEN_EXPIRY_MINUTES, REFRESH_TOKEN_EXPIRY_MINUTES};
use crate::errors::DomainError;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing algorithm
    pub algorithm: Algorithm,
    /// Access token expiry in minutes
    pub access_token_expiry_minutes: i64,
    /// Refresh token expiry in minutes
    pub refresh_token_expiry_minutes: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::RS256,
            access_token_expiry_minutes: ACCESS_TOKEN_EXPIRY_MINUTES,
            refresh_token_expiry_minutes: REFRESH_TOKEN_EXPIRY_MINUTES,
        }
    }
}

impl TokenServiceConfig {
    /// Build from the shared JWT configuration
    pub fn from_jwt_config(config: &JwtConfig) -> Result<Self, DomainError> {
        let algorithm = Algorithm::from_str(&config.algorithm).map_err(|_| {
            DomainError::Validation {
                message: format!("unsupported JWT algorithm: {}", config.algorithm),
            }
        })?;
        Ok(Self {
            algorithm,
            access_token_expiry_minutes: config.access_token_expiry_minutes,
            refresh_token_expiry_minutes: config.refresh_token_expiry_minutes,
        })
    }
}
