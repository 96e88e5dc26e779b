//! JWT signing configuration

use serde::{Deserialize, Serialize};

/// JWT signing and lifetime configuration.
///
/// Signing is asymmetric by default (RS256 with PEM key files); the
/// secret-based HS256 mode exists for local development and tests.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Path to the PEM-encoded private signing key
    pub private_key_path: String,

    /// Path to the PEM-encoded public verification key
    pub public_key_path: String,

    /// Signing algorithm name (default: RS256)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,

    /// Access token lifetime in minutes
    pub access_token_expiry_minutes: i64,

    /// Refresh token lifetime in minutes
    pub refresh_token_expiry_minutes: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            private_key_path: String::from("certs/jwt-private.pem"),
            public_key_path: String::from("certs/jwt-public.pem"),
            algorithm: default_algorithm(),
            access_token_expiry_minutes: 15,
            // 30 days
            refresh_token_expiry_minutes: 30 * 24 * 60,
        }
    }
}

impl JwtConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            private_key_path: std::env::var("JWT_PRIVATE_KEY_PATH")
                .unwrap_or(defaults.private_key_path),
            public_key_path: std::env::var("JWT_PUBLIC_KEY_PATH")
                .unwrap_or(defaults.public_key_path),
            algorithm: std::env::var("JWT_ALGORITHM").unwrap_or(defaults.algorithm),
            access_token_expiry_minutes: super::env_parsed("JWT_ACCESS_EXPIRY_MINUTES")
                .unwrap_or(defaults.access_token_expiry_minutes),
            refresh_token_expiry_minutes: super::env_parsed("JWT_REFRESH_EXPIRY_MINUTES")
                .unwrap_or(defaults.refresh_token_expiry_minutes),
        }
    }

    /// Set access token expiry in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expiry_minutes = minutes;
        self
    }

    /// Set refresh token expiry in days
    pub fn with_refresh_expiry_days(mut self, days: i64) -> Self {
        self.refresh_token_expiry_minutes = days * 24 * 60;
        self
    }
}

fn default_algorithm() -> String {
    String::from("RS256")
}
