//! Redis cache configuration

use serde::{Deserialize, Serialize};

/// Settings for the Redis connection and the verification-code entries
/// stored there.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Connection URL, `redis://host:port`
    pub url: String,
    /// Upper bound on pooled connections
    pub max_connections: u32,
    /// Connect timeout, seconds
    pub connection_timeout: u64,
    /// Lifetime of a stored verification code, seconds
    #[serde(default = "default_verification_code_ttl")]
    pub verification_code_ttl: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            url: String::from("redis://localhost:6379"),
            max_connections: 10,
            connection_timeout: 5,
            verification_code_ttl: default_verification_code_ttl(),
        }
    }
}

impl CacheConfig {
    /// Build from `REDIS_*` / `VERIFICATION_*` environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            url: std::env::var("REDIS_URL").unwrap_or(defaults.url),
            max_connections: super::env_parsed("REDIS_MAX_CONNECTIONS")
                .unwrap_or(defaults.max_connections),
            connection_timeout: defaults.connection_timeout,
            verification_code_ttl: super::env_parsed("VERIFICATION_CODE_TTL")
                .unwrap_or(defaults.verification_code_ttl),
        }
    }
}

fn default_verification_code_ttl() -> u64 {
    300
}
