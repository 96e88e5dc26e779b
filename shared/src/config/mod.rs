//! Configuration modules for the Gatehouse backend.
//!
//! Every config type can be constructed from environment variables via
//! `from_env()`. Nothing in the core branches on how configuration was
//! supplied; the API binary assembles these at startup and injects them.

pub mod auth;
pub mod cache;
pub mod database;
pub mod environment;
pub mod mail;
pub mod server;

use std::str::FromStr;

pub use auth::JwtConfig;
pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use mail::MailConfig;
pub use server::ServerConfig;

/// Aggregated application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cache: CacheConfig,
    pub jwt: JwtConfig,
    pub mail: MailConfig,
}

impl AppConfig {
    /// Load the full configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            cache: CacheConfig::from_env(),
            jwt: JwtConfig::from_env(),
            mail: MailConfig::from_env(),
        }
    }
}

/// Parse an environment variable, `None` when unset or unparseable
pub(crate) fn env_parsed<T: FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.parse().ok())
}
