//! Redis-backed verification-code cache.
//!
//! Implements the core's `CodeCacheTrait` over the Redis client: one
//! TTL-bounded entry per key, overwritten on regeneration and deleted on
//! successful use. The key schema is owned by the verification service;
//! this adapter stores whatever it is handed.

use async_trait::async_trait;
use tracing::debug;

use gh_core::services::verification::CodeCacheTrait;

use crate::cache::RedisClient;

/// Verification-code cache over Redis
#[derive(Clone)]
pub struct VerificationCache {
    /// Redis client for cache operations
    redis_client: RedisClient,
}

impl VerificationCache {
    /// Create a new verification cache
    pub fn new(redis_client: RedisClient) -> Self {
        Self { redis_client }
    }
}

#[async_trait]
impl CodeCacheTrait for VerificationCache {
    async fn set_with_ttl(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), String> {
        debug!(key, ttl_seconds, "storing verification entry");
        self.redis_client
            .set_with_expiry(key, value, ttl_seconds)
            .await
            .map_err(|e| e.to_string())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, String> {
        self.redis_client.get(key).await.map_err(|e| e.to_string())
    }

    async fn delete(&self, key: &str) -> Result<bool, String> {
        self.redis_client
            .delete(key)
            .await
            .map_err(|e| e.to_string())
    }
}
