//! Traits for mail delivery and the ephemeral code cache

use async_trait::async_trait;

/// Trait for outbound mail delivery
#[async_trait]
pub trait MailerTrait: Send + Sync {
    /// Send a verification code to an email address
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<(), String>;
}

/// Trait for the TTL-bounded key-value cache holding verification codes.
///
/// One entry per key; setting again overwrites, the TTL bounds the
/// entry's lifetime, and a successful verification deletes it.
#[async_trait]
pub trait CodeCacheTrait: Send + Sync {
    /// Store a value under a key with a time-to-live in seconds
    async fn set_with_ttl(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), String>;

    /// Fetch a value; absent or expired entries yield `None`
    async fn get(&self, key: &str) -> Result<Option<String>, String>;

    /// Remove a key, reporting whether it existed
    async fn delete(&self, key: &str) -> Result<bool, String>;
}
