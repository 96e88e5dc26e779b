//! Cache module for Redis-based storage of verification codes

pub mod redis_client;
pub mod verification_cache;

pub use redis_client::RedisClient;
pub use verification_cache::VerificationCache;
