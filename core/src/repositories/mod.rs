//! Repository traits defining the persistence interfaces of the core.
//!
//! Concrete implementations live in the infrastructure layer; the core
//! only depends on these traits. In-memory mocks for testing sit next to
//! each trait.

pub mod revoked_token_repository;
pub mod user_repository;

pub use revoked_token_repository::RevokedTokenRepository;
pub use user_repository::UserRepository;
