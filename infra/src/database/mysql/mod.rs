//! MySQL repository implementations

pub mod revoked_token_repository_impl;
pub mod user_repository_impl;

pub use revoked_token_repository_impl::MySqlRevokedTokenRepository;
pub use user_repository_impl::MySqlUserRepository;
