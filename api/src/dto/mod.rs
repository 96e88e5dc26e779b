//! Request and response DTOs

pub mod auth;
pub mod user;

pub use gh_shared::types::ErrorResponse;
