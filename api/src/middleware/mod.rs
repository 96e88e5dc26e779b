//! HTTP middleware

pub mod auth;
pub mod cors;

pub use auth::{AuthContext, JwtAuth, TokenVerifier};
