//! Token service module for signed-credential management
//!
//! This module handles all token-related operations including:
//! - Signing and verification of access/refresh JWTs (credential codec)
//! - RS256 key management for asymmetric signing
//! - Token pair issuance and validation against the revocation store
//! - Periodic and on-demand cleanup of expired revocation records

mod codec;
mod config;
mod service;
mod sweeper;

#[cfg(test)]
pub(crate) mod tests;

pub use codec::{CredentialCodec, JwtKeys};
pub use config::TokenServiceConfig;
pub use service::TokenService;
pub use sweeper::{RevocationSweeper, SweeperConfig};
