//! Authentication DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use gh_core::domain::entities::token::TokenPair;

/// Form body of POST /auth/login. The `username` field carries the
/// account email, matching the OAuth2 password-grant form shape.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 3, max = 254))]
    pub username: String,

    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

/// Token pair handed to the client
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenPairResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub access_expires_in: i64,
    pub refresh_expires_in: i64,
}

impl From<TokenPair> for TokenPairResponse {
    fn from(pair: TokenPair) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            token_type: "Bearer".to_string(),
            access_expires_in: pair.access_expires_in,
            refresh_expires_in: pair.refresh_expires_in,
        }
    }
}

/// Body of a successful logout
#[derive(Debug, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub message: String,
    /// False when the token carried no identifier or was already revoked
    pub revoked: bool,
}
