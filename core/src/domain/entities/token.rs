//! Token entities for JWT-based authentication.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use super::user::{User, UserRole};

/// Access token expiration time (15 minutes)
pub const ACCESS_TOKEN_EXPIRY_MINUTES: i64 = 15;

/// Refresh token expiration time (30 days)
pub const REFRESH_TOKEN_EXPIRY_MINUTES: i64 = 30 * 24 * 60;

/// Kind of a signed token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    /// Short-lived token presented on protected requests
    Access,
    /// Long-lived token exchanged for new pairs
    Refresh,
}

impl TokenType {
    /// Wire/database representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Access => "access",
            TokenType::Refresh => "refresh",
        }
    }
}

impl std::str::FromStr for TokenType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "access" => Ok(TokenType::Access),
            "refresh" => Ok(TokenType::Refresh),
            other => Err(format!("unknown token type: {}", other)),
        }
    }
}

/// Signed JWT payload.
///
/// All fields except `jti` are required. Tokens without a `jti` cannot be
/// revoked and are accepted only as a legacy fallback; everything this
/// service issues carries one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user's email
    pub sub: String,

    /// Role snapshot taken at issue time
    pub role: UserRole,

    /// Token kind, serialized as "type"
    #[serde(rename = "type")]
    pub token_type: TokenType,

    /// Unique token identifier; the only attribute stored for revocation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,

    /// Expiration timestamp, seconds since epoch
    pub exp: i64,

    /// Issued-at timestamp, seconds since epoch
    pub iat: i64,

    /// Extension claims not interpreted by the token subsystem
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Claims {
    /// Checks if the claims have expired
    pub fn is_expired(&self, now: i64) -> bool {
        now >= self.exp
    }
}

/// Claims under construction: everything except the timestamps, which the
/// credential codec stamps when the token is signed.
#[derive(Debug, Clone)]
pub struct ClaimsDraft {
    pub sub: String,
    pub role: UserRole,
    pub token_type: TokenType,
    pub jti: Option<String>,
    pub extra: HashMap<String, serde_json::Value>,
}

impl ClaimsDraft {
    /// Draft for an access token, with a fresh unique identifier
    pub fn access_for(user: &User) -> Self {
        Self {
            sub: user.email.clone(),
            role: user.role,
            token_type: TokenType::Access,
            jti: Some(Uuid::new_v4().to_string()),
            extra: HashMap::new(),
        }
    }

    /// Draft for a refresh token, with a fresh unique identifier
    pub fn refresh_for(user: &User) -> Self {
        Self {
            sub: user.email.clone(),
            role: user.role,
            token_type: TokenType::Refresh,
            jti: Some(Uuid::new_v4().to_string()),
            extra: HashMap::new(),
        }
    }

    /// Attach an extension claim
    pub fn with_extra(mut self, key: impl ToString, value: serde_json::Value) -> Self {
        self.extra.insert(key.to_string(), value);
        self
    }
}

/// Token pair returned to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// JWT access token
    pub access_token: String,

    /// JWT refresh token
    pub refresh_token: String,

    /// Access token expiry time in seconds
    pub access_expires_in: i64,

    /// Refresh token expiry time in seconds
    pub refresh_expires_in: i64,
}

impl TokenPair {
    /// Creates a new token pair with expiry windows in minutes
    pub fn new(
        access_token: String,
        refresh_token: String,
        access_expiry_minutes: i64,
        refresh_expiry_minutes: i64,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            access_expires_in: access_expiry_minutes * 60,
            refresh_expires_in: refresh_expiry_minutes * 60,
        }
    }
}

/// A revoked token identifier, persisted until its natural expiry passes.
///
/// One row per revoked token; the row's presence is what invalidates an
/// otherwise well-signed, unexpired token. No token secret material is
/// stored, only the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevokedToken {
    /// Store-assigned identifier
    pub id: i64,

    /// Unique token identifier (JWT `jti`)
    pub jti: String,

    /// Kind of the revoked token
    pub token_type: TokenType,

    /// Owning user; removal of the user cascades to this record
    pub user_id: i64,

    /// The token's own expiry, seconds since epoch. Once passed, the
    /// record is only occupying space and may be cleaned up.
    pub expires_at: i64,

    /// Creation time, seconds since epoch
    pub created_at: i64,

    /// Last update time, seconds since epoch
    pub updated_at: i64,
}

impl RevokedToken {
    /// Whether the revoked token would have expired on its own by `now`
    pub fn is_expired(&self, now: i64) -> bool {
        self.expires_at <= now
    }
}
