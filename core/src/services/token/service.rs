//! Main token service implementation

use chrono::{Duration, Utc};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::entities::token::{Claims, ClaimsDraft, TokenPair, TokenType};
use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};
use crate::repositories::RevokedTokenRepository;

use super::codec::CredentialCodec;
use super::config::TokenServiceConfig;

/// Orchestrates token issuance and validation.
///
/// A token's life is a small state machine: issued, then on presentation
/// either valid, expired, malformed, or revoked. Validation order is
/// fixed: structural/signature check, expiry, token type, and finally the
/// revocation lookup. The first three are CPU-only; only the revocation
/// check touches the store.
pub struct TokenService<R: RevokedTokenRepository> {
    repository: Arc<R>,
    codec: CredentialCodec,
    config: TokenServiceConfig,
}

impl<R: RevokedTokenRepository> TokenService<R> {
    /// Creates a new token service instance
    pub fn new(repository: Arc<R>, codec: CredentialCodec, config: TokenServiceConfig) -> Self {
        Self {
            repository,
            codec,
            config,
        }
    }

    fn access_ttl(&self) -> Duration {
        Duration::minutes(self.config.access_token_expiry_minutes)
    }

    fn refresh_ttl(&self) -> Duration {
        Duration::minutes(self.config.refresh_token_expiry_minutes)
    }

    /// Issue an access/refresh pair for a user.
    ///
    /// Both tokens carry the same subject and role snapshot but get
    /// independent identifiers and independent expiries; each is signed
    /// separately. Pure apart from the signing itself: no store writes.
    pub fn create_token_pair(&self, user: &User) -> Result<TokenPair, DomainError> {
        let access_token = self
            .codec
            .issue(ClaimsDraft::access_for(user), Some(self.access_ttl()))?;
        let refresh_token = self
            .codec
            .issue(ClaimsDraft::refresh_for(user), Some(self.refresh_ttl()))?;

        debug!(sub = %user.email, "issued token pair");

        Ok(TokenPair::new(
            access_token,
            refresh_token,
            self.config.access_token_expiry_minutes,
            self.config.refresh_token_expiry_minutes,
        ))
    }

    /// Verify a token presented to an access-only endpoint
    pub async fn verify_access_token(&self, token: &str) -> Result<Claims, DomainError> {
        self.verify_typed(token, TokenType::Access).await
    }

    /// Verify a token presented to a refresh-only endpoint
    pub async fn verify_refresh_token(&self, token: &str) -> Result<Claims, DomainError> {
        self.verify_typed(token, TokenType::Refresh).await
    }

    async fn verify_typed(
        &self,
        token: &str,
        expected: TokenType,
    ) -> Result<Claims, DomainError> {
        // Signature and expiry first; short-circuits before anything else.
        let claims = self.codec.verify(token)?;

        // Type mismatch is client misuse, surfaced distinctly from an
        // invalid token.
        if claims.token_type != expected {
            return Err(DomainError::Token(TokenError::WrongTokenType {
                expected: expected.as_str().to_string(),
                actual: claims.token_type.as_str().to_string(),
            }));
        }

        // Revocation lookup, only when the token carries an identifier.
        // Identifier-less tokens cannot be revoked; accepting them is a
        // deliberate legacy fallback, and everything we issue has a jti.
        match claims.jti {
            Some(ref jti) => {
                if self.repository.is_revoked(jti).await? {
                    return Err(DomainError::Token(TokenError::TokenRevoked));
                }
            }
            None => {
                warn!(sub = %claims.sub, "accepted token without jti; it cannot be revoked");
            }
        }

        Ok(claims)
    }

    /// Record a verified token's identifier in the revocation store.
    ///
    /// Returns whether a new record was written: `Ok(false)` means either
    /// the identifier was already present (another request won the race;
    /// the unique constraint guarantees a single record) or the token
    /// carries no identifier at all and there is nothing to revoke.
    pub async fn revoke_token(
        &self,
        claims: &Claims,
        user_id: i64,
    ) -> Result<bool, DomainError> {
        let Some(jti) = claims.jti.as_deref() else {
            warn!(sub = %claims.sub, "token carries no jti; nothing to revoke");
            return Ok(false);
        };

        match self
            .repository
            .revoke(jti, claims.token_type, user_id, claims.exp)
            .await
        {
            Ok(_) => Ok(true),
            Err(DomainError::Conflict { .. }) => {
                debug!(jti, "token already revoked");
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// Remove revocation records whose tokens have expired on their own
    pub async fn cleanup_expired(&self) -> Result<u64, DomainError> {
        self.repository.cleanup_expired(Utc::now().timestamp()).await
    }
}
