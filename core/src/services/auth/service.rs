//! Session lifecycle controller.
//!
//! Drives a logical session through its states (anonymous,
//! authenticated, logged out) as operations over the token service and
//! the user store. All collaborators are injected at construction; the
//! controller owns no connections and no global state.

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::entities::token::TokenPair;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{RevokedTokenRepository, UserRepository};
use crate::services::password;
use crate::services::token::TokenService;

/// Result of a logout call.
///
/// `revoked` is false when the access token carried no identifier (the
/// legacy fallback: such a token cannot be revoked) or when another
/// request already revoked it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoutOutcome {
    pub revoked: bool,
}

/// Authentication service implementing login, refresh, and logout
pub struct AuthService<U, R>
where
    U: UserRepository,
    R: RevokedTokenRepository,
{
    /// User repository for account lookups
    user_repository: Arc<U>,
    /// Token service for issuance and validation
    token_service: Arc<TokenService<R>>,
}

impl<U, R> AuthService<U, R>
where
    U: UserRepository,
    R: RevokedTokenRepository,
{
    /// Create a new authentication service
    pub fn new(user_repository: Arc<U>, token_service: Arc<TokenService<R>>) -> Self {
        Self {
            user_repository,
            token_service,
        }
    }

    /// Authenticate with email and password and issue a token pair.
    ///
    /// Unknown email and wrong password are indistinguishable to the
    /// caller; both cost a bcrypt verification and both yield
    /// `InvalidCredentials`. An account that exists but is not activated
    /// is told so: that state is the caller's own, not an attack signal.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<TokenPair> {
        let user = match self.user_repository.find_by_email(email).await? {
            Some(user) => user,
            None => {
                password::dummy_verify(password);
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        if !password::verify_password(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        if !user.can_login() {
            return Err(AuthError::AccountNotActive.into());
        }

        let pair = self.token_service.create_token_pair(&user)?;
        info!(user_id = user.id, "login succeeded");
        Ok(pair)
    }

    /// Exchange a refresh token for a fresh pair.
    ///
    /// The presented refresh token is validated (type, signature, expiry,
    /// revocation) and the user re-derived from its subject; account
    /// state is re-checked so a deactivated or banned user cannot keep a
    /// session alive. The old refresh token is NOT revoked here: it stays
    /// usable until its own expiry or an explicit logout.
    pub async fn refresh(&self, refresh_token: &str) -> DomainResult<TokenPair> {
        let claims = self.token_service.verify_refresh_token(refresh_token).await?;

        let user = self
            .user_repository
            .find_by_email(&claims.sub)
            .await?
            .ok_or(DomainError::Auth(AuthError::InvalidCredentials))?;

        if !user.can_login() {
            return Err(AuthError::AccountNotActive.into());
        }

        let pair = self.token_service.create_token_pair(&user)?;
        info!(user_id = user.id, "token pair refreshed");
        Ok(pair)
    }

    /// End a session by revoking the presented access token.
    ///
    /// Best-effort prompt revocation: a request cancelled before the
    /// insert commits simply leaves the token unrevoked until it expires.
    /// The opportunistic cleanup is also best-effort; its failure is
    /// logged and never fails the logout.
    pub async fn logout(&self, access_token: &str) -> DomainResult<LogoutOutcome> {
        let claims = self.token_service.verify_access_token(access_token).await?;

        let user = self
            .user_repository
            .find_by_email(&claims.sub)
            .await?
            .ok_or(DomainError::Auth(AuthError::InvalidCredentials))?;

        if let Err(e) = self.token_service.cleanup_expired().await {
            warn!(error = %e, "expired-revocation cleanup failed during logout");
        }

        let revoked = self.token_service.revoke_token(&claims, user.id).await?;
        info!(user_id = user.id, revoked, "logout processed");
        Ok(LogoutOutcome { revoked })
    }
}
