//! Login, refresh, and logout behavior against in-memory stores.

use chrono::{Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::token::ClaimsDraft;
use crate::domain::entities::user::{User, UserRole, UserStatus};
use crate::errors::{AuthError, DomainError, TokenError};
use crate::repositories::revoked_token_repository::mock::MockRevokedTokenRepository;
use crate::repositories::user_repository::mock::MockUserRepository;
use crate::repositories::UserRepository;
use crate::services::auth::AuthService;
use crate::services::token::tests::test_codec;
use crate::services::token::{TokenService, TokenServiceConfig};

const PASSWORD: &str = "correct horse battery staple";

struct Harness {
    auth: AuthService<MockUserRepository, MockRevokedTokenRepository>,
    tokens: Arc<TokenService<MockRevokedTokenRepository>>,
    users: Arc<MockUserRepository>,
}

async fn harness() -> Harness {
    let users = Arc::new(MockUserRepository::new());
    let revoked = Arc::new(MockRevokedTokenRepository::new());
    let tokens = Arc::new(TokenService::new(
        revoked,
        test_codec(),
        TokenServiceConfig::default(),
    ));
    let auth = AuthService::new(Arc::clone(&users), Arc::clone(&tokens));
    Harness {
        auth,
        tokens,
        users,
    }
}

async fn seed_user(users: &MockUserRepository, id: i64, email: &str, status: UserStatus) -> User {
    let now = Utc::now().timestamp();
    let user = User {
        id,
        email: email.to_string(),
        username: None,
        // Cost 4 keeps the test fast
        password_hash: bcrypt::hash(PASSWORD, 4).unwrap(),
        role: UserRole::User,
        status,
        created_at: now,
        updated_at: now,
    };
    users.insert(user.clone()).await;
    user
}

#[tokio::test]
async fn login_issues_a_working_pair() {
    let h = harness().await;
    seed_user(&h.users, 1, "user@example.com", UserStatus::Activated).await;

    let pair = h.auth.login("user@example.com", PASSWORD).await.unwrap();

    let claims = h.tokens.verify_access_token(&pair.access_token).await.unwrap();
    assert_eq!(claims.sub, "user@example.com");
    assert!(h.tokens.verify_refresh_token(&pair.refresh_token).await.is_ok());
}

#[tokio::test]
async fn wrong_password_and_unknown_email_are_indistinguishable() {
    let h = harness().await;
    seed_user(&h.users, 1, "user@example.com", UserStatus::Activated).await;

    let wrong_password = h.auth.login("user@example.com", "nope").await;
    let unknown_email = h.auth.login("ghost@example.com", "nope").await;

    assert!(matches!(
        wrong_password,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        unknown_email,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));
}

#[tokio::test]
async fn unactivated_account_with_correct_password_is_rejected_as_inactive() {
    let h = harness().await;
    seed_user(&h.users, 1, "user@example.com", UserStatus::WaitActivation).await;

    let result = h.auth.login("user@example.com", PASSWORD).await;

    // Correct credentials, wrong account state: 403 territory, no token.
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::AccountNotActive))
    ));
}

#[tokio::test]
async fn banned_account_cannot_login() {
    let h = harness().await;
    seed_user(&h.users, 1, "user@example.com", UserStatus::Banned).await;

    let result = h.auth.login("user@example.com", PASSWORD).await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::AccountNotActive))
    ));
}

#[tokio::test]
async fn refresh_requires_a_refresh_token() {
    let h = harness().await;
    seed_user(&h.users, 1, "user@example.com", UserStatus::Activated).await;
    let pair = h.auth.login("user@example.com", PASSWORD).await.unwrap();

    let result = h.auth.refresh(&pair.access_token).await;

    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::WrongTokenType { .. }))
    ));
}

#[tokio::test]
async fn refresh_issues_a_new_pair_and_keeps_the_old_refresh_token_valid() {
    let h = harness().await;
    seed_user(&h.users, 1, "user@example.com", UserStatus::Activated).await;
    let first = h.auth.login("user@example.com", PASSWORD).await.unwrap();

    let second = h.auth.refresh(&first.refresh_token).await.unwrap();

    assert_ne!(first.access_token, second.access_token);
    assert!(h.tokens.verify_access_token(&second.access_token).await.is_ok());

    // Current semantics: the presented refresh token is not rotated out.
    // It remains valid until its own expiry or an explicit logout.
    assert!(h.auth.refresh(&first.refresh_token).await.is_ok());
}

#[tokio::test]
async fn refresh_stops_working_once_the_account_is_banned() {
    let h = harness().await;
    let user = seed_user(&h.users, 1, "user@example.com", UserStatus::Activated).await;
    let pair = h.auth.login("user@example.com", PASSWORD).await.unwrap();

    h.users.update_status(user.id, UserStatus::Banned).await.unwrap();

    let result = h.auth.refresh(&pair.refresh_token).await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::AccountNotActive))
    ));
}

#[tokio::test]
async fn logout_revokes_the_access_token() {
    let h = harness().await;
    seed_user(&h.users, 1, "user@example.com", UserStatus::Activated).await;
    let pair = h.auth.login("user@example.com", PASSWORD).await.unwrap();

    let outcome = h.auth.logout(&pair.access_token).await.unwrap();
    assert!(outcome.revoked);

    // The very same token now fails validation as revoked, even though
    // its signature and expiry are still fine.
    let result = h.tokens.verify_access_token(&pair.access_token).await;
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::TokenRevoked))
    ));
}

#[tokio::test]
async fn logout_does_not_touch_the_refresh_token() {
    let h = harness().await;
    seed_user(&h.users, 1, "user@example.com", UserStatus::Activated).await;
    let pair = h.auth.login("user@example.com", PASSWORD).await.unwrap();

    h.auth.logout(&pair.access_token).await.unwrap();

    // Only the presented access token's identifier went into the store.
    assert!(h.tokens.verify_refresh_token(&pair.refresh_token).await.is_ok());
}

#[tokio::test]
async fn logout_with_identifier_less_token_reports_nothing_revoked() {
    let h = harness().await;
    let user = seed_user(&h.users, 1, "user@example.com", UserStatus::Activated).await;

    // Legacy token without a jti: verifiable, but deliberately
    // non-revocable. The controller must surface that honestly.
    let draft = ClaimsDraft {
        jti: None,
        extra: HashMap::new(),
        ..ClaimsDraft::access_for(&user)
    };
    let token = test_codec()
        .issue(draft, Some(Duration::minutes(15)))
        .unwrap();

    let outcome = h.auth.logout(&token).await.unwrap();
    assert!(!outcome.revoked);

    // And the token still validates afterwards; there is no record to hit.
    assert!(h.tokens.verify_access_token(&token).await.is_ok());
}

#[tokio::test]
async fn concurrent_logouts_agree_on_a_single_revocation() {
    let h = harness().await;
    let user = seed_user(&h.users, 1, "user@example.com", UserStatus::Activated).await;
    let pair = h.auth.login("user@example.com", PASSWORD).await.unwrap();
    let claims = h.tokens.verify_access_token(&pair.access_token).await.unwrap();

    // Both requests verified the token before either revoked it; the
    // store's unique constraint lets exactly one write the record and
    // the service absorbs the other's Conflict.
    let (a, b) = tokio::join!(
        h.tokens.revoke_token(&claims, user.id),
        h.tokens.revoke_token(&claims, user.id),
    );
    let results = [a.unwrap(), b.unwrap()];

    assert_eq!(results.iter().filter(|written| **written).count(), 1);
}
