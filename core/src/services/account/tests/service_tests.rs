//! Registration and email-verification lifecycle tests.

use std::sync::Arc;

use crate::domain::entities::user::UserStatus;
use crate::errors::{AuthError, DomainError};
use crate::repositories::user_repository::mock::MockUserRepository;
use crate::repositories::UserRepository;
use crate::services::account::AccountService;
use crate::services::verification::tests::{MockCodeCache, MockMailer};
use crate::services::verification::{VerificationService, VerificationServiceConfig};

struct Harness {
    account: AccountService<MockUserRepository, MockMailer, MockCodeCache>,
    users: Arc<MockUserRepository>,
    mailer: Arc<MockMailer>,
}

fn harness() -> Harness {
    let users = Arc::new(MockUserRepository::new());
    let mailer = Arc::new(MockMailer::new());
    let cache = Arc::new(MockCodeCache::new());
    let verification = Arc::new(VerificationService::new(
        Arc::clone(&mailer),
        cache,
        VerificationServiceConfig::default(),
    ));
    let account = AccountService::new(Arc::clone(&users), verification);
    Harness {
        account,
        users,
        mailer,
    }
}

#[tokio::test]
async fn registration_creates_an_inactive_account() {
    let h = harness();

    let user = h
        .account
        .register("new@example.com", Some("newcomer"), "long enough password")
        .await
        .unwrap();

    assert_eq!(user.status, UserStatus::Created);
    assert!(!user.can_login());
    // The digest is stored, never the password
    assert_ne!(user.password_hash, "long enough password");
}

#[tokio::test]
async fn registration_rejects_bad_input() {
    let h = harness();

    assert!(matches!(
        h.account.register("not-an-email", None, "long enough password").await,
        Err(DomainError::Validation { .. })
    ));
    assert!(matches!(
        h.account.register("ok@example.com", Some("x"), "long enough password").await,
        Err(DomainError::Validation { .. })
    ));
    assert!(matches!(
        h.account.register("ok@example.com", None, "short").await,
        Err(DomainError::Validation { .. })
    ));
}

#[tokio::test]
async fn duplicate_registration_conflicts() {
    let h = harness();
    h.account
        .register("dup@example.com", None, "long enough password")
        .await
        .unwrap();

    let result = h
        .account
        .register("dup@example.com", None, "another password!")
        .await;
    assert!(matches!(result, Err(DomainError::Conflict { .. })));
}

#[tokio::test]
async fn verification_walks_the_lifecycle_to_activated() {
    let h = harness();
    let user = h
        .account
        .register("new@example.com", None, "long enough password")
        .await
        .unwrap();

    let ttl = h.account.send_verification(user.id).await.unwrap();
    assert_eq!(ttl, 300);

    // Code issued: account is now waiting for activation
    let waiting = h.users.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(waiting.status, UserStatus::WaitActivation);

    let code = h.mailer.last_code_for("new@example.com").await.unwrap();
    h.account.verify_code("new@example.com", &code).await.unwrap();

    let activated = h.users.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(activated.status, UserStatus::Activated);
    assert!(activated.can_login());
}

#[tokio::test]
async fn wrong_code_does_not_activate() {
    let h = harness();
    let user = h
        .account
        .register("new@example.com", None, "long enough password")
        .await
        .unwrap();
    h.account.send_verification(user.id).await.unwrap();

    let code = h.mailer.last_code_for("new@example.com").await.unwrap();
    let wrong = if code == "111111" { "111112" } else { "111111" };

    let result = h.account.verify_code("new@example.com", wrong).await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InvalidVerificationCode))
    ));

    let unchanged = h.users.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(unchanged.status, UserStatus::WaitActivation);
}

#[tokio::test]
async fn verification_for_activated_or_missing_accounts_is_refused() {
    let h = harness();
    let user = h
        .account
        .register("new@example.com", None, "long enough password")
        .await
        .unwrap();
    h.users
        .update_status(user.id, UserStatus::Activated)
        .await
        .unwrap();

    assert!(matches!(
        h.account.send_verification(user.id).await,
        Err(DomainError::Validation { .. })
    ));
    assert!(matches!(
        h.account.send_verification(9999).await,
        Err(DomainError::NotFound { .. })
    ));
}

#[tokio::test]
async fn delete_reports_whether_anything_was_removed() {
    let h = harness();
    let user = h
        .account
        .register("new@example.com", None, "long enough password")
        .await
        .unwrap();

    assert!(h.account.delete(user.id).await.unwrap());
    assert!(!h.account.delete(user.id).await.unwrap());
}
