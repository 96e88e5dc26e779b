//! Account service implementation

use std::sync::Arc;
use tracing::info;

use gh_shared::utils::validation::{is_valid_email, is_valid_username};

use crate::domain::entities::user::{NewUser, User, UserStatus};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::password;
use crate::services::verification::{CodeCacheTrait, MailerTrait, VerificationService};

/// Minimum accepted password length
const MIN_PASSWORD_LENGTH: usize = 8;

/// Account management service: everything about users that is not a
/// session. Email verification walks the account through its lifecycle
/// states; the actual token work lives elsewhere.
pub struct AccountService<U, M, C>
where
    U: UserRepository,
    M: MailerTrait,
    C: CodeCacheTrait,
{
    /// User repository for persistence
    user_repository: Arc<U>,
    /// Verification service for emailing one-time codes
    verification: Arc<VerificationService<M, C>>,
}

impl<U, M, C> AccountService<U, M, C>
where
    U: UserRepository,
    M: MailerTrait,
    C: CodeCacheTrait,
{
    /// Create a new account service
    pub fn new(user_repository: Arc<U>, verification: Arc<VerificationService<M, C>>) -> Self {
        Self {
            user_repository,
            verification,
        }
    }

    /// Register a new account.
    ///
    /// The account starts in the initial lifecycle state and cannot log
    /// in until its email is verified. Duplicate email or username
    /// surfaces as `Conflict`.
    pub async fn register(
        &self,
        email: &str,
        username: Option<&str>,
        password: &str,
    ) -> DomainResult<User> {
        if !is_valid_email(email) {
            return Err(DomainError::Validation {
                message: "invalid email address".to_string(),
            });
        }
        if let Some(name) = username {
            if !is_valid_username(name) {
                return Err(DomainError::Validation {
                    message: "invalid username".to_string(),
                });
            }
        }
        if password.len() < MIN_PASSWORD_LENGTH {
            return Err(DomainError::Validation {
                message: format!("password must be at least {} characters", MIN_PASSWORD_LENGTH),
            });
        }

        let password_hash = password::hash_password(password)?;
        let user = self
            .user_repository
            .create(NewUser::registration(
                email.to_string(),
                username.map(|s| s.to_string()),
                password_hash,
            ))
            .await?;

        info!(user_id = user.id, "user registered");
        Ok(user)
    }

    /// List all accounts, ordered by id
    pub async fn list(&self) -> DomainResult<Vec<User>> {
        self.user_repository.find_all().await
    }

    /// Look up an account by email
    pub async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        self.user_repository.find_by_email(email).await
    }

    /// Delete an account. The store cascades the deletion to the user's
    /// revoked-token records.
    pub async fn delete(&self, id: i64) -> DomainResult<bool> {
        let deleted = self.user_repository.delete(id).await?;
        if deleted {
            info!(user_id = id, "user deleted");
        }
        Ok(deleted)
    }

    /// Email a verification code to an account.
    ///
    /// Advances a freshly created account to the waiting state. An
    /// already-verified account is refused; a banned one gets the usual
    /// account-state error.
    ///
    /// # Returns
    /// * `Ok(u64)` - TTL of the issued code in seconds
    pub async fn send_verification(&self, user_id: i64) -> DomainResult<u64> {
        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: "user".to_string(),
            })?;

        match user.status {
            UserStatus::Activated => {
                return Err(DomainError::Validation {
                    message: "email is already verified".to_string(),
                })
            }
            UserStatus::Banned => return Err(AuthError::AccountNotActive.into()),
            UserStatus::Created | UserStatus::WaitActivation => {}
        }

        let ttl = self.verification.send_code(&user.email).await?;

        if user.status == UserStatus::Created {
            self.user_repository
                .update_status(user.id, UserStatus::WaitActivation)
                .await?;
        }

        Ok(ttl)
    }

    /// Check a verification code and activate the account on success.
    pub async fn verify_code(&self, email: &str, code: &str) -> DomainResult<()> {
        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: "user".to_string(),
            })?;

        if !self.verification.verify_code(email, code).await? {
            return Err(AuthError::InvalidVerificationCode.into());
        }

        self.user_repository
            .update_status(user.id, UserStatus::Activated)
            .await?;
        info!(user_id = user.id, "email verified, account activated");
        Ok(())
    }
}
