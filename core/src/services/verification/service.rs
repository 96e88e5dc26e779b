//! Main verification service implementation

use rand::rngs::OsRng;
use rand::RngCore;
use std::sync::Arc;
use tracing::{info, warn};

use constant_time_eq::constant_time_eq;

use crate::errors::{AuthError, DomainError, DomainResult};

use super::traits::{CodeCacheTrait, MailerTrait};

/// Number of digits in a verification code
pub const CODE_LENGTH: usize = 6;

/// Configuration for the verification service
#[derive(Debug, Clone)]
pub struct VerificationServiceConfig {
    /// Lifetime of a stored code in seconds
    pub code_ttl_seconds: u64,
}

impl Default for VerificationServiceConfig {
    fn default() -> Self {
        Self {
            code_ttl_seconds: 300,
        }
    }
}

/// Verification service for emailing and checking one-time codes
pub struct VerificationService<M: MailerTrait, C: CodeCacheTrait> {
    /// Mailer for delivering codes
    mailer: Arc<M>,
    /// Cache holding outstanding codes
    cache: Arc<C>,
    /// Service configuration
    config: VerificationServiceConfig,
}

impl<M: MailerTrait, C: CodeCacheTrait> VerificationService<M, C> {
    /// Create a new verification service
    pub fn new(mailer: Arc<M>, cache: Arc<C>, config: VerificationServiceConfig) -> Self {
        Self {
            mailer,
            cache,
            config,
        }
    }

    /// Generate a code, store it with a TTL, and email it.
    ///
    /// A previous outstanding code for the same address is overwritten;
    /// only the newest code verifies.
    ///
    /// # Returns
    /// * `Ok(u64)` - The TTL of the stored code in seconds
    pub async fn send_code(&self, email: &str) -> DomainResult<u64> {
        let code = generate_code();

        self.cache
            .set_with_ttl(&Self::cache_key(email), &code, self.config.code_ttl_seconds)
            .await
            .map_err(|e| DomainError::StoreUnavailable {
                message: format!("failed to store verification code: {}", e),
            })?;

        if let Err(e) = self.mailer.send_verification_code(email, &code).await {
            warn!(email, error = %e, "verification email delivery failed");
            return Err(AuthError::EmailDeliveryFailure.into());
        }

        info!(email, "verification code sent");
        Ok(self.config.code_ttl_seconds)
    }

    /// Check a code for an address.
    ///
    /// A matching code is consumed: the cache entry is deleted so the
    /// code is single-use. Missing, expired, and mismatched codes all
    /// report `false`.
    pub async fn verify_code(&self, email: &str, code: &str) -> DomainResult<bool> {
        let key = Self::cache_key(email);
        let stored = self
            .cache
            .get(&key)
            .await
            .map_err(|e| DomainError::StoreUnavailable {
                message: format!("failed to read verification code: {}", e),
            })?;

        let Some(stored) = stored else {
            return Ok(false);
        };

        let matches =
            stored.len() == code.len() && constant_time_eq(stored.as_bytes(), code.as_bytes());
        if matches {
            // Used codes are burned
            let _ = self.cache.delete(&key).await;
            info!(email, "verification code accepted");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn cache_key(email: &str) -> String {
        format!("verification:code:{}", email)
    }
}

/// Six digits from the OS CSPRNG
fn generate_code() -> String {
    let mut rng = OsRng;
    (0..CODE_LENGTH)
        .map(|_| char::from(b'0' + (rng.next_u32() % 10) as u8))
        .collect()
}
