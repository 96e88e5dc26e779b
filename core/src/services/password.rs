//! Password hashing collaborators.
//!
//! Thin wrappers around bcrypt: salted, adaptive, salt embedded in the
//! digest. The dummy verification exists so that a login attempt against
//! a nonexistent account costs the same as one against a real account.

use once_cell::sync::Lazy;

use crate::errors::DomainError;

/// Digest verified when the account does not exist
static DUMMY_HASH: Lazy<String> = Lazy::new(|| {
    bcrypt::hash("gatehouse-dummy-password", bcrypt::DEFAULT_COST)
        .expect("bcrypt hashing of a constant cannot fail")
});

/// Hash a password with a random salt
pub fn hash_password(password: &str) -> Result<String, DomainError> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(|e| DomainError::Internal {
        message: format!("password hashing failed: {}", e),
    })
}

/// Check a password against a stored digest
pub fn verify_password(password: &str, digest: &str) -> bool {
    bcrypt::verify(password, digest).unwrap_or(false)
}

/// Burn a comparable amount of CPU when there is no digest to check
pub fn dummy_verify(password: &str) {
    let _ = bcrypt::verify(password, &DUMMY_HASH);
}
