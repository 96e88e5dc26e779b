//! Error types for authentication and token management.
//!
//! Authentication failures are deliberately coarse: a login attempt with
//! an unknown email and one with a wrong password both produce
//! `InvalidCredentials`, so responses cannot be used to enumerate
//! accounts. Token-type mismatch is the one distinctly surfaced token
//! failure, since it signals client misuse rather than an attack.

use thiserror::Error;

/// Authentication and account-state errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Account is not active")]
    AccountNotActive,

    #[error("User not found")]
    UserNotFound,

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Invalid verification code")]
    InvalidVerificationCode,

    #[error("Email delivery failure")]
    EmailDeliveryFailure,
}

/// Token validation and management errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Malformed token")]
    MalformedToken,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Token expired")]
    TokenExpired,

    #[error("Wrong token type: expected {expected}, got {actual}")]
    WrongTokenType { expected: String, actual: String },

    #[error("Token revoked")]
    TokenRevoked,

    #[error("No token lifetime configured")]
    TtlNotConfigured,

    #[error("Key loading failed: {message}")]
    KeyLoadError { message: String },

    #[error("Token generation failed")]
    GenerationFailed,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DomainError;

    #[test]
    fn wrong_token_type_names_both_sides() {
        let err = TokenError::WrongTokenType {
            expected: "refresh".to_string(),
            actual: "access".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("refresh"));
        assert!(message.contains("access"));
    }

    #[test]
    fn token_error_converts_to_domain_error() {
        let err: DomainError = TokenError::TokenRevoked.into();
        assert!(matches!(err, DomainError::Token(TokenError::TokenRevoked)));
    }

    #[test]
    fn invalid_credentials_message_names_no_cause() {
        // The message must not reveal which check failed.
        let message = AuthError::InvalidCredentials.to_string().to_lowercase();
        assert!(!message.contains("password"));
        assert!(!message.contains("email"));
        assert!(!message.contains("user"));
    }
}
