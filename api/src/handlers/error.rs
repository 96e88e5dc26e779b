//! Mapping from domain errors to HTTP responses.
//!
//! Authentication failures come out uniform: malformed, badly signed,
//! expired, and revoked tokens all produce the same 401 body, and
//! unknown-email and wrong-password logins are indistinguishable. The
//! exceptions are spelled out in the match below: token-type mismatch is
//! client misuse (400 with detail), account-state problems are the
//! caller's own state (403), and store failures are opaque 500s that get
//! logged in full.

use actix_web::HttpResponse;

use gh_core::errors::{AuthError, DomainError, TokenError};

use crate::dto::ErrorResponse;

/// Convert a domain error into its HTTP response
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::Auth(auth_error) => match auth_error {
            AuthError::InvalidCredentials => HttpResponse::Unauthorized().json(
                ErrorResponse::new("invalid_credentials", "Invalid credentials"),
            ),
            AuthError::AccountNotActive => HttpResponse::Forbidden().json(ErrorResponse::new(
                "account_not_active",
                "Account is not active",
            )),
            AuthError::UserNotFound => HttpResponse::NotFound().json(ErrorResponse::new(
                "user_not_found",
                "User not found",
            )),
            AuthError::UserAlreadyExists => HttpResponse::Conflict().json(ErrorResponse::new(
                "user_already_exists",
                "User already exists",
            )),
            AuthError::InvalidVerificationCode => HttpResponse::BadRequest().json(
                ErrorResponse::new("invalid_verification_code", "Invalid or expired code"),
            ),
            AuthError::EmailDeliveryFailure => HttpResponse::ServiceUnavailable().json(
                ErrorResponse::new(
                    "email_delivery_failure",
                    "Could not send the verification email. Please try again later",
                ),
            ),
        },
        DomainError::Token(token_error) => match token_error {
            // Client misuse: presented the wrong kind of token. Surfaced
            // distinctly, unlike the other token failures.
            TokenError::WrongTokenType { expected, actual } => {
                HttpResponse::BadRequest().json(ErrorResponse::new(
                    "wrong_token_type",
                    format!("Expected a {} token, got a {} token", expected, actual),
                ))
            }
            TokenError::MalformedToken
            | TokenError::InvalidSignature
            | TokenError::TokenExpired
            | TokenError::TokenRevoked => HttpResponse::Unauthorized().json(ErrorResponse::new(
                "invalid_token",
                "Invalid or expired token",
            )),
            // Server-side configuration problems
            TokenError::TtlNotConfigured
            | TokenError::KeyLoadError { .. }
            | TokenError::GenerationFailed => {
                log::error!("token subsystem failure: {:?}", token_error);
                internal_error()
            }
        },
        DomainError::Validation { message } => HttpResponse::BadRequest().json(
            ErrorResponse::new("validation_error", message),
        ),
        DomainError::NotFound { resource } => HttpResponse::NotFound().json(ErrorResponse::new(
            "not_found",
            format!("{} not found", resource),
        )),
        DomainError::Conflict { resource } => HttpResponse::Conflict().json(ErrorResponse::new(
            "conflict",
            format!("{} already exists", resource),
        )),
        DomainError::StoreUnavailable { message } => {
            log::error!("store unavailable: {}", message);
            internal_error()
        }
        DomainError::Internal { message } => {
            log::error!("internal error: {}", message);
            internal_error()
        }
    }
}

/// 400 response for DTO validation failures
pub fn validation_error_response(errors: &validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse::new(
        "validation_error",
        errors.to_string(),
    ))
}

fn internal_error() -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorResponse::new(
        "internal_error",
        "An internal error occurred",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn token_failures_map_uniformly_to_401() {
        for error in [
            TokenError::MalformedToken,
            TokenError::InvalidSignature,
            TokenError::TokenExpired,
            TokenError::TokenRevoked,
        ] {
            let response = handle_domain_error(&DomainError::Token(error));
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        }
    }

    #[test]
    fn wrong_token_type_is_distinct() {
        let response = handle_domain_error(&DomainError::Token(TokenError::WrongTokenType {
            expected: "refresh".to_string(),
            actual: "access".to_string(),
        }));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn account_state_maps_to_403() {
        let response = handle_domain_error(&DomainError::Auth(AuthError::AccountNotActive));
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn store_failures_map_to_500() {
        let response = handle_domain_error(&DomainError::StoreUnavailable {
            message: "pool exhausted".to_string(),
        });
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn conflicts_map_to_409() {
        let response = handle_domain_error(&DomainError::Conflict {
            resource: "user".to_string(),
        });
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
