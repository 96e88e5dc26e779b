//! Handler for POST /api/v1/users/verify-code

use actix_web::{web, HttpResponse};
use validator::Validate;

use gh_core::repositories::{RevokedTokenRepository, UserRepository};
use gh_core::services::verification::{CodeCacheTrait, MailerTrait};

use crate::dto::user::{VerifyCodeRequest, VerifyCodeResponse};
use crate::handlers::{handle_domain_error, validation_error_response};

use super::super::AppState;

/// Check a verification code and activate the account on success.
/// The code is single-use: a successful check consumes it.
///
/// # Responses
/// - 200: account activated
/// - 400: wrong, expired, or malformed code
/// - 404: no such user
pub async fn verify_code<U, R, M, C>(
    body: web::Json<VerifyCodeRequest>,
    state: web::Data<AppState<U, R, M, C>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RevokedTokenRepository + 'static,
    M: MailerTrait + 'static,
    C: CodeCacheTrait + 'static,
{
    if let Err(errors) = body.validate() {
        return validation_error_response(&errors);
    }

    match state
        .account_service
        .verify_code(&body.email, &body.code)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(VerifyCodeResponse {
            verified: true,
            message: "Email verified".to_string(),
        }),
        Err(error) => handle_domain_error(&error),
    }
}
