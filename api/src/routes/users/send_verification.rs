//! Handler for POST /api/v1/users/send-verification

use actix_web::{web, HttpResponse};

use gh_core::repositories::{RevokedTokenRepository, UserRepository};
use gh_core::services::verification::{CodeCacheTrait, MailerTrait};

use crate::dto::user::{SendVerificationRequest, SendVerificationResponse};
use crate::handlers::handle_domain_error;

use super::super::AppState;

/// Email a verification code to an account.
///
/// # Responses
/// - 200: code stored and emailed; response carries the code's TTL
/// - 400: email already verified
/// - 404: no such user
/// - 503: mail delivery failed
pub async fn send_verification<U, R, M, C>(
    body: web::Json<SendVerificationRequest>,
    state: web::Data<AppState<U, R, M, C>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RevokedTokenRepository + 'static,
    M: MailerTrait + 'static,
    C: CodeCacheTrait + 'static,
{
    match state.account_service.send_verification(body.id).await {
        Ok(ttl) => HttpResponse::Ok().json(SendVerificationResponse {
            sent: true,
            message: "Verification code sent".to_string(),
            code_expires_in_seconds: ttl,
        }),
        Err(error) => handle_domain_error(&error),
    }
}
