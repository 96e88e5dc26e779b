//! Handler for POST /api/v1/auth/login

use actix_web::{web, HttpResponse};
use validator::Validate;

use gh_core::repositories::{RevokedTokenRepository, UserRepository};
use gh_core::services::verification::{CodeCacheTrait, MailerTrait};

use crate::dto::auth::{LoginRequest, TokenPairResponse};
use crate::handlers::{handle_domain_error, validation_error_response};

use super::super::AppState;

/// Authenticate with email and password and receive a token pair.
///
/// # Request (form)
/// `username` (the account email) and `password`.
///
/// # Responses
/// - 200: token pair
/// - 401: invalid credentials (identical for unknown email and wrong password)
/// - 403: account not activated or banned
pub async fn login<U, R, M, C>(
    form: web::Form<LoginRequest>,
    state: web::Data<AppState<U, R, M, C>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RevokedTokenRepository + 'static,
    M: MailerTrait + 'static,
    C: CodeCacheTrait + 'static,
{
    if let Err(errors) = form.validate() {
        return validation_error_response(&errors);
    }

    match state.auth_service.login(&form.username, &form.password).await {
        Ok(pair) => HttpResponse::Ok().json(TokenPairResponse::from(pair)),
        Err(error) => handle_domain_error(&error),
    }
}
