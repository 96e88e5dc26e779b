//! Handler for POST /api/v1/auth/refresh

use actix_web::{HttpRequest, HttpResponse};

use gh_core::repositories::{RevokedTokenRepository, UserRepository};
use gh_core::services::verification::{CodeCacheTrait, MailerTrait};

use crate::dto::auth::TokenPairResponse;
use crate::dto::ErrorResponse;
use crate::handlers::handle_domain_error;
use crate::middleware::auth::bearer_token;

use super::super::AppState;

/// Exchange a bearer refresh token for a fresh token pair.
///
/// # Headers
/// `Authorization: Bearer {refresh_token}`
///
/// # Responses
/// - 200: new token pair
/// - 400: an access token was presented instead of a refresh token
/// - 401: missing, invalid, expired, or revoked refresh token
/// - 403: account no longer active
pub async fn refresh<U, R, M, C>(
    req: HttpRequest,
    state: actix_web::web::Data<AppState<U, R, M, C>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RevokedTokenRepository + 'static,
    M: MailerTrait + 'static,
    C: CodeCacheTrait + 'static,
{
    let Some(token) = bearer_token(&req) else {
        return HttpResponse::Unauthorized().json(ErrorResponse::new(
            "missing_token",
            "Missing or invalid Authorization header",
        ));
    };

    match state.auth_service.refresh(&token).await {
        Ok(pair) => HttpResponse::Ok().json(TokenPairResponse::from(pair)),
        Err(error) => handle_domain_error(&error),
    }
}
