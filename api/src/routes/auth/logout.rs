//! Handler for POST /api/v1/auth/logout

use actix_web::{HttpRequest, HttpResponse};

use gh_core::repositories::{RevokedTokenRepository, UserRepository};
use gh_core::services::verification::{CodeCacheTrait, MailerTrait};

use crate::dto::auth::LogoutResponse;
use crate::dto::ErrorResponse;
use crate::handlers::handle_domain_error;
use crate::middleware::auth::bearer_token;

use super::super::AppState;

/// Revoke the presented access token.
///
/// Best-effort prompt revocation: once this returns 200 the token's
/// identifier is on the deny list. Revoking the same token twice is
/// still a success; `revoked` is false when there was nothing left to
/// write (already revoked, or the token carries no identifier).
///
/// # Headers
/// `Authorization: Bearer {access_token}`
///
/// # Responses
/// - 200: revocation recorded (or nothing to record)
/// - 401: missing, invalid, expired, or already-revoked token
pub async fn logout<U, R, M, C>(
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

    match state.auth_service.logout(&token).await {
        Ok(outcome) => HttpResponse::Ok().json(LogoutResponse {
            message: "Logged out successfully".to_string(),
            revoked: outcome.revoked,
        }),
        Err(error) => handle_domain_error(&error),
    }
}
