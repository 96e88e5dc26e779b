//! Handler for GET /api/v1/users/me

use actix_web::{web, HttpResponse};

use gh_core::repositories::{RevokedTokenRepository, UserRepository};
use gh_core::services::verification::{CodeCacheTrait, MailerTrait};

use crate::dto::user::MeResponse;
use crate::dto::ErrorResponse;
use crate::handlers::handle_domain_error;
use crate::middleware::auth::AuthContext;

use super::super::AppState;

/// Return the authenticated user's own profile.
///
/// Requires a valid, unrevoked access token; the JWT middleware performs
/// the verification and injects the context.
pub async fn me<U, R, M, C>(
    auth: AuthContext,
    state: web::Data<AppState<U, R, M, C>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RevokedTokenRepository + 'static,
    M: MailerTrait + 'static,
    C: CodeCacheTrait + 'static,
{
    match state.account_service.find_by_email(&auth.email).await {
        Ok(Some(user)) => HttpResponse::Ok().json(MeResponse {
            email: user.email,
            username: user.username,
            role: user.role,
            logged_in_at: auth.issued_at,
        }),
        // The token verified but its subject is gone: account deleted
        // after issuance.
        Ok(None) => HttpResponse::Unauthorized().json(ErrorResponse::new(
            "invalid_token",
            "Invalid or expired token",
        )),
        Err(error) => handle_domain_error(&error),
    }
}
