//! Handler for DELETE /api/v1/users/delete/{id}

use actix_web::{web, HttpResponse};

use gh_core::repositories::{RevokedTokenRepository, UserRepository};
use gh_core::services::verification::{CodeCacheTrait, MailerTrait};

use crate::dto::user::DeleteUserResponse;
use crate::dto::ErrorResponse;
use crate::handlers::handle_domain_error;

use super::super::AppState;

/// Delete an account. The store cascades the deletion to the user's
/// revoked-token records.
///
/// # Responses
/// - 200: deleted
/// - 404: no such user
pub async fn delete<U, R, M, C>(
    path: web::Path<i64>,
    state: web::Data<AppState<U, R, M, C>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RevokedTokenRepository + 'static,
    M: MailerTrait + 'static,
    C: CodeCacheTrait + 'static,
{
    let id = path.into_inner();

    match state.account_service.delete(id).await {
        Ok(true) => HttpResponse::Ok().json(DeleteUserResponse {
            deleted: true,
            message: "User deleted".to_string(),
        }),
        Ok(false) => {
            HttpResponse::NotFound().json(ErrorResponse::new("not_found", "user not found"))
        }
        Err(error) => handle_domain_error(&error),
    }
}
