//! Handler for GET /api/v1/users/

use actix_web::{web, HttpResponse};

use gh_core::repositories::{RevokedTokenRepository, UserRepository};
use gh_core::services::verification::{CodeCacheTrait, MailerTrait};

use crate::dto::user::UserResponse;
use crate::handlers::handle_domain_error;

use super::super::AppState;

/// List all registered users.
pub async fn list<U, R, M, C>(state: web::Data<AppState<U, R, M, C>>) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RevokedTokenRepository + 'static,
    M: MailerTrait + 'static,
    C: CodeCacheTrait + 'static,
{
    match state.account_service.list().await {
        Ok(users) => {
            let response: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
            HttpResponse::Ok().json(response)
        }
        Err(error) => handle_domain_error(&error),
    }
}
