//! Handler for POST /api/v1/users/create

use actix_web::{web, HttpResponse};
use validator::Validate;

use gh_core::repositories::{RevokedTokenRepository, UserRepository};
use gh_core::services::verification::{CodeCacheTrait, MailerTrait};

use crate::dto::user::{CreateUserRequest, UserResponse};
use crate::handlers::{handle_domain_error, validation_error_response};

use super::super::AppState;

/// Register a new account.
///
/// The account starts unverified and cannot log in until the email
/// verification flow completes.
///
/// # Responses
/// - 201: created user
/// - 400: invalid email, username, or password
/// - 409: email or username already taken
pub async fn create<U, R, M, C>(
    body: web::Json<CreateUserRequest>,
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
        .register(&body.email, body.username.as_deref(), &body.password)
        .await
    {
        Ok(user) => HttpResponse::Created().json(UserResponse::from(user)),
        Err(error) => handle_domain_error(&error),
    }
}
