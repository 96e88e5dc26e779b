//! Application factory
//!
//! Wires the route table, middleware stack, and injected state into an
//! Actix application. The binary entrypoint builds the concrete services
//! and hands them in; tests can do the same with mocks.

use std::sync::Arc;

use actix_web::{
    middleware::{Compat, Logger},
    web, App, HttpResponse,
};

use gh_core::repositories::{RevokedTokenRepository, UserRepository};
use gh_core::services::verification::{CodeCacheTrait, MailerTrait};

use crate::middleware::auth::{JwtAuth, TokenVerifier};
use crate::middleware::cors::create_cors;
use crate::routes::auth::{login, logout, refresh};
use crate::routes::users::{create, delete, list, me, send_verification, verify_code};
use crate::routes::AppState;

/// Create and configure the application with all dependencies
pub fn create_app<U, R, M, C>(
    app_state: web::Data<AppState<U, R, M, C>>,
    token_verifier: web::Data<Arc<dyn TokenVerifier>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    R: RevokedTokenRepository + 'static,
    M: MailerTrait + 'static,
    C: CodeCacheTrait + 'static,
{
    let cors = create_cors();

    App::new()
        .app_data(app_state)
        .app_data(token_verifier)
        // Compat boxes each middleware's response body, keeping the
        // factory's response type independent of the middleware stack.
        .wrap(Compat::new(Logger::default()))
        .wrap(Compat::new(cors))
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .route("/login", web::post().to(login::<U, R, M, C>))
                        .route("/refresh", web::post().to(refresh::<U, R, M, C>))
                        .route("/logout", web::post().to(logout::<U, R, M, C>)),
                )
                .service(
                    web::scope("/users")
                        .service(
                            web::resource("/me")
                                .wrap(JwtAuth::new())
                                .route(web::get().to(me::<U, R, M, C>)),
                        )
                        .route("/create", web::post().to(create::<U, R, M, C>))
                        .route("/delete/{id}", web::delete().to(delete::<U, R, M, C>))
                        .route(
                            "/send-verification",
                            web::post().to(send_verification::<U, R, M, C>),
                        )
                        .route("/verify-code", web::post().to(verify_code::<U, R, M, C>))
                        .route("", web::get().to(list::<U, R, M, C>)),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "gatehouse-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
