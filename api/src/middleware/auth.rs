//! JWT authentication middleware for protecting API endpoints.
//!
//! Extracts the Bearer token from the Authorization header and verifies
//! it through the core token service, revocation check included, before
//! the request reaches a handler. On success an `AuthContext` is
//! injected into the request extensions.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    http::header::AUTHORIZATION,
    web, Error, FromRequest, HttpMessage, HttpRequest,
};
use async_trait::async_trait;
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use gh_core::domain::entities::token::Claims;
use gh_core::domain::entities::user::UserRole;
use gh_core::errors::DomainError;
use gh_core::repositories::RevokedTokenRepository;
use gh_core::services::token::TokenService;

/// Access-token verification behind dynamic dispatch, so the middleware
/// does not need the repository type parameter of `TokenService`.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify_access(&self, token: &str) -> Result<Claims, DomainError>;
}

#[async_trait]
impl<R: RevokedTokenRepository> TokenVerifier for TokenService<R> {
    async fn verify_access(&self, token: &str) -> Result<Claims, DomainError> {
        self.verify_access_token(token).await
    }
}

/// User authentication context injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// Email of the authenticated user (token subject)
    pub email: String,
    /// Role snapshot carried by the token
    pub role: UserRole,
    /// Unique token identifier, absent only on legacy tokens
    pub jti: Option<String>,
    /// When the token was issued, seconds since epoch
    pub issued_at: i64,
}

impl AuthContext {
    /// Creates a new authentication context from verified claims
    pub fn from_claims(claims: Claims) -> Self {
        Self {
            email: claims.sub,
            role: claims.role,
            jti: claims.jti,
            issued_at: claims.iat,
        }
    }
}

/// JWT authentication middleware factory
#[derive(Default)]
pub struct JwtAuth;

impl JwtAuth {
    /// Creates a new JWT authentication middleware
    pub fn new() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => {
                    return Err(ErrorUnauthorized("Missing or invalid Authorization header"));
                }
            };

            let verifier = req
                .app_data::<web::Data<Arc<dyn TokenVerifier>>>()
                .cloned()
                .ok_or_else(|| ErrorUnauthorized("Token verification not configured"))?;

            // The verification includes the revocation lookup; the error
            // text stays generic on purpose.
            let claims = verifier
                .verify_access(&token)
                .await
                .map_err(|_| ErrorUnauthorized("Invalid or expired token"))?;

            req.extensions_mut().insert(AuthContext::from_claims(claims));

            service.call(req).await
        })
    }
}

/// Extracts a Bearer token from a service request's Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

/// Extracts a Bearer token from a handler-level request. Used by the
/// endpoints that consume the raw token themselves (refresh, logout).
pub fn bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ErrorUnauthorized("Authentication required"));

        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_extraction_requires_the_scheme_prefix() {
        use actix_web::test;

        let with_scheme = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer token-123"))
            .to_srv_request();
        assert_eq!(
            extract_bearer_token(&with_scheme),
            Some("token-123".to_string())
        );

        let without_scheme = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "token-123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&without_scheme), None);

        let no_header = test::TestRequest::default().to_srv_request();
        assert_eq!(extract_bearer_token(&no_header), None);
    }

    #[test]
    fn bearer_extraction_from_handler_level_request() {
        use actix_web::test;

        let req = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer abc"))
            .to_http_request();
        assert_eq!(bearer_token(&req), Some("abc".to_string()));
    }
}
