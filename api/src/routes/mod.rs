//! Route handlers and shared application state

pub mod auth;
pub mod users;

use std::sync::Arc;

use gh_core::repositories::{RevokedTokenRepository, UserRepository};
use gh_core::services::account::AccountService;
use gh_core::services::auth::AuthService;
use gh_core::services::verification::{CodeCacheTrait, MailerTrait};

/// Application state shared by all handlers.
///
/// Holds the service layer behind `Arc`s; every collaborator was
/// constructed once at startup and injected here. Handlers never build
/// their own clients.
pub struct AppState<U, R, M, C>
where
    U: UserRepository,
    R: RevokedTokenRepository,
    M: MailerTrait,
    C: CodeCacheTrait,
{
    /// Session lifecycle: login, refresh, logout
    pub auth_service: Arc<AuthService<U, R>>,
    /// Account management and email verification
    pub account_service: Arc<AccountService<U, M, C>>,
}
