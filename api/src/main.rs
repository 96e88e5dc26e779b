use std::env;
use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use jsonwebtoken::Algorithm;
use log::info;
use tracing_subscriber::EnvFilter;

use gh_core::services::account::AccountService;
use gh_core::services::auth::AuthService;
use gh_core::services::token::{
    CredentialCodec, JwtKeys, RevocationSweeper, SweeperConfig, TokenService, TokenServiceConfig,
};
use gh_core::services::verification::{VerificationService, VerificationServiceConfig};
use gh_infra::cache::{RedisClient, VerificationCache};
use gh_infra::database::{DatabasePool, MySqlRevokedTokenRepository, MySqlUserRepository};
use gh_infra::mail::SmtpMailer;
use gh_shared::config::AppConfig;

use gh_api::app::create_app;
use gh_api::middleware::auth::TokenVerifier;
use gh_api::routes::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logging; the tracing-log bridge picks up `log` records
    // from the API layer alongside tracing events from the core.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting Gatehouse API server");

    let config = AppConfig::from_env();
    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    // Database and cache clients, constructed once and shared
    let db_pool = DatabasePool::new(&config.database)
        .await
        .expect("failed to create database pool");
    db_pool
        .health_check()
        .await
        .expect("database is not reachable");
    let redis_client = RedisClient::new(&config.cache)
        .await
        .expect("failed to create Redis client");

    // Repositories
    let user_repository = Arc::new(MySqlUserRepository::new(db_pool.get_pool().clone()));
    let revoked_repository = Arc::new(MySqlRevokedTokenRepository::new(db_pool.get_pool().clone()));

    // Token service: signing keys, codec, validation
    let token_config =
        TokenServiceConfig::from_jwt_config(&config.jwt).expect("invalid JWT configuration");
    let keys = if token_config.algorithm == Algorithm::HS256 {
        let secret = env::var("JWT_SECRET")
            .unwrap_or_else(|_| "development-secret-change-in-production".to_string());
        JwtKeys::from_secret(&secret)
    } else {
        JwtKeys::from_rsa_pem_files(&config.jwt.private_key_path, &config.jwt.public_key_path)
            .expect("failed to load JWT signing keys")
    };
    let codec = CredentialCodec::new(keys, token_config.algorithm);
    let token_service = Arc::new(TokenService::new(
        Arc::clone(&revoked_repository),
        codec,
        token_config,
    ));

    // Periodic sweep of expired revocation records, decoupled from logout
    Arc::new(RevocationSweeper::new(
        Arc::clone(&revoked_repository),
        SweeperConfig::default(),
    ))
    .start_background_task();

    // Verification flow: Redis-backed codes, SMTP delivery
    let mailer = Arc::new(SmtpMailer::new(&config.mail).expect("invalid mail configuration"));
    let verification_cache = Arc::new(VerificationCache::new(redis_client));
    let verification_service = Arc::new(VerificationService::new(
        mailer,
        verification_cache,
        VerificationServiceConfig {
            code_ttl_seconds: config.cache.verification_code_ttl,
        },
    ));

    // Services
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repository),
        Arc::clone(&token_service),
    ));
    let account_service = Arc::new(AccountService::new(
        Arc::clone(&user_repository),
        verification_service,
    ));

    let app_state = web::Data::new(AppState {
        auth_service,
        account_service,
    });
    let verifier: Arc<dyn TokenVerifier> = token_service;
    let verifier_data = web::Data::new(verifier);

    let result = HttpServer::new(move || create_app(app_state.clone(), verifier_data.clone()))
        .bind(&bind_address)?
        .run()
        .await;

    info!("Shutting down, closing database pool");
    db_pool.close().await;

    result
}
