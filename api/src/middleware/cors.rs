//! CORS configuration for the HTTP surface.
//!
//! Development allows any origin; production only the origins listed in
//! `ALLOWED_ORIGINS` (comma-separated).

use actix_cors::Cors;
use actix_web::http::{header, Method};
use std::env;

use gh_shared::config::Environment;

const DEFAULT_PREFLIGHT_MAX_AGE: usize = 3600;

/// Build the CORS middleware for the current environment.
pub fn create_cors() -> Cors {
    let environment = Environment::from_env();
    log::info!("configuring CORS for {} environment", environment);

    let cors = Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(preflight_max_age());

    if environment.is_production() {
        restrict_origins(cors)
    } else {
        cors.allow_any_origin()
    }
}

fn restrict_origins(mut cors: Cors) -> Cors {
    let allowed = env::var("ALLOWED_ORIGINS").unwrap_or_default();
    for origin in allowed.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        cors = cors.allowed_origin(origin);
    }
    cors
}

fn preflight_max_age() -> usize {
    env::var("CORS_MAX_AGE")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_PREFLIGHT_MAX_AGE)
}
