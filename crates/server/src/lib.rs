//! clinicals-server library crate
//!
//! Exposes `build_app`, `config`, and `db` for integration tests.
//! The actual binary entrypoint is in `main.rs`.

pub mod config;
pub mod db;
mod error;
mod routes;
mod services;

use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use db::AppState;

/// Build the full application router with all routes and middleware.
///
/// Extracted from `main()` so integration tests can construct the app
/// without binding to a TCP port.
pub fn build_app(state: AppState, config: &Config) -> Router {
    // Build CORS layer; fully open by default
    let cors = if config.cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Build application
    Router::new()
        .route("/health", get(routes::health::check))
        .merge(routes::api_routes())
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
