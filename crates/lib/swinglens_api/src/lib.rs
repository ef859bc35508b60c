//! # swinglens_api
//!
//! HTTP API library for SwingLens.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};

use swinglens_core::auth::otp::CodeGenerator;
use swinglens_core::auth::otp_store::OtpStore;

use crate::config::ApiConfig;
use crate::handlers::{auth, health};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool.
    pub pool: PgPool,
    /// One-time code store (Redis in production).
    pub otp_store: Arc<dyn OtpStore>,
    /// Code generation strategy selected at startup.
    pub code_generator: CodeGenerator,
    /// API configuration.
    pub config: ApiConfig,
}

/// Run embedded database migrations.
///
/// Delegates to `swinglens_core::migrate::migrate()` which owns the
/// migration files.
pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    swinglens_core::migrate::migrate(pool).await
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/health", get(health::health_handler))
        .route("/auth/player/otp/send", post(auth::send_otp_handler))
        .route("/auth/player/otp/verify", post(auth::verify_otp_handler))
        .route("/auth/coach/login", post(auth::coach_login_handler));

    Router::new()
        .nest("/api/v1", api)
        .layer(cors)
        .with_state(state)
}
