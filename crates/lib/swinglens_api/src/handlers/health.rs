//! Health endpoint — liveness probe with a database connectivity check.

use axum::Json;
use axum::extract::State;

use crate::AppState;
use crate::models::HealthResponse;

/// `GET /api/v1/health` — reports liveness and database connectivity.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_connected = sqlx::query("SELECT 1").execute(&state.pool).await.is_ok();
    Json(HealthResponse {
        status: "ok",
        db_connected,
    })
}
