//! Health check endpoints.

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use crate::json::{HealthResponse, ReadyResponse};
use crate::AppState;

/// Health check routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/ready", get(ready_check))
}

/// Liveness handler. Does not touch the store.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: chrono::Utc::now(),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Readiness handler.
async fn ready_check(State(state): State<AppState>) -> (StatusCode, Json<ReadyResponse>) {
    match state.client.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(ReadyResponse {
                status: "ready",
                store_connected: true,
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "store probe failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadyResponse {
                    status: "degraded",
                    store_connected: false,
                }),
            )
        }
    }
}
