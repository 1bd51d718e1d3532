//! University listing and summary statistics endpoints.

use axum::{extract::State, routing::get, Json, Router};
use unires_core::{SummaryStats, University};

use crate::error::AppError;
use crate::AppState;

/// Catalog routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/universities", get(handle_list_universities))
        .route("/api/stats", get(handle_stats))
}

async fn handle_list_universities(
    State(state): State<AppState>,
) -> Result<Json<Vec<University>>, AppError> {
    Ok(Json(state.client.universities().await?))
}

async fn handle_stats(State(state): State<AppState>) -> Result<Json<SummaryStats>, AppError> {
    Ok(Json(state.client.stats().await?))
}
