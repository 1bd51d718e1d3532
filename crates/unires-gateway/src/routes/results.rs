//! Result listing and scorecard endpoints.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use unires_core::{ResultFilter, ResultRow, Scorecard};

use crate::error::AppError;
use crate::AppState;

/// Result routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/results", get(handle_list_results))
        .route("/api/results/student/:reg_no", get(handle_scorecard))
}

/// Raw query parameters for result listings.
///
/// Kept as strings so blank values from the dashboard's unset selects are
/// accepted and bad values produce a JSON error body.
#[derive(Debug, Default, Deserialize)]
pub struct ResultParams {
    /// University id.
    pub university: Option<String>,
    /// Semester number.
    pub semester: Option<String>,
    /// Examination year.
    pub year: Option<String>,
}

impl ResultParams {
    /// Validate into a typed filter.
    pub fn to_filter(&self) -> Result<ResultFilter, unires_core::Error> {
        ResultFilter::from_params(
            self.university.as_deref(),
            self.semester.as_deref(),
            self.year.as_deref(),
        )
    }
}

/// Handle a filtered result listing.
async fn handle_list_results(
    State(state): State<AppState>,
    Query(params): Query<ResultParams>,
) -> Result<Json<Vec<ResultRow>>, AppError> {
    let filter = params.to_filter()?;
    let rows = state.client.results(filter).await?;
    Ok(Json(rows))
}

/// Handle a scorecard lookup by registration number.
async fn handle_scorecard(
    State(state): State<AppState>,
    Path(reg_no): Path<String>,
) -> Result<Json<Scorecard>, AppError> {
    let card = state.client.scorecard(reg_no).await?;
    Ok(Json(card))
}
