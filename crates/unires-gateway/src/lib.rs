//! University results HTTP/JSON gateway.
//!
//! This crate serves the results portal API over a pooled, read-only
//! connection to the results store.

pub mod config;
pub mod error;
pub mod json;
pub mod routes;

pub use config::{Args, GatewayConfig};
pub use error::AppError;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use unires_client::Client;

/// Application state shared across all routes.
#[derive(Clone)]
pub struct AppState {
    /// Store client (pooled, cheap to clone).
    pub client: Client,
}

impl AppState {
    /// Create new application state.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

/// Create the router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::health::routes())
        .merge(routes::catalog::routes())
        .merge(routes::results::routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
