//! JSON response types for the HTTP gateway.
//!
//! Domain payloads (universities, result rows, scorecards, stats) serialize
//! directly from `unires_core`; only gateway-specific bodies live here.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message.
    pub error: String,
}

/// Liveness response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process serves requests.
    pub status: &'static str,
    /// Time the response was produced.
    pub timestamp: DateTime<Utc>,
    /// Gateway version.
    pub version: &'static str,
}

/// Readiness response.
#[derive(Debug, Serialize)]
pub struct ReadyResponse {
    /// `"ready"` or `"degraded"`.
    pub status: &'static str,
    /// Whether the store answered a probe query.
    pub store_connected: bool,
}
