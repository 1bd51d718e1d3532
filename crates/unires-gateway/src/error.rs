//! Error handling for the gateway.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::json::ErrorResponse;

/// Application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// A looked-up entity does not exist.
    #[error("{0}")]
    NotFound(String),
    /// Request parameters failed validation.
    #[error("{0}")]
    BadRequest(String),
    /// Store or pool failure.
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "request rejected");
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<unires_client::Error> for AppError {
    fn from(err: unires_client::Error) -> Self {
        match err {
            unires_client::Error::Domain(domain) => domain.into(),
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl From<unires_core::Error> for AppError {
    fn from(err: unires_core::Error) -> Self {
        match err {
            unires_core::Error::NotFound(_) => AppError::NotFound(err.to_string()),
            unires_core::Error::InvalidFilter { .. } => AppError::BadRequest(err.to_string()),
            unires_core::Error::InvalidValue { .. } => AppError::Internal(err.to_string()),
        }
    }
}
