//! API error type and its HTTP mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use luach_shared::ValidationError;
use serde_json::json;
use thiserror::Error;

use crate::service::StorageError;

/// Everything a handler can fail with, mapped onto the REST contract's
/// status codes and `{"message": …}` bodies.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("invalid payload: {0}")]
    Validation(#[from] ValidationError),

    #[error("malformed request body")]
    BadRequest,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("failed to {action}: {source}")]
    Storage {
        action: &'static str,
        source: StorageError,
    },
}

impl ApiError {
    pub fn storage(action: &'static str, source: StorageError) -> Self {
        Self::Storage { action, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Validation(err) => {
                tracing::warn!("rejected payload: {err}");
                (StatusCode::BAD_REQUEST, "Invalid data provided".to_string())
            }
            Self::BadRequest => (StatusCode::BAD_REQUEST, "Invalid data provided".to_string()),
            Self::NotFound(what) => (StatusCode::NOT_FOUND, format!("{what} not found")),
            Self::Storage { action, source } => {
                tracing::error!("storage failure during {action}: {source}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to {action}"),
                )
            }
        };
        (status, Json(json!({ "message": message }))).into_response()
    }
}
