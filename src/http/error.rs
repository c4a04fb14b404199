use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use crate::storage::StorageError;

/// Errors a handler can surface to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::NotFound(what) => (StatusCode::NOT_FOUND, format!("{what} not found")),
            // Validation feedback goes back verbatim so the form can tell
            // the visitor what to fix.
            ApiError::Storage(StorageError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            ApiError::Storage(StorageError::Unavailable(reason)) => {
                log::error!("storage unavailable: {reason}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "storage unavailable".to_string(),
                )
            }
            ApiError::Storage(StorageError::Backend(err)) => {
                log::error!("storage failure: {err:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error".to_string(),
                )
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
