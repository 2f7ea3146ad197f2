//! Mapping of core errors onto HTTP responses
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use pantry_core::{CoreError, ItemError};

/// Error body returned to clients: `{ "error": "..." }`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug)]
pub struct ApiError(pub CoreError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            CoreError::Item(ItemError::NameRequired) => StatusCode::BAD_REQUEST,
            CoreError::Item(ItemError::NotFound(_)) => StatusCode::NOT_FOUND,
            CoreError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        Self(e)
    }
}

impl From<ItemError> for ApiError {
    fn from(e: ItemError) -> Self {
        Self(e.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "Request failed");
        }

        let body = ErrorBody {
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
