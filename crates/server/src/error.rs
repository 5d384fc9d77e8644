use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pagelift_core::PageliftError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Failures surfaced by the HTTP layer.
///
/// Only the user-safe message reaches the client; the underlying error is
/// logged server-side.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("URL is required")]
    MissingUrl,

    /// The whole request outlived its deadline.
    #[error("Request timed out")]
    DeadlineExceeded,

    #[error(transparent)]
    Extraction(#[from] PageliftError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingUrl => StatusCode::BAD_REQUEST,
            ApiError::DeadlineExceeded => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Extraction(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            ApiError::Extraction(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ApiError::MissingUrl | ApiError::DeadlineExceeded => self.to_string(),
            ApiError::Extraction(e) => e.user_message(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "extraction failed");
        } else {
            tracing::warn!(error = %self, "rejected request");
        }

        (status, Json(ErrorResponse { error: self.message() })).into_response()
    }
}
