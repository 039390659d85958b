use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::StudyAssistantError;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// JSON error body with the status it is sent under.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Client errors keep their own message; downstream failures are reported
    /// as 500 prefixed with `context`.
    pub fn from_assistant(error: StudyAssistantError, context: &str) -> Self {
        match error {
            StudyAssistantError::AudioNotFound(id) => {
                tracing::warn!(artifact_id = %id, "Audio artifact not found");
                Self::new(
                    StatusCode::NOT_FOUND,
                    StudyAssistantError::AudioNotFound(id).to_string(),
                )
            }
            e if e.is_client_error() => {
                tracing::warn!(error = ?e, "Rejected request");
                Self::new(StatusCode::BAD_REQUEST, e.to_string())
            }
            e => {
                tracing::error!(error = %e, "{}", context);
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, format!("{context}: {e}"))
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}
