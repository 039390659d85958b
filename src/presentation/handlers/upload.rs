use axum::Json;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use serde::Serialize;

use crate::application::ports::{FileLoader, LlmClient};
use crate::application::services::StudyAssistantError;
use crate::presentation::handlers::error::ApiError;
use crate::presentation::state::AppState;

/// Multipart field that carries the study document.
pub const DOCUMENT_FIELD: &str = "document";

#[derive(Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub ai_response: String,
    pub audio_url: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn upload_and_process_handler<F, L>(
    State(state): State<AppState<F, L>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
{
    let mut multipart = match multipart {
        Ok(m) => m,
        Err(e) => {
            tracing::warn!(error = %e, "Upload request is not multipart");
            return ApiError::from_assistant(StudyAssistantError::MissingFilePart, "")
                .into_response();
        }
    };

    let (filename, data) = match read_document_field(&mut multipart).await {
        Ok(upload) => upload,
        Err(e) => return e.into_response(),
    };

    tracing::debug!(filename = %filename, bytes = data.len(), "Processing document upload");

    match state.assistant.process_upload(&filename, data).await {
        Ok(outcome) => {
            tracing::info!(
                document_id = %outcome.document_id.as_uuid(),
                artifact_id = %outcome.audio.id,
                "Document processed"
            );
            (
                StatusCode::OK,
                Json(UploadResponse {
                    message: "Document processed successfully!".to_string(),
                    ai_response: outcome.ai_response,
                    audio_url: outcome.audio.id.audio_url(),
                }),
            )
                .into_response()
        }
        Err(e) => ApiError::from_assistant(e, "Failed to process document").into_response(),
    }
}

/// Finds the `document` field, skipping any others.
async fn read_document_field(multipart: &mut Multipart) -> Result<(String, Bytes), ApiError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(DOCUMENT_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        if filename.trim().is_empty() {
            return Err(ApiError::from_assistant(
                StudyAssistantError::EmptySelection,
                "",
            ));
        }

        let data = field.bytes().await.map_err(multipart_error)?;
        return Ok((filename, data));
    }

    Err(ApiError::from_assistant(
        StudyAssistantError::MissingFilePart,
        "",
    ))
}

fn multipart_error(e: MultipartError) -> ApiError {
    let status = e.status();
    tracing::warn!(error = %e, status = %status, "Failed to read multipart");
    let error = StudyAssistantError::InvalidUpload(e.body_text());
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::new(status, error.to_string())
    } else {
        ApiError::from_assistant(error, "")
    }
}
