use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::application::ports::{FileLoader, LlmClient};
use crate::application::services::{SpeechServiceError, StudyAssistantError};
use crate::domain::AudioArtifactId;
use crate::presentation::handlers::error::ApiError;
use crate::presentation::state::AppState;

pub const AUDIO_MIME: &str = "audio/mpeg";

#[tracing::instrument(skip_all, fields(artifact_id = %filename))]
pub async fn audio_handler<F, L>(
    State(state): State<AppState<F, L>>,
    Path(filename): Path<String>,
) -> Response
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
{
    let id = AudioArtifactId::from_raw(filename);

    match state.speech_service.fetch(&id).await {
        Ok(bytes) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, AUDIO_MIME),
                (header::CACHE_CONTROL, "no-store"),
            ],
            bytes,
        )
            .into_response(),
        Err(SpeechServiceError::NotFound(id)) => {
            ApiError::from_assistant(StudyAssistantError::AudioNotFound(id), "").into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, artifact_id = %id, "Failed to read audio artifact");
            ApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to read audio: {e}"),
            )
            .into_response()
        }
    }
}
