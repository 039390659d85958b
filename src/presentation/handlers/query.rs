use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::application::ports::{FileLoader, LlmClient};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::handlers::error::ApiError;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct QueryRequest {
    pub query: Option<String>,
}

#[derive(Serialize)]
pub struct QueryResponse {
    pub ai_response: String,
    pub audio_url: String,
}

/// A body that is missing or not valid JSON is treated as a missing query,
/// after the document precondition has been checked.
#[tracing::instrument(skip(state, request))]
pub async fn query_ai_handler<F, L>(
    State(state): State<AppState<F, L>>,
    request: Result<Json<QueryRequest>, JsonRejection>,
) -> Response
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
{
    let query = match request {
        Ok(Json(body)) => body.query,
        Err(e) => {
            tracing::debug!(error = %e, "Query body rejected");
            None
        }
    };

    tracing::debug!(
        query = %sanitize_prompt(query.as_deref().unwrap_or_default()),
        "Processing query"
    );

    match state.assistant.answer_query(query.as_deref()).await {
        Ok(outcome) => {
            tracing::info!(artifact_id = %outcome.audio.id, "Query answered");
            (
                StatusCode::OK,
                Json(QueryResponse {
                    ai_response: outcome.ai_response,
                    audio_url: outcome.audio.id.audio_url(),
                }),
            )
                .into_response()
        }
        Err(e) => ApiError::from_assistant(e, "Failed to get AI response").into_response(),
    }
}
