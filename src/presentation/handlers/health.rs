use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::ports::{FileLoader, LlmClient};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub document_loaded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_uploaded_at: Option<DateTime<Utc>>,
}

pub async fn health_handler<F, L>(State(state): State<AppState<F, L>>) -> impl IntoResponse
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
{
    let uploaded_at = state
        .assistant
        .current_document()
        .map(|session| session.uploaded_at);

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            document_loaded: uploaded_at.is_some(),
            document_uploaded_at: uploaded_at,
        }),
    )
}
