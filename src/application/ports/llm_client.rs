use async_trait::async_trait;

/// Text generation backed by an external model.
///
/// Implementations carry their persona/system instruction from construction;
/// callers only supply the user prompt.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("empty response: {0}")]
    EmptyResponse(String),
}
