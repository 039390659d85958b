use std::time::Duration;

use async_trait::async_trait;
use futures::{StreamExt, TryStreamExt, stream};
use reqwest::Client;

use crate::application::ports::{SpeechSynthesisError, SpeechSynthesizer};

use super::text_chunker::chunk_text;

pub const DEFAULT_TRANSLATE_TTS_URL: &str = "https://translate.google.com/translate_tts";

/// The endpoint rejects requests longer than this.
const MAX_CHUNK_CHARS: usize = 100;
const NORMAL_SPEED: &str = "1";
const SLOW_SPEED: &str = "0.24";
/// Segments requested at once; output order is preserved.
const CONCURRENT_SEGMENTS: usize = 4;

/// Keyless Google Translate speech endpoint. Long text is sent in chunks and
/// the MP3 segments are concatenated.
pub struct GoogleTranslateTts {
    client: Client,
    base_url: String,
    language: String,
    slow: bool,
}

impl GoogleTranslateTts {
    pub fn new(
        language: String,
        slow: bool,
        base_url: Option<String>,
        timeout: Duration,
    ) -> Result<Self, SpeechSynthesisError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SpeechSynthesisError::Configuration(format!("client build: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.unwrap_or_else(|| DEFAULT_TRANSLATE_TTS_URL.to_string()),
            language,
            slow,
        })
    }

    async fn fetch_segment(
        &self,
        chunk: &str,
        idx: usize,
        total: usize,
    ) -> Result<Vec<u8>, SpeechSynthesisError> {
        let idx = idx.to_string();
        let total = total.to_string();
        let textlen = chunk.chars().count().to_string();
        let speed = if self.slow { SLOW_SPEED } else { NORMAL_SPEED };

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", self.language.as_str()),
                ("q", chunk),
                ("total", total.as_str()),
                ("idx", idx.as_str()),
                ("textlen", textlen.as_str()),
                ("ttsspeed", speed),
            ])
            .send()
            .await
            .map_err(|e| SpeechSynthesisError::ApiRequestFailed(format!("request: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(SpeechSynthesisError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SpeechSynthesisError::InvalidResponse(format!("body: {e}")))?;

        if bytes.is_empty() {
            return Err(SpeechSynthesisError::InvalidResponse(
                "empty audio segment".to_string(),
            ));
        }

        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl SpeechSynthesizer for GoogleTranslateTts {
    #[tracing::instrument(skip(self, text), fields(language = %self.language))]
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, SpeechSynthesisError> {
        let chunks = chunk_text(text, MAX_CHUNK_CHARS);
        if chunks.is_empty() {
            return Err(SpeechSynthesisError::EmptyInput);
        }

        let total = chunks.len();
        let segments: Vec<Vec<u8>> = stream::iter(chunks.into_iter().enumerate())
            .map(|(idx, chunk)| async move { self.fetch_segment(&chunk, idx, total).await })
            .buffered(CONCURRENT_SEGMENTS)
            .try_collect()
            .await?;
        let audio = segments.concat();

        tracing::info!(segments = total, bytes = audio.len(), "Speech synthesis completed");
        Ok(audio)
    }
}
