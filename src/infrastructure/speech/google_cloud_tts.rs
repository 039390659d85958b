use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{SpeechSynthesisError, SpeechSynthesizer};

use super::text_chunker::chunk_text;

pub const DEFAULT_CLOUD_TTS_URL: &str = "https://texttospeech.googleapis.com/v1/text:synthesize";

/// Keeps every request under the 5000 byte input limit even for 4-byte
/// characters.
const MAX_CHUNK_CHARS: usize = 1200;

/// Google Cloud Text-to-Speech with a neutral voice and MP3 output.
pub struct GoogleCloudTts {
    client: Client,
    api_key: String,
    url: String,
    language_code: String,
    speaking_rate: f32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeRequest<'a> {
    input: SynthesisInput<'a>,
    voice: VoiceSelection<'a>,
    audio_config: AudioConfig,
}

#[derive(Serialize)]
struct SynthesisInput<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceSelection<'a> {
    language_code: &'a str,
    ssml_gender: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AudioConfig {
    audio_encoding: &'static str,
    speaking_rate: f32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeResponse {
    audio_content: Option<String>,
}

impl GoogleCloudTts {
    pub fn new(
        api_key: String,
        language_code: String,
        slow: bool,
        url: Option<String>,
        timeout: Duration,
    ) -> Result<Self, SpeechSynthesisError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SpeechSynthesisError::Configuration(format!("client build: {e}")))?;

        Ok(Self {
            client,
            api_key,
            url: url.unwrap_or_else(|| DEFAULT_CLOUD_TTS_URL.to_string()),
            language_code,
            speaking_rate: if slow { 0.75 } else { 1.0 },
        })
    }

    async fn synthesize_chunk(&self, chunk: &str) -> Result<Vec<u8>, SpeechSynthesisError> {
        let request = SynthesizeRequest {
            input: SynthesisInput { text: chunk },
            voice: VoiceSelection {
                language_code: &self.language_code,
                ssml_gender: "NEUTRAL",
            },
            audio_config: AudioConfig {
                audio_encoding: "MP3",
                speaking_rate: self.speaking_rate,
            },
        };

        let response = self
            .client
            .post(&self.url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| SpeechSynthesisError::ApiRequestFailed(format!("request: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SpeechSynthesisError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let parsed: SynthesizeResponse = response
            .json()
            .await
            .map_err(|e| SpeechSynthesisError::InvalidResponse(e.to_string()))?;

        let encoded = parsed.audio_content.ok_or_else(|| {
            SpeechSynthesisError::InvalidResponse("response has no audioContent".to_string())
        })?;

        BASE64_STANDARD
            .decode(encoded)
            .map_err(|e| SpeechSynthesisError::InvalidResponse(format!("base64: {e}")))
    }
}

#[async_trait]
impl SpeechSynthesizer for GoogleCloudTts {
    #[tracing::instrument(skip(self, text), fields(language = %self.language_code))]
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, SpeechSynthesisError> {
        let chunks = chunk_text(text, MAX_CHUNK_CHARS);
        if chunks.is_empty() {
            return Err(SpeechSynthesisError::EmptyInput);
        }

        let mut audio = Vec::new();
        for chunk in &chunks {
            audio.extend(self.synthesize_chunk(chunk).await?);
        }

        tracing::info!(
            segments = chunks.len(),
            bytes = audio.len(),
            "Cloud speech synthesis completed"
        );
        Ok(audio)
    }
}
