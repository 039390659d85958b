use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{SpeechSynthesisError, SpeechSynthesizer};
use crate::presentation::config::{SpeechProviderSetting, SpeechSettings};

use super::google_cloud_tts::GoogleCloudTts;
use super::google_translate_tts::GoogleTranslateTts;
use super::mock_speech_synthesizer::MockSpeechSynthesizer;

pub struct SpeechSynthesizerFactory;

impl SpeechSynthesizerFactory {
    pub fn create(
        settings: &SpeechSettings,
    ) -> Result<Arc<dyn SpeechSynthesizer>, SpeechSynthesisError> {
        let timeout = Duration::from_secs(settings.timeout_secs);
        match settings.provider {
            SpeechProviderSetting::GoogleTranslate => {
                tracing::info!(language = %settings.language, "Using Google Translate speech");
                let engine = GoogleTranslateTts::new(
                    settings.language.clone(),
                    settings.slow,
                    settings.base_url.clone(),
                    timeout,
                )?;
                Ok(Arc::new(engine))
            }
            SpeechProviderSetting::GoogleCloud => {
                let key = settings
                    .api_key
                    .clone()
                    .filter(|k| !k.trim().is_empty())
                    .ok_or_else(|| {
                        SpeechSynthesisError::Configuration(
                            "speech.api_key is required for Google Cloud Text-to-Speech"
                                .to_string(),
                        )
                    })?;
                tracing::info!(language = %settings.language, "Using Google Cloud speech");
                let engine = GoogleCloudTts::new(
                    key,
                    settings.language.clone(),
                    settings.slow,
                    settings.base_url.clone(),
                    timeout,
                )?;
                Ok(Arc::new(engine))
            }
            SpeechProviderSetting::Mock => {
                tracing::warn!("Using mock speech synthesizer; audio will be silent");
                Ok(Arc::new(MockSpeechSynthesizer::new()))
            }
        }
    }
}
