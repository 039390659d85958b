use std::sync::Arc;

use crate::application::ports::{FileLoader, LlmClient};
use crate::application::services::{SpeechService, StudyAssistantService};
use crate::presentation::config::Settings;

pub struct AppState<F, L>
where
    F: FileLoader,
    L: LlmClient,
{
    pub assistant: Arc<StudyAssistantService<F, L>>,
    pub speech_service: Arc<SpeechService>,
    pub settings: Settings,
}

impl<F, L> Clone for AppState<F, L>
where
    F: FileLoader,
    L: LlmClient,
{
    fn clone(&self) -> Self {
        Self {
            assistant: Arc::clone(&self.assistant),
            speech_service: Arc::clone(&self.speech_service),
            settings: self.settings.clone(),
        }
    }
}
