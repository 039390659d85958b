use std::sync::atomic::{AtomicUsize, Ordering};

use crate::application::ports::{SpeechSynthesisError, SpeechSynthesizer};

/// Minimal MPEG-1 Layer III frame header followed by padding.
const SILENT_FRAME: [u8; 8] = [0xFF, 0xFB, 0x90, 0x64, 0x00, 0x00, 0x00, 0x00];

pub struct MockSpeechSynthesizer {
    fail_with: Option<String>,
    calls: AtomicUsize,
}

impl MockSpeechSynthesizer {
    pub fn new() -> Self {
        Self {
            fail_with: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            fail_with: Some(message.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockSpeechSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl SpeechSynthesizer for MockSpeechSynthesizer {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, SpeechSynthesisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.fail_with {
            return Err(SpeechSynthesisError::ApiRequestFailed(message.clone()));
        }
        if text.trim().is_empty() {
            return Err(SpeechSynthesisError::EmptyInput);
        }
        let mut audio = SILENT_FRAME.to_vec();
        audio.extend_from_slice(text.as_bytes());
        Ok(audio)
    }
}
