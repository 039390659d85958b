mod google_cloud_tts;
mod google_translate_tts;
mod mock_speech_synthesizer;
mod speech_synthesizer_factory;
mod text_chunker;

pub use google_cloud_tts::{DEFAULT_CLOUD_TTS_URL, GoogleCloudTts};
pub use google_translate_tts::{DEFAULT_TRANSLATE_TTS_URL, GoogleTranslateTts};
pub use mock_speech_synthesizer::MockSpeechSynthesizer;
pub use speech_synthesizer_factory::SpeechSynthesizerFactory;
pub use text_chunker::chunk_text;
