mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    ArtifactSettings, GEMINI_API_KEY_VAR, LlmSettings, LoggingSettings, ServerSettings, Settings,
    SettingsError, SpeechProviderSetting, SpeechSettings, StorageSettings,
};
