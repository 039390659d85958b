use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File};
use serde::{Deserialize, Serialize};

use super::Environment;

/// Environment variable the AI credential is read from when no
/// `APP_LLM__API_KEY` is given.
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub speech: SpeechSettings,
    pub storage: StorageSettings,
    pub artifacts: ArtifactSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LlmSettings {
    pub api_key: String,
    pub model: String,
    pub base_url: Option<String>,
    pub timeout_secs: u64,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: "gemini-2.5-flash".to_string(),
            base_url: None,
            timeout_secs: 60,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeechProviderSetting {
    GoogleTranslate,
    GoogleCloud,
    Mock,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SpeechSettings {
    pub provider: SpeechProviderSetting,
    pub language: String,
    pub slow: bool,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: u64,
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            provider: SpeechProviderSetting::GoogleTranslate,
            language: "en".to_string(),
            slow: false,
            api_key: None,
            base_url: None,
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    pub local_path: String,
    pub max_upload_size_bytes: usize,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            local_path: "uploads".to_string(),
            max_upload_size_bytes: 16 * 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArtifactSettings {
    pub ttl_secs: u64,
    pub sweep_interval_secs: u64,
    pub max_artifacts: usize,
}

impl Default for ArtifactSettings {
    fn default() -> Self {
        Self {
            ttl_secs: 3600,
            sweep_interval_secs: 300,
            max_artifacts: 256,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            enable_json: false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("GEMINI_API_KEY environment variable not set. Please set it to your Gemini API key.")]
    MissingApiKey,
    #[error("invalid setting: {0}")]
    Invalid(String),
}

impl Settings {
    /// Layers built-in defaults, `GEMINI_API_KEY`, the optional
    /// `appsettings.<env>.toml` file and `APP_`-prefixed variables
    /// (`APP_SERVER__PORT=8080`), in increasing precedence.
    pub fn load(environment: Environment) -> Result<Self, SettingsError> {
        let file_name = format!("appsettings.{}", environment.as_str().to_lowercase());
        Self::load_from(std::env::var(GEMINI_API_KEY_VAR).ok(), |builder| {
            builder
                .add_source(File::with_name(&file_name).required(false))
                .add_source(
                    config::Environment::with_prefix("APP")
                        .prefix_separator("_")
                        .separator("__")
                        .try_parsing(true),
                )
        })
    }

    /// Builds settings from the defaults plus whatever sources `layer` adds
    /// on top of them, then validates the result.
    pub fn load_from<F>(gemini_api_key: Option<String>, layer: F) -> Result<Self, SettingsError>
    where
        F: FnOnce(ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState>,
    {
        let mut defaults = Settings::default();
        if let Some(key) = gemini_api_key {
            defaults.llm.api_key = key;
        }

        let builder = Config::builder().add_source(Config::try_from(&defaults)?);
        let settings: Settings = layer(builder).build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.llm.api_key.trim().is_empty() {
            return Err(SettingsError::MissingApiKey);
        }
        if self.storage.max_upload_size_bytes == 0 {
            return Err(SettingsError::Invalid(
                "storage.max_upload_size_bytes must be positive".to_string(),
            ));
        }
        if self.artifacts.max_artifacts == 0 {
            return Err(SettingsError::Invalid(
                "artifacts.max_artifacts must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
