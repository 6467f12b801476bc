use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub tutor: TutorSettings,
    pub transcription: TranscriptionSettings,
    pub chat: ChatSettings,
    pub speech: SpeechSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_mb: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TutorSettings {
    /// Language tag shared by transcription and speech synthesis.
    pub language: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionSettings {
    pub provider: String,
    pub model: String,
    #[serde(default)]
    pub api_key: String,
    pub base_url: Option<String>,
    pub azure_endpoint: Option<String>,
    pub azure_deployment: Option<String>,
    pub azure_api_version: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatSettings {
    pub provider: String,
    pub model: String,
    #[serde(default)]
    pub api_key: String,
    pub base_url: Option<String>,
    pub azure_endpoint: Option<String>,
    pub max_tokens: usize,
    pub temperature: f32,
    pub system_prompt: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpeechSettings {
    pub provider: String,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub voice: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Layered load: `appsettings.{env}.toml` first, `APP_*` environment
    /// variables on top (e.g. `APP_CHAT__API_KEY` overrides `chat.api_key`).
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let configuration = Config::builder()
            .add_source(
                File::with_name(&format!(
                    "appsettings.{}",
                    environment.as_str().to_lowercase()
                ))
                .required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .list_separator(" "),
            )
            .build()?;

        configuration.try_deserialize()
    }
}
