use std::sync::Arc;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::Language;
use crate::presentation::config::TranscriptionSettings;

use super::azure_whisper_engine::AzureWhisperEngine;
use super::openai_whisper_engine::OpenAiWhisperEngine;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TranscriptionProvider {
    OpenAi,
    Azure,
}

pub struct TranscriptionEngineFactory;

impl TranscriptionEngineFactory {
    pub fn create(
        settings: &TranscriptionSettings,
        language: Language,
    ) -> Result<Arc<dyn TranscriptionEngine>, TranscriptionError> {
        let provider = match settings.provider.as_str() {
            "openai" => TranscriptionProvider::OpenAi,
            "azure" => TranscriptionProvider::Azure,
            other => {
                return Err(TranscriptionError::ConfigurationInvalid(format!(
                    "unknown transcription provider: {}",
                    other
                )));
            }
        };

        match provider {
            TranscriptionProvider::OpenAi => {
                if settings.api_key.is_empty() {
                    return Err(TranscriptionError::ConfigurationInvalid(
                        "API key required for OpenAI Whisper".to_string(),
                    ));
                }
                let engine = OpenAiWhisperEngine::new(
                    settings.api_key.clone(),
                    settings.base_url.clone(),
                    Some(settings.model.clone()),
                    language,
                );
                Ok(Arc::new(engine))
            }
            TranscriptionProvider::Azure => {
                let endpoint = settings.azure_endpoint.as_deref().ok_or_else(|| {
                    TranscriptionError::ConfigurationInvalid(
                        "azure_endpoint required for azure provider".to_string(),
                    )
                })?;
                let deployment = settings.azure_deployment.as_deref().ok_or_else(|| {
                    TranscriptionError::ConfigurationInvalid(
                        "azure_deployment required for azure provider".to_string(),
                    )
                })?;
                let api_version = settings
                    .azure_api_version
                    .as_deref()
                    .unwrap_or("2024-02-01");
                let engine = AzureWhisperEngine::new(
                    endpoint,
                    deployment,
                    &settings.api_key,
                    api_version,
                    language,
                );
                Ok(Arc::new(engine))
            }
        }
    }
}
