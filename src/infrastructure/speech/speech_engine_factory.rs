use std::sync::Arc;

use crate::application::ports::{SpeechError, SpeechSynthesizer};
use crate::domain::Language;
use crate::presentation::config::SpeechSettings;

use super::google_translate_engine::GoogleTranslateTtsEngine;
use super::openai_speech_engine::OpenAiSpeechEngine;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpeechProvider {
    GoogleTranslate,
    OpenAi,
}

pub struct SpeechEngineFactory;

impl SpeechEngineFactory {
    pub fn create(
        settings: &SpeechSettings,
        language: Language,
    ) -> Result<Arc<dyn SpeechSynthesizer>, SpeechError> {
        let provider = match settings.provider.as_str() {
            "gtts" => SpeechProvider::GoogleTranslate,
            "openai" => SpeechProvider::OpenAi,
            other => {
                return Err(SpeechError::ConfigurationInvalid(format!(
                    "unknown speech provider: {}",
                    other
                )));
            }
        };

        match provider {
            SpeechProvider::GoogleTranslate => {
                let engine = GoogleTranslateTtsEngine::new(settings.base_url.clone(), language);
                Ok(Arc::new(engine))
            }
            SpeechProvider::OpenAi => {
                let api_key = settings.api_key.clone().filter(|k| !k.is_empty()).ok_or(
                    SpeechError::ConfigurationInvalid(
                        "API key required for OpenAI speech".to_string(),
                    ),
                )?;
                let engine = OpenAiSpeechEngine::new(
                    api_key,
                    settings.base_url.clone(),
                    settings.model.clone(),
                    settings.voice.clone(),
                );
                Ok(Arc::new(engine))
            }
        }
    }
}
