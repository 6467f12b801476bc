use async_trait::async_trait;

use crate::application::ports::{SpeechError, SpeechSynthesizer};
use crate::domain::Language;

use super::utterance::split_utterances;

/// Per-request input cap enforced by the translate_tts endpoint.
const MAX_UTTERANCE_CHARS: usize = 100;

/// Speech synthesis through the unofficial Google Translate TTS endpoint.
///
/// Longer texts are split into utterances and fetched one request at a time;
/// the returned mp3 bodies concatenate into a single playable stream.
pub struct GoogleTranslateTtsEngine {
    client: reqwest::Client,
    base_url: String,
    language: Language,
}

impl GoogleTranslateTtsEngine {
    pub fn new(base_url: Option<String>, language: Language) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.unwrap_or_else(|| "https://translate.google.com".to_string()),
            language,
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for GoogleTranslateTtsEngine {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, SpeechError> {
        if text.trim().is_empty() {
            return Err(SpeechError::EmptyText);
        }

        let utterances = split_utterances(text, MAX_UTTERANCE_CHARS);
        let total = utterances.len();
        let url = format!("{}/translate_tts", self.base_url.trim_end_matches('/'));

        tracing::debug!(
            utterances = total,
            language = %self.language,
            "Synthesizing speech via Google Translate TTS"
        );

        let total_param = total.to_string();
        let mut audio = Vec::new();
        for (idx, utterance) in utterances.iter().enumerate() {
            let idx_param = idx.to_string();
            let textlen_param = utterance.chars().count().to_string();
            let response = self
                .client
                .get(&url)
                .query(&[
                    ("ie", "UTF-8"),
                    ("client", "tw-ob"),
                    ("tl", self.language.as_tag()),
                    ("q", utterance.as_str()),
                    ("total", total_param.as_str()),
                    ("idx", idx_param.as_str()),
                    ("textlen", textlen_param.as_str()),
                ])
                .send()
                .await
                .map_err(|e| SpeechError::ApiRequestFailed(format!("request: {}", e)))?;

            if !response.status().is_success() {
                let status = response.status();
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "unknown error".to_string());
                return Err(SpeechError::ApiRequestFailed(format!(
                    "utterance {}/{}: status {}: {}",
                    idx + 1,
                    total,
                    status,
                    body
                )));
            }

            let bytes = response
                .bytes()
                .await
                .map_err(|e| SpeechError::ApiRequestFailed(format!("body: {}", e)))?;
            audio.extend_from_slice(&bytes);
        }

        tracing::info!(bytes = audio.len(), "Speech synthesis completed");

        Ok(audio)
    }
}
