mod google_translate_engine;
mod openai_speech_engine;
mod speech_engine_factory;
mod utterance;

pub use google_translate_engine::GoogleTranslateTtsEngine;
pub use openai_speech_engine::OpenAiSpeechEngine;
pub use speech_engine_factory::{SpeechEngineFactory, SpeechProvider};
pub use utterance::split_utterances;
