mod chat_client;
mod speech_synthesizer;
mod transcription_engine;

pub use chat_client::{ChatClient, ChatClientError};
pub use speech_synthesizer::{SpeechError, SpeechSynthesizer};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
