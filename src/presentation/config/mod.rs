mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    ChatSettings, LoggingSettings, ServerSettings, Settings, SpeechSettings,
    TranscriptionSettings, TutorSettings,
};
