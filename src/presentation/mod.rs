pub mod config;
pub mod handlers;
pub mod router;
pub mod state;

pub use config::{
    ChatSettings, Environment, LoggingSettings, ServerSettings, Settings, SpeechSettings,
    TranscriptionSettings, TutorSettings,
};
pub use router::create_router;
pub use state::AppState;
