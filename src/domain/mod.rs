mod audio_format;
mod exchange;
mod language;

pub use audio_format::AudioFormat;
pub use exchange::{Exchange, ExchangeId};
pub use language::Language;
