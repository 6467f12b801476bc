mod converse;
mod health;

pub use converse::converse_handler;
pub use health::health_handler;
