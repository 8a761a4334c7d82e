mod chat_client;
mod transcription_engine;

pub use chat_client::{ChatClient, ChatClientError};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
