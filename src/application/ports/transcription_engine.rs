use async_trait::async_trait;

use crate::domain::Transcript;

#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(
        &self,
        audio: &[u8],
        mime_hint: &str,
    ) -> Result<Transcript, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("transcription api key not configured")]
    MissingApiKey,
    #[error("transcription rejected by provider: {0}")]
    Provider(String),
    #[error("transcription request failed: {0}")]
    Transport(String),
}
