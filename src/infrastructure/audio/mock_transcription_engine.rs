use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::{Transcript, Word};

/// Engine returning a canned transcript, for tests and scaffold mode.
pub struct MockTranscriptionEngine {
    transcript: Transcript,
}

impl MockTranscriptionEngine {
    pub fn new(transcript: Transcript) -> Self {
        Self { transcript }
    }

    /// Builds a transcript from plain text with evenly spaced word timings:
    /// 400 ms of speech and a 100 ms gap per word.
    pub fn with_text(text: &str) -> Self {
        let mut words = Vec::new();
        let mut cursor: u64 = 0;
        for token in text.split_whitespace() {
            words.push(Word {
                text: token.to_string(),
                start_ms: cursor,
                end_ms: cursor + 400,
                confidence: 0.98,
                speaker: None,
            });
            cursor += 500;
        }
        let audio_duration_seconds = cursor as f64 / 1000.0;
        Self::new(Transcript {
            text: text.to_string(),
            words,
            confidence: 0.95,
            audio_duration_seconds,
            sentiment: None,
        })
    }
}

#[async_trait::async_trait]
impl TranscriptionEngine for MockTranscriptionEngine {
    async fn transcribe(
        &self,
        _audio: &[u8],
        _mime_hint: &str,
    ) -> Result<Transcript, TranscriptionError> {
        Ok(self.transcript.clone())
    }
}
