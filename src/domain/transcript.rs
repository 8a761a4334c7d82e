use serde::{Deserialize, Serialize};

/// A provider-agnostic transcription of one spoken answer.
///
/// Produced once by a transcription engine and never mutated afterwards.
/// Word timestamps stay in provider milliseconds; every duration derived
/// from them downstream is in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    pub text: String,
    pub words: Vec<Word>,
    pub confidence: f64,
    pub audio_duration_seconds: f64,
    pub sentiment: Option<Vec<SentimentSegment>>,
}

impl Transcript {
    /// A transcript that completed but carries no usable speech.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty() || self.text.trim().is_empty()
    }
}

/// A single recognized word with millisecond timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub text: String,
    pub start_ms: u64,
    pub end_ms: u64,
    pub confidence: f64,
    pub speaker: Option<String>,
}

impl Word {
    pub fn start_seconds(&self) -> f64 {
        self.start_ms as f64 / 1000.0
    }

    pub fn end_seconds(&self) -> f64 {
        self.end_ms as f64 / 1000.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

/// Provider sentiment for one span of the answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentSegment {
    pub text: String,
    pub sentiment: Sentiment,
    pub confidence: f64,
    pub start_ms: u64,
    pub end_ms: u64,
}
