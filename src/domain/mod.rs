mod club_category;
mod confidence;
mod feedback;
mod speech_analysis;
mod transcript;

pub use club_category::ClubCategory;
pub use confidence::ConfidenceScore;
pub use feedback::FeedbackResult;
pub use speech_analysis::{
    FillerWordStats, OverallMetrics, PauseLocation, PauseStats, SpeakingPace, SpeechAnalysis,
};
pub use transcript::{Sentiment, SentimentSegment, Transcript, Word};
