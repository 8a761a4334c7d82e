mod confidence_scorer;
mod evaluation_service;
mod feedback_service;
mod reply_sanitizer;
mod speech_analyzer;

pub use confidence_scorer::compute_confidence;
pub use evaluation_service::{
    EvaluationError, EvaluationId, EvaluationReport, EvaluationRequest, EvaluationService,
    TranscriptionOutcome,
};
pub use feedback_service::{
    build_system_prompt, build_user_prompt, FeedbackError, FeedbackRequest, FeedbackService,
    DEFAULT_FEEDBACK_TEXT,
};
pub use reply_sanitizer::strip_think_blocks;
pub use speech_analyzer::analyze_speech;
