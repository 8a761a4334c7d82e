use std::sync::Arc;

use clubprep::application::ports::{
    ChatClient, ChatClientError, TranscriptionEngine, TranscriptionError,
};
use clubprep::application::services::{
    EvaluationError, EvaluationRequest, EvaluationService, FeedbackService, TranscriptionOutcome,
};
use clubprep::domain::{ClubCategory, ConfidenceScore, Transcript};
use clubprep::infrastructure::audio::MockTranscriptionEngine;
use clubprep::infrastructure::llm::MockChatClient;

struct FailingTranscriptionEngine;

#[async_trait::async_trait]
impl TranscriptionEngine for FailingTranscriptionEngine {
    async fn transcribe(&self, _: &[u8], _: &str) -> Result<Transcript, TranscriptionError> {
        Err(TranscriptionError::Transport("connection reset".to_string()))
    }
}

struct FailingChatClient;

#[async_trait::async_trait]
impl ChatClient for FailingChatClient {
    async fn complete(&self, _: &str, _: &str) -> Result<String, ChatClientError> {
        Err(ChatClientError::ApiRequestFailed("bad gateway".to_string()))
    }
}

fn feedback_reply() -> &'static str {
    r#"{"feedback": "Concrete and well paced.", "rating": "4.0"}"#
}

fn request(audio: Option<Vec<u8>>, typed_answer: Option<&str>) -> EvaluationRequest {
    EvaluationRequest {
        question: "Why do you want to join this club?".to_string(),
        category: ClubCategory::Business,
        audio,
        mime_type: Some("audio/webm".to_string()),
        typed_answer: typed_answer.map(str::to_string),
        case_context: None,
    }
}

#[tokio::test]
async fn given_recorded_answer_when_evaluating_then_report_carries_metrics_and_feedback() {
    let engine = Arc::new(MockTranscriptionEngine::with_text(
        "I want to learn consulting casework with people who take it seriously",
    ));
    let service = EvaluationService::new(
        engine,
        FeedbackService::new(Arc::new(MockChatClient::new(feedback_reply()))),
    );

    let report = service
        .evaluate(request(Some(b"audio".to_vec()), None))
        .await
        .unwrap();

    assert!(matches!(
        report.transcription,
        TranscriptionOutcome::Transcribed(_)
    ));
    let analysis = report.analysis.expect("analysis must exist for a transcript");
    assert_eq!(analysis.overall_metrics.total_words, 12);
    assert!(report.confidence.is_available());
    let confidence = report.confidence.as_f64();
    assert!((1.0..=5.0).contains(&confidence));
    assert_eq!(report.feedback.rating, 4.0);
    assert!(report.answer_text.starts_with("I want to learn"));
}

#[tokio::test]
async fn given_transcription_failure_with_typed_answer_when_evaluating_then_falls_back_without_metrics()
 {
    let service = EvaluationService::new(
        Arc::new(FailingTranscriptionEngine),
        FeedbackService::new(Arc::new(MockChatClient::new(feedback_reply()))),
    );

    let report = service
        .evaluate(request(
            Some(b"audio".to_vec()),
            Some("I typed my answer instead."),
        ))
        .await
        .unwrap();

    match &report.transcription {
        TranscriptionOutcome::Failed { error } => assert!(error.contains("connection reset")),
        other => panic!("expected failed transcription, got {:?}", other),
    }
    assert!(report.analysis.is_none());
    assert_eq!(report.confidence, ConfidenceScore::Unavailable);
    assert_eq!(report.answer_text, "I typed my answer instead.");
    assert_eq!(report.feedback.rating, 4.0);
}

#[tokio::test]
async fn given_transcription_failure_without_typed_answer_when_evaluating_then_no_answer_error() {
    let service = EvaluationService::new(
        Arc::new(FailingTranscriptionEngine),
        FeedbackService::new(Arc::new(MockChatClient::new(feedback_reply()))),
    );

    let result = service.evaluate(request(Some(b"audio".to_vec()), None)).await;

    assert!(matches!(result, Err(EvaluationError::NoAnswer)));
}

#[tokio::test]
async fn given_empty_transcript_when_evaluating_then_outcome_is_warning_and_typed_answer_is_used() {
    let engine = Arc::new(MockTranscriptionEngine::new(Transcript {
        text: "   ".to_string(),
        words: Vec::new(),
        confidence: 0.0,
        audio_duration_seconds: 4.0,
        sentiment: None,
    }));
    let service = EvaluationService::new(
        engine,
        FeedbackService::new(Arc::new(MockChatClient::new(feedback_reply()))),
    );

    let report = service
        .evaluate(request(Some(b"audio".to_vec()), Some("Typed fallback.")))
        .await
        .unwrap();

    assert!(matches!(
        report.transcription,
        TranscriptionOutcome::EmptyTranscript(_)
    ));
    assert!(report.analysis.is_none());
    assert_eq!(report.confidence, ConfidenceScore::Unavailable);
    assert_eq!(report.answer_text, "Typed fallback.");
}

#[tokio::test]
async fn given_no_audio_when_evaluating_then_typed_answer_is_scored_content_only() {
    let engine = Arc::new(MockTranscriptionEngine::with_text("unused"));
    let service = EvaluationService::new(
        engine,
        FeedbackService::new(Arc::new(MockChatClient::new(feedback_reply()))),
    );

    let report = service
        .evaluate(request(None, Some("A typed-only answer.")))
        .await
        .unwrap();

    assert_eq!(report.transcription, TranscriptionOutcome::NotRequested);
    assert_eq!(report.confidence, ConfidenceScore::Unavailable);
    assert_eq!(report.answer_text, "A typed-only answer.");
}

#[tokio::test]
async fn given_no_audio_and_no_typed_answer_when_evaluating_then_no_answer_error() {
    let engine = Arc::new(MockTranscriptionEngine::with_text("unused"));
    let service = EvaluationService::new(
        engine,
        FeedbackService::new(Arc::new(MockChatClient::new(feedback_reply()))),
    );

    let result = service.evaluate(request(None, None)).await;

    assert!(matches!(result, Err(EvaluationError::NoAnswer)));
}

#[tokio::test]
async fn given_feedback_failure_when_evaluating_then_error_is_terminal_for_the_request() {
    let engine = Arc::new(MockTranscriptionEngine::with_text("a fine answer"));
    let service =
        EvaluationService::new(engine, FeedbackService::new(Arc::new(FailingChatClient)));

    let result = service.evaluate(request(Some(b"audio".to_vec()), None)).await;

    assert!(matches!(result, Err(EvaluationError::Feedback(_))));
}

#[tokio::test]
async fn given_blank_typed_answer_when_transcription_fails_then_blank_text_is_not_a_fallback() {
    let service = EvaluationService::new(
        Arc::new(FailingTranscriptionEngine),
        FeedbackService::new(Arc::new(MockChatClient::new(feedback_reply()))),
    );

    let result = service
        .evaluate(request(Some(b"audio".to_vec()), Some("   ")))
        .await;

    assert!(matches!(result, Err(EvaluationError::NoAnswer)));
}
