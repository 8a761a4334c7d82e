use std::fmt;
use std::sync::Arc;

use uuid::Uuid;

use crate::application::ports::{ChatClient, TranscriptionEngine};
use crate::application::services::confidence_scorer::compute_confidence;
use crate::application::services::feedback_service::{
    FeedbackError, FeedbackRequest, FeedbackService,
};
use crate::application::services::speech_analyzer::analyze_speech;
use crate::domain::{ClubCategory, ConfidenceScore, FeedbackResult, SpeechAnalysis, Transcript};

/// Identifies one pipeline run in logs; concurrent evaluations are
/// independent invocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EvaluationId(Uuid);

impl EvaluationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for EvaluationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EvaluationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub struct EvaluationRequest {
    pub question: String,
    pub category: ClubCategory,
    pub audio: Option<Vec<u8>>,
    pub mime_type: Option<String>,
    /// Answer the candidate typed alongside (or instead of) the recording;
    /// the fallback when transcription fails or comes back empty.
    pub typed_answer: Option<String>,
    pub case_context: Option<String>,
}

/// How the transcription stage ended, kept in the report so the caller can
/// distinguish a warning banner from an error banner.
#[derive(Debug, Clone, PartialEq)]
pub enum TranscriptionOutcome {
    Transcribed(Transcript),
    EmptyTranscript(Transcript),
    Failed { error: String },
    NotRequested,
}

pub struct EvaluationReport {
    pub evaluation_id: EvaluationId,
    pub transcription: TranscriptionOutcome,
    pub analysis: Option<SpeechAnalysis>,
    pub confidence: ConfidenceScore,
    pub answer_text: String,
    pub feedback: FeedbackResult,
}

#[derive(Debug, thiserror::Error)]
pub enum EvaluationError {
    #[error("no answer available: transcription produced no text and no typed answer was supplied")]
    NoAnswer,
    #[error("feedback generation failed: {0}")]
    Feedback(#[from] FeedbackError),
}

/// Sequences transcription, analysis, scoring, and feedback for one answer.
/// Transcription failure falls back to the typed answer; feedback failure is
/// terminal for the request.
pub struct EvaluationService<T, C>
where
    T: TranscriptionEngine,
    C: ChatClient,
{
    transcription_engine: Arc<T>,
    feedback_service: FeedbackService<C>,
}

impl<T, C> EvaluationService<T, C>
where
    T: TranscriptionEngine,
    C: ChatClient,
{
    pub fn new(transcription_engine: Arc<T>, feedback_service: FeedbackService<C>) -> Self {
        Self {
            transcription_engine,
            feedback_service,
        }
    }

    pub async fn evaluate(
        &self,
        request: EvaluationRequest,
    ) -> Result<EvaluationReport, EvaluationError> {
        let evaluation_id = EvaluationId::new();

        let typed_answer = request
            .typed_answer
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string);

        let transcription = match &request.audio {
            Some(audio) => {
                let mime_hint = request.mime_type.as_deref().unwrap_or("audio/webm");
                tracing::debug!(%evaluation_id, bytes = audio.len(), "Transcribing recorded answer");
                match self.transcription_engine.transcribe(audio, mime_hint).await {
                    Ok(transcript) if transcript.is_empty() => {
                        tracing::warn!(%evaluation_id, "Audio transcribed but contained no speech");
                        TranscriptionOutcome::EmptyTranscript(transcript)
                    }
                    Ok(transcript) => TranscriptionOutcome::Transcribed(transcript),
                    Err(error) => {
                        tracing::error!(%evaluation_id, %error, "Transcription failed, falling back to typed answer");
                        TranscriptionOutcome::Failed {
                            error: error.to_string(),
                        }
                    }
                }
            }
            None => TranscriptionOutcome::NotRequested,
        };

        // Delivery metrics only exist for a transcript with real speech; every
        // fallback path leaves the confidence score unavailable.
        let (answer_text, analysis) = match &transcription {
            TranscriptionOutcome::Transcribed(transcript) => {
                let analysis =
                    analyze_speech(&transcript.words, transcript.audio_duration_seconds);
                (transcript.text.trim().to_string(), Some(analysis))
            }
            _ => (typed_answer.ok_or(EvaluationError::NoAnswer)?, None),
        };

        let confidence = compute_confidence(analysis.as_ref());

        tracing::debug!(%evaluation_id, confidence = confidence.as_f64(), "Generating feedback");

        let feedback = self
            .feedback_service
            .generate(&FeedbackRequest {
                question: request.question,
                answer: answer_text.clone(),
                category: request.category,
                confidence,
                case_context: request.case_context,
            })
            .await?;

        tracing::info!(%evaluation_id, rating = feedback.rating, "Evaluation completed");

        Ok(EvaluationReport {
            evaluation_id,
            transcription,
            analysis,
            confidence,
            answer_text,
            feedback,
        })
    }
}
