use std::sync::Arc;

use serde_json::Value;

use crate::application::ports::{ChatClient, ChatClientError};
use crate::application::services::reply_sanitizer::strip_think_blocks;
use crate::domain::{ClubCategory, ConfidenceScore, FeedbackResult};

/// Shown when a structured reply carries no `feedback` key.
pub const DEFAULT_FEEDBACK_TEXT: &str = "No feedback was provided for this answer.";

pub struct FeedbackRequest {
    pub question: String,
    pub answer: String,
    pub category: ClubCategory,
    pub confidence: ConfidenceScore,
    pub case_context: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum FeedbackError {
    #[error("completion: {0}")]
    Completion(#[from] ChatClientError),
}

pub struct FeedbackService<C>
where
    C: ChatClient,
{
    chat_client: Arc<C>,
}

impl<C> FeedbackService<C>
where
    C: ChatClient,
{
    pub fn new(chat_client: Arc<C>) -> Self {
        Self { chat_client }
    }

    /// Requests a critique and rating for one answer. A malformed provider
    /// reply degrades to the raw text with a 0.0 rating; only transport-level
    /// failures surface as errors.
    pub async fn generate(&self, request: &FeedbackRequest) -> Result<FeedbackResult, FeedbackError> {
        let system_prompt = build_system_prompt(request.category);
        let user_prompt = build_user_prompt(request);

        let raw_reply = self
            .chat_client
            .complete(&system_prompt, &user_prompt)
            .await?;

        let cleaned = strip_think_blocks(&raw_reply);
        let (feedback_text, rating) = parse_reply(&cleaned);

        tracing::debug!(rating, chars = feedback_text.len(), "Feedback generated");

        Ok(FeedbackResult::new(feedback_text, rating))
    }
}

pub fn build_system_prompt(category: ClubCategory) -> String {
    format!(
        "You are an experienced interviewer for a university {} club running mock \
         interview practice. Evaluate the candidate's answer honestly and constructively. \
         Respond with only a JSON object containing exactly two keys: \"feedback\" \
         (a string with your critique) and \"rating\" (the overall score as a numeric \
         string from 1.0 to 5.0 with one decimal place). Do not wrap the JSON in \
         markdown fences or add any other text.",
        category.display_name()
    )
}

pub fn build_user_prompt(request: &FeedbackRequest) -> String {
    let mut prompt = format!("Interview question: {}\n\n", request.question);

    if let Some(context) = &request.case_context {
        prompt.push_str(&format!("Case study context: {}\n\n", context));
    }

    prompt.push_str(&format!("Candidate's answer: {}\n\n", request.answer));

    match request.confidence.blend_value() {
        Some(score) => prompt.push_str(&format!(
            "A speech-delivery analysis rated the candidate's delivery confidence at \
             {:.1} out of 5. Weigh delivery confidence as 30% of the final rating and \
             content quality as the remaining 70%.",
            score
        )),
        None => prompt.push_str(
            "No delivery-confidence measurement is available for this answer. Ignore \
             delivery entirely and rate content quality only.",
        ),
    }

    prompt
}

/// Strict JSON parse of the cleaned reply; anything else is treated as the
/// feedback text itself with a zero rating.
fn parse_reply(cleaned: &str) -> (String, f64) {
    match serde_json::from_str::<Value>(cleaned) {
        Ok(Value::Object(reply)) => {
            let feedback = reply
                .get("feedback")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| DEFAULT_FEEDBACK_TEXT.to_string());
            let rating = reply.get("rating").map(parse_rating).unwrap_or(0.0);
            (feedback, rating)
        }
        _ => (cleaned.trim().to_string(), 0.0),
    }
}

fn parse_rating(value: &Value) -> f64 {
    let parsed = match value {
        Value::String(text) => text.trim().parse::<f64>().ok(),
        other => other.as_f64(),
    };
    parsed.map(|r| r.clamp(0.0, 5.0)).unwrap_or(0.0)
}
