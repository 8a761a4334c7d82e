use serde::{Deserialize, Serialize};

/// Qualitative critique and numeric rating for one evaluated answer. The
/// caller owns persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackResult {
    pub feedback_text: String,
    /// In [0, 5]; 0.0 when the provider reply could not be parsed.
    pub rating: f64,
    pub display_text: String,
}

impl FeedbackResult {
    pub fn new(feedback_text: String, rating: f64) -> Self {
        let rating = rating.clamp(0.0, 5.0);
        let display_text = format!("{}\n\nRating: {:.1}/5", feedback_text, rating);
        Self {
            feedback_text,
            rating,
            display_text,
        }
    }
}
