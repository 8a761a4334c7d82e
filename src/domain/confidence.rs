use serde::{Deserialize, Serialize};

/// Composite delivery-confidence score in [1.0, 5.0], or unavailable when no
/// speech analysis exists for the answer (typed answers, failed recordings).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ConfidenceScore {
    Available(f64),
    Unavailable,
}

impl ConfidenceScore {
    /// Raw-float sentinel callers persist in place of a real score.
    pub const UNAVAILABLE_SENTINEL: f64 = -1.0;

    /// Interprets a raw float from a caller; anything outside [0, 5] is the
    /// unavailable sentinel.
    pub fn from_f64(value: f64) -> Self {
        if (0.0..=5.0).contains(&value) {
            Self::Available(value)
        } else {
            Self::Unavailable
        }
    }

    pub fn as_f64(&self) -> f64 {
        match self {
            Self::Available(value) => *value,
            Self::Unavailable => Self::UNAVAILABLE_SENTINEL,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }

    /// The score to blend into a feedback rating, when one exists.
    pub fn blend_value(&self) -> Option<f64> {
        match self {
            Self::Available(value) if (0.0..=5.0).contains(value) => Some(*value),
            _ => None,
        }
    }
}
