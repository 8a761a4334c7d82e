use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Delivery metrics derived deterministically from a transcript's word
/// timings. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechAnalysis {
    pub filler_words: FillerWordStats,
    pub pauses: PauseStats,
    pub speaking_pace: SpeakingPace,
    pub overall_metrics: OverallMetrics,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillerWordStats {
    pub total_count: u32,
    /// Filler occurrences per word, in [0, 1].
    pub density: f64,
    pub common_fillers: BTreeMap<String, u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PauseStats {
    pub total_pauses: u32,
    pub long_pauses: u32,
    pub average_pause_duration_seconds: f64,
    pub pause_locations: Vec<PauseLocation>,
}

/// One recorded gap between adjacent words. `position` is the index of the
/// word that follows the gap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PauseLocation {
    pub duration_seconds: f64,
    pub position: usize,
    pub start_seconds: f64,
    pub end_seconds: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeakingPace {
    pub words_per_minute: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallMetrics {
    pub total_words: usize,
    pub speaking_time_seconds: f64,
    pub silence_time_seconds: f64,
}

impl SpeechAnalysis {
    /// The analysis of an empty word sequence: all counts and durations zero.
    pub fn empty() -> Self {
        Self {
            filler_words: FillerWordStats {
                total_count: 0,
                density: 0.0,
                common_fillers: BTreeMap::new(),
            },
            pauses: PauseStats {
                total_pauses: 0,
                long_pauses: 0,
                average_pause_duration_seconds: 0.0,
                pause_locations: Vec::new(),
            },
            speaking_pace: SpeakingPace {
                words_per_minute: 0.0,
            },
            overall_metrics: OverallMetrics {
                total_words: 0,
                speaking_time_seconds: 0.0,
                silence_time_seconds: 0.0,
            },
        }
    }
}
