use std::collections::BTreeMap;

use crate::domain::{
    FillerWordStats, OverallMetrics, PauseLocation, PauseStats, SpeakingPace, SpeechAnalysis, Word,
};

/// Disfluency tokens counted toward filler density. Matched case-insensitively
/// after surrounding punctuation is trimmed.
const FILLER_LEXICON: [&str; 8] = [
    "um",
    "uh",
    "like",
    "you know",
    "i mean",
    "basically",
    "actually",
    "literally",
];

/// Gaps strictly longer than this between adjacent words are recorded as pauses.
const PAUSE_THRESHOLD_SECONDS: f64 = 0.5;

/// Recorded pauses strictly longer than this count as long pauses.
const LONG_PAUSE_THRESHOLD_SECONDS: f64 = 2.0;

/// Derives delivery metrics from a transcript's word timings. Pure and
/// deterministic; an empty word sequence yields the all-zero analysis.
pub fn analyze_speech(words: &[Word], audio_duration_seconds: f64) -> SpeechAnalysis {
    if words.is_empty() {
        return SpeechAnalysis::empty();
    }

    let total_words = words.len();
    let speaking_time_seconds =
        (words[total_words - 1].end_seconds() - words[0].start_seconds()).max(0.0);

    let words_per_minute = if speaking_time_seconds > 0.0 {
        total_words as f64 / (speaking_time_seconds / 60.0)
    } else {
        0.0
    };

    let mut common_fillers: BTreeMap<String, u32> = BTreeMap::new();
    let mut filler_count: u32 = 0;
    for word in words {
        let token = normalize_token(&word.text);
        if FILLER_LEXICON.contains(&token.as_str()) {
            filler_count += 1;
            *common_fillers.entry(token).or_insert(0) += 1;
        }
    }
    let density = f64::from(filler_count) / total_words as f64;

    let mut pause_locations = Vec::new();
    for position in 1..total_words {
        let start_seconds = words[position - 1].end_seconds();
        let end_seconds = words[position].start_seconds();
        let duration_seconds = end_seconds - start_seconds;
        if duration_seconds > PAUSE_THRESHOLD_SECONDS {
            pause_locations.push(PauseLocation {
                duration_seconds,
                position,
                start_seconds,
                end_seconds,
            });
        }
    }

    let long_pauses = pause_locations
        .iter()
        .filter(|p| p.duration_seconds > LONG_PAUSE_THRESHOLD_SECONDS)
        .count() as u32;
    let average_pause_duration_seconds = if pause_locations.is_empty() {
        0.0
    } else {
        pause_locations
            .iter()
            .map(|p| p.duration_seconds)
            .sum::<f64>()
            / pause_locations.len() as f64
    };

    let silence_time_seconds = (audio_duration_seconds - speaking_time_seconds).max(0.0);

    SpeechAnalysis {
        filler_words: FillerWordStats {
            total_count: filler_count,
            density,
            common_fillers,
        },
        pauses: PauseStats {
            total_pauses: pause_locations.len() as u32,
            long_pauses,
            average_pause_duration_seconds,
            pause_locations,
        },
        speaking_pace: SpeakingPace { words_per_minute },
        overall_metrics: OverallMetrics {
            total_words,
            speaking_time_seconds,
            silence_time_seconds,
        },
    }
}

fn normalize_token(raw: &str) -> String {
    raw.trim()
        .trim_matches(|c: char| c.is_ascii_punctuation())
        .to_lowercase()
}
