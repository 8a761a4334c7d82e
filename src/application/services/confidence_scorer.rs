use crate::domain::{ConfidenceScore, SpeechAnalysis};

/// Maps a speech analysis to the composite delivery-confidence score: the
/// mean of four piecewise sub-scores, rounded to one decimal. `None` yields
/// `Unavailable` (typed answers, failed recordings).
pub fn compute_confidence(analysis: Option<&SpeechAnalysis>) -> ConfidenceScore {
    match analysis {
        Some(analysis) => ConfidenceScore::Available(composite_score(analysis)),
        None => ConfidenceScore::Unavailable,
    }
}

fn composite_score(analysis: &SpeechAnalysis) -> f64 {
    let sum = filler_sub_score(analysis.filler_words.density)
        + pause_sub_score(
            analysis.pauses.long_pauses,
            analysis.pauses.average_pause_duration_seconds,
        )
        + pace_sub_score(analysis.speaking_pace.words_per_minute)
        + silence_sub_score(
            analysis.overall_metrics.speaking_time_seconds,
            analysis.overall_metrics.silence_time_seconds,
        );
    (sum / 4.0 * 10.0).round() / 10.0
}

fn filler_sub_score(density: f64) -> f64 {
    let percent = density * 100.0;
    if percent <= 5.0 {
        5.0
    } else if percent <= 10.0 {
        4.0
    } else if percent <= 15.0 {
        3.0
    } else if percent <= 20.0 {
        2.0
    } else {
        1.0
    }
}

fn pause_sub_score(long_pauses: u32, average_pause_seconds: f64) -> f64 {
    if long_pauses <= 2 && average_pause_seconds < 1.2 {
        5.0
    } else if long_pauses <= 4 {
        4.0
    } else if long_pauses <= 6 {
        3.0
    } else if long_pauses <= 8 {
        2.0
    } else {
        1.0
    }
}

fn pace_sub_score(words_per_minute: f64) -> f64 {
    if (110.0..=160.0).contains(&words_per_minute) {
        5.0
    } else if (90.0..110.0).contains(&words_per_minute)
        || (words_per_minute > 160.0 && words_per_minute <= 180.0)
    {
        4.0
    } else if (75.0..90.0).contains(&words_per_minute)
        || (words_per_minute > 180.0 && words_per_minute <= 200.0)
    {
        3.0
    } else if (60.0..75.0).contains(&words_per_minute)
        || (words_per_minute > 200.0 && words_per_minute <= 220.0)
    {
        2.0
    } else {
        1.0
    }
}

fn silence_sub_score(speaking_time_seconds: f64, silence_time_seconds: f64) -> f64 {
    let total = speaking_time_seconds + silence_time_seconds;
    let ratio = if total > 0.0 {
        speaking_time_seconds / total
    } else {
        0.0
    };
    // band thresholds are defined at two-decimal precision
    let ratio = (ratio * 100.0).round() / 100.0;

    if (0.65..=0.92).contains(&ratio) {
        5.0
    } else if (0.60..0.65).contains(&ratio) || (ratio > 0.92 && ratio <= 0.95) {
        4.0
    } else if (0.55..0.60).contains(&ratio) || (ratio > 0.95 && ratio <= 0.97) {
        3.0
    } else {
        1.5
    }
}
