use std::collections::BTreeMap;

use clubprep::application::services::{analyze_speech, compute_confidence};
use clubprep::domain::{
    ConfidenceScore, FillerWordStats, OverallMetrics, PauseStats, SpeakingPace, SpeechAnalysis,
    Word,
};

fn analysis(
    filler_density: f64,
    long_pauses: u32,
    average_pause_seconds: f64,
    words_per_minute: f64,
    speaking_time_seconds: f64,
    silence_time_seconds: f64,
) -> SpeechAnalysis {
    SpeechAnalysis {
        filler_words: FillerWordStats {
            total_count: 0,
            density: filler_density,
            common_fillers: BTreeMap::new(),
        },
        pauses: PauseStats {
            total_pauses: long_pauses,
            long_pauses,
            average_pause_duration_seconds: average_pause_seconds,
            pause_locations: Vec::new(),
        },
        speaking_pace: SpeakingPace { words_per_minute },
        overall_metrics: OverallMetrics {
            total_words: 100,
            speaking_time_seconds,
            silence_time_seconds,
        },
    }
}

#[test]
fn given_no_analysis_when_computing_confidence_then_score_is_unavailable() {
    let score = compute_confidence(None);

    assert_eq!(score, ConfidenceScore::Unavailable);
    assert_eq!(score.as_f64(), ConfidenceScore::UNAVAILABLE_SENTINEL);
    assert!(!score.is_available());
}

#[test]
fn given_ideal_delivery_when_computing_confidence_then_composite_is_five() {
    // 150 wpm, no fillers, one short pause, 60 s spoken of 65 s audio
    let ideal = analysis(0.0, 0, 1.0, 150.0, 60.0, 5.0);

    let score = compute_confidence(Some(&ideal));

    assert_eq!(score, ConfidenceScore::Available(5.0));
}

#[test]
fn given_steady_answer_metrics_when_scoring_end_to_end_then_composite_is_five() {
    let mut words = Vec::with_capacity(150);
    let mut cursor: u64 = 0;
    for i in 0..150 {
        if i > 0 {
            cursor += if i == 75 { 1000 } else { 100 };
        }
        let start = cursor;
        cursor += 294;
        words.push(Word {
            text: format!("w{}", i),
            start_ms: start,
            end_ms: cursor,
            confidence: 0.99,
            speaker: None,
        });
    }
    words.last_mut().unwrap().end_ms = 60_000;

    let analysis = analyze_speech(&words, 65.0);
    let score = compute_confidence(Some(&analysis));

    assert_eq!(score, ConfidenceScore::Available(5.0));
}

#[test]
fn given_heavy_filler_use_when_computing_confidence_then_filler_band_drags_score_down() {
    // 25% filler density lands in the lowest filler band
    let heavy = analysis(0.25, 0, 0.8, 130.0, 60.0, 20.0);

    let score = compute_confidence(Some(&heavy));

    // sub-scores: filler 1, pauses 5, pace 5, silence 5
    assert_eq!(score, ConfidenceScore::Available(4.0));
}

#[test]
fn given_many_long_pauses_when_computing_confidence_then_pause_band_is_lowest() {
    let hesitant = analysis(0.02, 9, 2.5, 120.0, 60.0, 20.0);

    let score = compute_confidence(Some(&hesitant));

    // sub-scores: filler 5, pauses 1, pace 5, silence 5
    assert_eq!(score, ConfidenceScore::Available(4.0));
}

#[test]
fn given_rushed_delivery_when_computing_confidence_then_pace_band_reflects_overspeed() {
    let rushed = analysis(0.02, 0, 0.6, 210.0, 60.0, 20.0);

    let score = compute_confidence(Some(&rushed));

    // sub-scores: filler 5, pauses 5, pace 2, silence 5
    assert_eq!(score, ConfidenceScore::Available(4.3));
}

#[test]
fn given_mostly_silent_recording_when_computing_confidence_then_silence_band_is_floor_value() {
    let sparse = analysis(0.02, 0, 0.6, 120.0, 20.0, 80.0);

    let score = compute_confidence(Some(&sparse));

    // sub-scores: filler 5, pauses 5, pace 5, silence 1.5
    assert_eq!(score, ConfidenceScore::Available(4.1));
}

#[test]
fn given_any_metric_combination_when_computing_confidence_then_composite_stays_in_range() {
    let combos = [
        analysis(0.0, 0, 0.0, 0.0, 0.0, 0.0),
        analysis(1.0, 20, 5.0, 300.0, 1.0, 99.0),
        analysis(0.12, 5, 1.5, 95.0, 50.0, 30.0),
        analysis(0.07, 3, 1.0, 170.0, 70.0, 10.0),
    ];

    for analysis in &combos {
        match compute_confidence(Some(analysis)) {
            ConfidenceScore::Available(value) => {
                assert!((1.0..=5.0).contains(&value), "out of range: {}", value);
                // composite is the mean of four sub-scores rounded to one decimal
                assert!((value * 10.0 - (value * 10.0).round()).abs() < 1e-9);
            }
            ConfidenceScore::Unavailable => panic!("analysis supplied, score must be available"),
        }
    }
}

#[test]
fn given_speaking_ratio_just_over_band_edge_when_scoring_then_two_decimal_rounding_applies() {
    // 60/65 ≈ 0.9231 rounds to 0.92 and stays in the top silence band
    let edge = analysis(0.0, 0, 0.0, 150.0, 60.0, 5.0);

    let score = compute_confidence(Some(&edge));

    assert_eq!(score, ConfidenceScore::Available(5.0));
}

#[test]
fn given_zero_speaking_and_silence_time_when_scoring_then_ratio_guard_avoids_division_by_zero() {
    let empty_timing = analysis(0.0, 0, 0.0, 120.0, 0.0, 0.0);

    let score = compute_confidence(Some(&empty_timing));

    // sub-scores: filler 5, pauses 5, pace 5, silence 1.5 (ratio 0)
    assert_eq!(score, ConfidenceScore::Available(4.1));
}
