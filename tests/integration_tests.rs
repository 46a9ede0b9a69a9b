//! Integration tests for the annotation engine
//!
//! Exercise the full pipeline on synthetic signals with known content.

use chordscribe::{
    annotate_buffer, AnalysisConfig, Annotation, PitchMethod, SampleBuffer, SILENCE_NOTE,
};

const SAMPLE_RATE: u32 = 44100;

/// Append `duration` seconds of silence
fn push_silence(samples: &mut Vec<i16>, duration: f64) {
    let count = (duration * SAMPLE_RATE as f64) as usize;
    samples.extend(std::iter::repeat(0i16).take(count));
}

/// Append `duration` seconds of summed sine tones at the given amplitude
fn push_tones(samples: &mut Vec<i16>, frequencies: &[f64], amplitude: f64, duration: f64) {
    let count = (duration * SAMPLE_RATE as f64) as usize;
    let start = samples.len();
    for i in 0..count {
        let t = (start + i) as f64 / SAMPLE_RATE as f64;
        let value: f64 = frequencies
            .iter()
            .map(|f| amplitude * (2.0 * std::f64::consts::PI * f * t).sin())
            .sum();
        samples.push(value as i16);
    }
}

#[test]
fn test_silence_yields_no_onsets() {
    let buffer = SampleBuffer::new(vec![0i16; SAMPLE_RATE as usize], SAMPLE_RATE).unwrap();
    let result = annotate_buffer(&buffer, &AnalysisConfig::default()).unwrap();

    assert!(result.onsets.is_empty());
    assert_eq!(result.annotated_frames().count(), 0);
    assert_eq!(result.frames.len(), SAMPLE_RATE as usize);
}

#[test]
fn test_empty_buffer() {
    let buffer = SampleBuffer::new(vec![], SAMPLE_RATE).unwrap();
    let result = annotate_buffer(&buffer, &AnalysisConfig::default()).unwrap();
    assert!(result.onsets.is_empty());
    assert!(result.frames.is_empty());
}

#[test]
fn test_single_note_burst_annotates_a4() {
    let mut samples = Vec::new();
    push_silence(&mut samples, 0.3);
    push_tones(&mut samples, &[440.0], 20000.0, 0.5);
    push_silence(&mut samples, 0.3);

    let buffer = SampleBuffer::new(samples, SAMPLE_RATE).unwrap();
    let result = annotate_buffer(&buffer, &AnalysisConfig::default()).unwrap();

    assert!(!result.onsets.is_empty(), "burst should produce an onset");

    let burst_start = (0.3 * SAMPLE_RATE as f64) as usize;
    let burst_end = burst_start + (0.5 * SAMPLE_RATE as f64) as usize;
    for &onset in &result.onsets {
        assert!(
            onset >= burst_start && onset < burst_end,
            "onset {} outside burst [{}, {})",
            onset,
            burst_start,
            burst_end
        );
        assert_eq!(
            result.frames[onset].annotation,
            Some(Annotation::Note("A4".to_string()))
        );
    }
}

#[test]
fn test_spectral_pitch_method_agrees() {
    let mut samples = Vec::new();
    push_silence(&mut samples, 0.3);
    push_tones(&mut samples, &[440.0], 20000.0, 0.5);
    push_silence(&mut samples, 0.3);

    let buffer = SampleBuffer::new(samples, SAMPLE_RATE).unwrap();
    let mut config = AnalysisConfig::default();
    config.pitch_method = PitchMethod::Spectral;
    let result = annotate_buffer(&buffer, &config).unwrap();

    assert!(!result.onsets.is_empty());
    for &onset in &result.onsets {
        assert_eq!(
            result.frames[onset].annotation,
            Some(Annotation::Note("A4".to_string()))
        );
    }
}

#[test]
fn test_chord_mode_identifies_major_triad() {
    let mut samples = Vec::new();
    push_silence(&mut samples, 0.3);
    // C5 + E5 + G5, well separated in the 2048-point spectrum
    push_tones(&mut samples, &[523.25, 659.25, 783.99], 9000.0, 0.5);
    push_silence(&mut samples, 0.3);

    let buffer = SampleBuffer::new(samples, SAMPLE_RATE).unwrap();
    let mut config = AnalysisConfig::default();
    config.chord_mode = true;
    let result = annotate_buffer(&buffer, &config).unwrap();

    assert!(!result.onsets.is_empty());
    for &onset in &result.onsets {
        match &result.frames[onset].annotation {
            Some(Annotation::Chord { notes, label }) => {
                assert_eq!(notes, &["C5", "E5", "G5"]);
                assert_eq!(label, "C5 Major");
            }
            other => panic!("expected chord annotation, got {:?}", other),
        }
    }
}

#[test]
fn test_two_bursts_two_onset_groups() {
    let mut samples = Vec::new();
    push_silence(&mut samples, 0.3);
    push_tones(&mut samples, &[440.0], 20000.0, 0.3);
    push_silence(&mut samples, 0.3);
    push_tones(&mut samples, &[440.0], 30000.0, 0.3);
    push_silence(&mut samples, 0.3);

    let buffer = SampleBuffer::new(samples, SAMPLE_RATE).unwrap();
    let result = annotate_buffer(&buffer, &AnalysisConfig::default()).unwrap();

    // Onsets ascend and stay in bounds; the louder second burst must be hit
    for pair in result.onsets.windows(2) {
        assert!(pair[0] < pair[1]);
    }
    let second_start = samples_len_at(0.9);
    assert!(
        result.onsets.iter().any(|&o| o >= second_start),
        "second burst should produce an onset"
    );
}

fn samples_len_at(seconds: f64) -> usize {
    (seconds * SAMPLE_RATE as f64) as usize
}

#[test]
fn test_annotation_is_idempotent() {
    let mut samples = Vec::new();
    push_silence(&mut samples, 0.2);
    push_tones(&mut samples, &[523.25, 659.25, 783.99], 9000.0, 0.4);
    push_silence(&mut samples, 0.2);

    let buffer = SampleBuffer::new(samples, SAMPLE_RATE).unwrap();
    let mut config = AnalysisConfig::default();
    config.chord_mode = true;

    let first = annotate_buffer(&buffer, &config).unwrap();
    let second = annotate_buffer(&buffer, &config).unwrap();

    assert_eq!(first.onsets, second.onsets);
    assert_eq!(first.frames, second.frames);
}

#[test]
fn test_invalid_config_fails_before_processing() {
    let buffer = SampleBuffer::new(vec![0i16; 1024], SAMPLE_RATE).unwrap();
    let mut config = AnalysisConfig::default();
    config.fft_window_size = 0;
    assert!(annotate_buffer(&buffer, &config).is_err());
}

#[test]
fn test_sentinel_distinct_from_unannotated() {
    // A burst too close to the buffer end has no full analysis window: its
    // frame stays unannotated rather than receiving the silence sentinel.
    let mut samples = Vec::new();
    push_silence(&mut samples, 0.3);
    push_tones(&mut samples, &[440.0], 20000.0, 0.02);

    let buffer = SampleBuffer::new(samples, SAMPLE_RATE).unwrap();
    let result = annotate_buffer(&buffer, &AnalysisConfig::default()).unwrap();

    for &onset in &result.onsets {
        if let Some(annotation) = &result.frames[onset].annotation {
            // Any annotation present must be a real note or the sentinel
            match annotation {
                Annotation::Note(name) => {
                    assert!(name == "A4" || name == SILENCE_NOTE);
                }
                other => panic!("unexpected annotation {:?}", other),
            }
        }
    }
}

#[test]
fn test_no_fundamental_in_range_annotates_sentinel() {
    // A 440 Hz burst searched in a 1900-2000 Hz fundamental range: the
    // onset is detected and its window fully analyzable, but no
    // autocorrelation peak exists in the lag range. The frame must carry
    // the silence sentinel, not stay unannotated and not name a note.
    let mut samples = Vec::new();
    push_silence(&mut samples, 0.3);
    push_tones(&mut samples, &[440.0], 20000.0, 0.5);
    push_silence(&mut samples, 0.3);

    let buffer = SampleBuffer::new(samples, SAMPLE_RATE).unwrap();
    let mut config = AnalysisConfig::default();
    config.min_fundamental_hz = 1900.0;
    config.max_fundamental_hz = 2000.0;
    let result = annotate_buffer(&buffer, &config).unwrap();

    assert!(!result.onsets.is_empty());
    for &onset in &result.onsets {
        assert_eq!(
            result.frames[onset].annotation,
            Some(Annotation::Note(SILENCE_NOTE.to_string()))
        );
    }
}

#[test]
fn test_result_serializes() {
    let mut samples = Vec::new();
    push_silence(&mut samples, 0.1);
    push_tones(&mut samples, &[440.0], 20000.0, 0.2);
    push_silence(&mut samples, 0.1);

    let buffer = SampleBuffer::new(samples, SAMPLE_RATE).unwrap();
    let result = annotate_buffer(&buffer, &AnalysisConfig::default()).unwrap();

    let json = serde_json::to_string(&result.metadata).unwrap();
    assert!(json.contains("\"sample_rate\":44100"));
}
