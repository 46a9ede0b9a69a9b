//! # Chordscribe
//!
//! A batch note and chord annotation engine for mono PCM audio, providing
//! onset detection, pitch extraction, and interval-based chord
//! identification.
//!
//! ## Features
//!
//! - **Onset Detection**: Six-stage amplitude filter cascade over the raw
//!   sample sequence
//! - **Pitch Extraction**: Time-domain autocorrelation or FFT magnitude
//!   spectrum per onset
//! - **Note Mapping**: Equal-tempered note table tuned to A4 = 440 Hz
//! - **Chord Identification**: Interval-template matching (Major, Minor,
//!   Diminished, Augmented, Dominant7)
//!
//! ## Quick Start
//!
//! ```
//! use chordscribe::{annotate_buffer, AnalysisConfig, SampleBuffer};
//!
//! // Decoded mono PCM from an external decoder
//! let buffer = SampleBuffer::new(vec![0i16; 44100], 44100)?;
//!
//! let result = annotate_buffer(&buffer, &AnalysisConfig::default())?;
//!
//! for frame in result.annotated_frames() {
//!     println!("{:.3}s: {:?}", frame.time_seconds, frame.annotation);
//! }
//! # Ok::<(), chordscribe::AnalysisError>(())
//! ```
//!
//! ## Architecture
//!
//! The pipeline is a synchronous whole-buffer pass:
//!
//! ```text
//! Samples → Onset Cascade → per-onset Window → Spectrum / Autocorrelation
//!         → Note Table → (chord mode) Chord Identification → Annotations
//! ```
//!
//! Decoding, plotting, and CLI handling are the caller's responsibility;
//! the engine consumes an already-decoded [`SampleBuffer`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod features;
pub mod io;
pub mod theory;

// Re-export main types
pub use analysis::{AnalysisMetadata, AnalysisResult, Annotation, Frame};
pub use config::{AnalysisConfig, PitchMethod};
pub use error::AnalysisError;
pub use io::SampleBuffer;
pub use theory::{NoteTable, SILENCE_NOTE, UNKNOWN_CHORD};

use features::onset;
use features::pitch;
use features::spectral;
use theory::chords;

/// Annotate every detected onset of a sample buffer
///
/// Runs the onset cascade once over the full buffer, then analyzes a local
/// window around each onset: in chord mode the spectral peaks become a note
/// set plus a chord label, otherwise a single fundamental becomes a note
/// name. Annotations land only on onset frames; all other frames stay
/// unannotated.
///
/// Running the same buffer and configuration twice produces identical
/// results; the engine holds no mutable state between calls.
///
/// # Arguments
///
/// * `buffer` - Decoded mono PCM samples with their sample rate
/// * `config` - Pipeline parameters, validated before any sample is read
///
/// # Errors
///
/// Returns `AnalysisError::InvalidConfig` for invalid parameters, or
/// `AnalysisError::Lookup` if chord identification encounters a note name
/// outside the table (a programming error, not an input condition).
///
/// # Example
///
/// ```
/// use chordscribe::{annotate_buffer, AnalysisConfig, SampleBuffer};
///
/// let buffer = SampleBuffer::new(vec![0i16; 44100], 44100)?;
/// let mut config = AnalysisConfig::default();
/// config.chord_mode = true;
///
/// let result = annotate_buffer(&buffer, &config)?;
/// assert!(result.onsets.is_empty()); // silence has no onsets
/// # Ok::<(), chordscribe::AnalysisError>(())
/// ```
pub fn annotate_buffer(
    buffer: &SampleBuffer,
    config: &AnalysisConfig,
) -> Result<AnalysisResult, AnalysisError> {
    use std::time::Instant;
    let start_time = Instant::now();

    config.validate()?;

    log::debug!(
        "Annotating {} samples at {} Hz (chord_mode={})",
        buffer.len(),
        buffer.sample_rate(),
        config.chord_mode
    );

    let table = NoteTable::global();

    let mut frames: Vec<Frame> = buffer
        .samples()
        .iter()
        .enumerate()
        .map(|(index, &amplitude)| Frame {
            index,
            time_seconds: buffer.time_at(index),
            amplitude,
            annotation: None,
        })
        .collect();

    let peaks = onset::detect_onsets(buffer.samples(), config);
    log::debug!("Detected {} onsets", peaks.len());

    for peak in &peaks {
        if let Some(annotation) = annotate_onset(buffer, peak.index, config, table)? {
            frames[peak.index].annotation = Some(annotation);
        }
    }

    let onsets: Vec<usize> = peaks.iter().map(|p| p.index).collect();
    let metadata = AnalysisMetadata {
        algorithm_version: env!("CARGO_PKG_VERSION").to_string(),
        sample_rate: buffer.sample_rate(),
        duration_seconds: buffer.duration_seconds(),
        onset_count: onsets.len(),
        chord_mode: config.chord_mode,
        processing_time_ms: start_time.elapsed().as_secs_f64() * 1000.0,
    };

    Ok(AnalysisResult {
        frames,
        onsets,
        metadata,
    })
}

/// Analyze the window around one onset
///
/// Returns `None` when no full analysis window fits at this onset (buffer
/// edge); the frame then stays unannotated.
fn annotate_onset(
    buffer: &SampleBuffer,
    onset: usize,
    config: &AnalysisConfig,
    table: &NoteTable,
) -> Result<Option<Annotation>, AnalysisError> {
    let Some(mut window) =
        spectral::extract_centered(buffer.samples(), onset, config.fft_window_size)
    else {
        log::debug!("Onset {}: window truncated at buffer edge, skipping", onset);
        return Ok(None);
    };
    spectral::prepare(&mut window);

    let annotation = if config.chord_mode {
        let notes = spectral::detect_chord_notes(
            &window,
            buffer.sample_rate(),
            config.spectral_peak_fraction,
            table,
        );
        if notes.is_empty() {
            // Window analyzed but spectrally empty
            Annotation::Note(SILENCE_NOTE.to_string())
        } else {
            let label = chords::identify_chord(&notes, table)?;
            Annotation::Chord { notes, label }
        }
    } else {
        let frequency = match config.pitch_method {
            PitchMethod::Autocorrelation => pitch::estimate_fundamental(
                &window,
                buffer.sample_rate(),
                config.min_fundamental_hz,
                config.max_fundamental_hz,
            )
            .unwrap_or(0.0),
            PitchMethod::Spectral => {
                spectral::dominant_frequency(&window, buffer.sample_rate())
            }
        };

        let name = match table.frequency_to_midi(frequency) {
            Some(midi) => table.midi_to_name(midi),
            None => SILENCE_NOTE.to_string(),
        };
        Annotation::Note(name)
    };

    Ok(Some(annotation))
}
