//! Short-time spectral analysis
//!
//! Window extraction and conditioning, FFT magnitude spectra, and spectral
//! peak picking for chord-mode note detection.

pub mod analyzer;
pub mod window;

pub use analyzer::{detect_chord_notes, dominant_frequency, magnitude_spectrum};
pub use window::{extract_centered, prepare};
