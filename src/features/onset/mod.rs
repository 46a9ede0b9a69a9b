//! Onset detection
//!
//! Turns the raw amplitude sequence into an ascending list of likely
//! note-attack indices via a fixed six-stage filter cascade.

pub mod cascade;

pub use cascade::detect_onsets;

/// A sample index flagged as a likely note attack, with its amplitude
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Peak {
    /// Index into the sample buffer
    pub index: usize,

    /// Amplitude at (or smoothed around) that index
    pub amplitude: i16,
}
