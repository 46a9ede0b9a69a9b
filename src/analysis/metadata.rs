//! Analysis metadata structures

use serde::{Deserialize, Serialize};

/// Metadata describing one annotation pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    /// Engine version
    pub algorithm_version: String,

    /// Input sample rate in Hz
    pub sample_rate: u32,

    /// Input duration in seconds
    pub duration_seconds: f64,

    /// Number of detected onsets
    pub onset_count: usize,

    /// Whether chord mode was enabled
    pub chord_mode: bool,

    /// Wall-clock processing time in milliseconds
    pub processing_time_ms: f64,
}

impl Default for AnalysisMetadata {
    fn default() -> Self {
        Self {
            algorithm_version: env!("CARGO_PKG_VERSION").to_string(),
            sample_rate: 0,
            duration_seconds: 0.0,
            onset_count: 0,
            chord_mode: false,
            processing_time_ms: 0.0,
        }
    }
}
