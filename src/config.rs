//! Configuration parameters for note and chord annotation

use crate::error::AnalysisError;

/// Pitch extraction method for single-note mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PitchMethod {
    /// Time-domain autocorrelation of the analysis window (default)
    Autocorrelation,

    /// Frequency-domain: strongest bin of the magnitude spectrum
    Spectral,
}

/// Analysis configuration parameters
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    // Onset cascade
    /// Window size for the windowed-maxima stage, in retained samples (default: 11)
    pub maxima_window: usize,

    /// Centered moving-average window over the maxima sequence (default: 7)
    pub smoothing_window: usize,

    /// Minimum amplitude difference to start a new onset entry (default: 2500)
    /// Near-duplicate detections closer than this merge into one.
    pub merge_threshold: i16,

    /// Final amplitude floor for a surviving onset (default: 5000)
    pub peak_threshold: i16,

    // Spectral analysis
    /// Analysis window size in samples (default: 2048)
    pub fft_window_size: usize,

    /// Fraction of the maximum magnitude a spectral peak must reach in
    /// chord mode (default: 0.1)
    pub spectral_peak_fraction: f32,

    // Autocorrelation
    /// Lowest fundamental frequency to search for, in Hz (default: 50.0)
    pub min_fundamental_hz: f32,

    /// Highest fundamental frequency to search for, in Hz (default: 2000.0)
    pub max_fundamental_hz: f32,

    // Mode
    /// Detect simultaneous notes and identify a chord per onset instead of a
    /// single fundamental (default: false)
    pub chord_mode: bool,

    /// Pitch extraction method used in single-note mode (default: Autocorrelation)
    pub pitch_method: PitchMethod,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            maxima_window: 11,
            smoothing_window: 7,
            merge_threshold: 2500,
            peak_threshold: 5000,
            fft_window_size: 2048,
            spectral_peak_fraction: 0.1,
            min_fundamental_hz: 50.0,
            max_fundamental_hz: 2000.0,
            chord_mode: false,
            pitch_method: PitchMethod::Autocorrelation,
        }
    }
}

impl AnalysisConfig {
    /// Validate configuration parameters
    ///
    /// Called by [`crate::annotate_buffer`] before any samples are processed,
    /// so invalid configurations fail fast.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidConfig` if any window size is zero, a
    /// threshold is not positive, the spectral peak fraction is outside
    /// (0, 1], or the fundamental search range is empty.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.maxima_window == 0 {
            return Err(AnalysisError::InvalidConfig(
                "Maxima window must be > 0".to_string(),
            ));
        }

        if self.smoothing_window == 0 {
            return Err(AnalysisError::InvalidConfig(
                "Smoothing window must be > 0".to_string(),
            ));
        }

        if self.merge_threshold <= 0 {
            return Err(AnalysisError::InvalidConfig(
                "Merge threshold must be > 0".to_string(),
            ));
        }

        if self.peak_threshold <= 0 {
            return Err(AnalysisError::InvalidConfig(
                "Peak threshold must be > 0".to_string(),
            ));
        }

        if self.fft_window_size < 2 {
            return Err(AnalysisError::InvalidConfig(
                "FFT window size must be >= 2".to_string(),
            ));
        }

        if !(self.spectral_peak_fraction > 0.0 && self.spectral_peak_fraction <= 1.0) {
            return Err(AnalysisError::InvalidConfig(format!(
                "Spectral peak fraction must be in (0, 1], got {}",
                self.spectral_peak_fraction
            )));
        }

        if !(self.min_fundamental_hz > 0.0) {
            return Err(AnalysisError::InvalidConfig(
                "Minimum fundamental frequency must be > 0".to_string(),
            ));
        }

        if self.min_fundamental_hz >= self.max_fundamental_hz {
            return Err(AnalysisError::InvalidConfig(format!(
                "Fundamental search range is empty: [{}, {}] Hz",
                self.min_fundamental_hz, self.max_fundamental_hz
            )));
        }

        Ok(())
    }
}
