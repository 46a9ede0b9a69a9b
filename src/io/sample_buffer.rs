//! Decoded PCM sample buffer

use crate::error::AnalysisError;

/// An immutable buffer of decoded mono PCM samples
///
/// Holds the signed 16-bit amplitude sequence handed over by an external
/// decoder, together with its sample rate. Sample index `i` corresponds to
/// elapsed time `i / sample_rate` seconds.
#[derive(Debug, Clone)]
pub struct SampleBuffer {
    samples: Vec<i16>,
    sample_rate: u32,
}

impl SampleBuffer {
    /// Create a buffer from decoded samples
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidInput` if `sample_rate` is zero. An
    /// empty sample vector is accepted; annotating it yields no onsets.
    pub fn new(samples: Vec<i16>, sample_rate: u32) -> Result<Self, AnalysisError> {
        if sample_rate == 0 {
            return Err(AnalysisError::InvalidInput(
                "Sample rate must be > 0".to_string(),
            ));
        }

        Ok(Self {
            samples,
            sample_rate,
        })
    }

    /// Raw amplitude values
    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    /// Sample rate in Hz
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the buffer holds no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Total duration in seconds
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Elapsed time of sample `index` in seconds
    pub fn time_at(&self, index: usize) -> f64 {
        index as f64 / self.sample_rate as f64
    }
}
