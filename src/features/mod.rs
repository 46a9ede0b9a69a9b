//! Feature extraction modules
//!
//! - Onset detection (six-stage amplitude cascade)
//! - Spectral analysis (windowed FFT, peak picking)
//! - Pitch estimation (time-domain autocorrelation)

pub mod onset;
pub mod pitch;
pub mod spectral;
