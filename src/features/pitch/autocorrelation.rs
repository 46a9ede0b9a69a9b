//! Time-domain autocorrelation pitch estimation
//!
//! Computes the length-normalized autocorrelation of a prepared analysis
//! window and scans a plausible lag range for the first strict local
//! maximum. The winning lag converts to frequency as `sample_rate / lag`.
//!
//! A periodic signal of period `T` produces autocorrelation peaks at lags
//! `T, 2T, ...`; scanning lags ascending and stopping at the first peak
//! favors the true fundamental over its subharmonics.

/// RMS floor below which a window is treated as silent
const SILENCE_RMS: f32 = 1e-6;

/// Length-normalized autocorrelation of a window
///
/// `R[lag] = (1 / (N - lag)) * sum over i < N - lag of x[i] * x[i + lag]`
/// for lags `0..N`.
pub fn autocorrelate(window: &[f32]) -> Vec<f32> {
    let n = window.len();
    let mut acf = vec![0.0f32; n];

    for (lag, value) in acf.iter_mut().enumerate() {
        let mut sum = 0.0f64;
        for i in 0..n - lag {
            sum += window[i] as f64 * window[i + lag] as f64;
        }
        *value = (sum / (n - lag) as f64) as f32;
    }

    acf
}

/// Estimate the fundamental frequency of a prepared window
///
/// Searches lags between `sample_rate / max_hz` and `sample_rate / min_hz`
/// (the plausible fundamental range) in ascending order and returns the
/// frequency of the first lag whose autocorrelation exceeds both neighbors.
///
/// # Returns
///
/// `Some(frequency)` in Hz, or `None` when the window is effectively silent
/// or no local maximum exists in the search range. Silence and noise are
/// expected inputs, not errors.
pub fn estimate_fundamental(
    window: &[f32],
    sample_rate: u32,
    min_hz: f32,
    max_hz: f32,
) -> Option<f64> {
    if window.len() < 3 {
        return None;
    }

    if crate::features::spectral::window::rms(window) < SILENCE_RMS {
        return None;
    }

    let acf = autocorrelate(window);

    let min_lag = ((sample_rate as f32 / max_hz) as usize).max(1);
    // The scan reads acf[lag + 1], so the upper bound stays inside the window
    let max_lag = ((sample_rate as f32 / min_hz) as usize).min(window.len() - 2);
    if min_lag + 1 > max_lag {
        return None;
    }

    for lag in (min_lag + 1)..=max_lag {
        if acf[lag] > acf[lag - 1] && acf[lag] > acf[lag + 1] {
            let frequency = sample_rate as f64 / lag as f64;
            log::debug!(
                "Autocorrelation peak at lag {} -> {:.2} Hz",
                lag,
                frequency
            );
            return Some(frequency);
        }
    }

    None
}
