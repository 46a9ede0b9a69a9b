//! Six-stage onset filter cascade
//!
//! Each stage consumes the previous stage's ordered output:
//!
//! 1. Positive-average filter: keep samples that are positive and at least
//!    the mean of all positive samples
//! 2. Windowed maxima: one maximum per consecutive window of retained samples
//! 3. Moving-average smoothing over the maxima sequence (indices preserved)
//! 4. Amplitude-proximity merge: collapse near-equal neighbors into one entry
//! 5. Monotonic-rise filter: drop amplitude decreases (decay of a prior onset)
//! 6. Low-peak rejection: drop entries below a final amplitude floor
//!
//! All stages are pure functions over (index, amplitude) pairs; the cascade
//! only reads the amplitude array and returns new values.

use super::Peak;
use crate::config::AnalysisConfig;

/// Run the full cascade over a raw amplitude sequence
///
/// # Arguments
///
/// * `samples` - Raw signed 16-bit amplitudes
/// * `config` - Cascade window sizes and thresholds (validated by the caller)
///
/// # Returns
///
/// Surviving peaks with strictly ascending indices, a subset of the input
/// indices. A buffer with no positive samples yields an empty list.
pub fn detect_onsets(samples: &[i16], config: &AnalysisConfig) -> Vec<Peak> {
    let retained = filter_positive_mean(samples);
    log::debug!(
        "Onset cascade: {} of {} samples above positive mean",
        retained.len(),
        samples.len()
    );

    let maxima = windowed_maxima(&retained, config.maxima_window);
    let smoothed = smooth_moving_average(&maxima, config.smoothing_window);
    let merged = merge_by_amplitude(&smoothed, config.merge_threshold);
    let rising = filter_drops(&merged);
    let peaks = reject_low_peaks(&rising, config.peak_threshold);

    log::debug!(
        "Onset cascade: {} maxima -> {} merged -> {} rising -> {} peaks",
        maxima.len(),
        merged.len(),
        rising.len(),
        peaks.len()
    );

    peaks
}

/// Stage 1: keep samples that are positive and at least the positive mean
///
/// A buffer with no strictly positive samples returns an empty list; the
/// mean is never computed over an empty set.
pub fn filter_positive_mean(samples: &[i16]) -> Vec<Peak> {
    let mut sum: i64 = 0;
    let mut count: i64 = 0;
    for &sample in samples {
        if sample > 0 {
            sum += sample as i64;
            count += 1;
        }
    }

    if count == 0 {
        return Vec::new();
    }

    let mean = sum as f64 / count as f64;
    samples
        .iter()
        .enumerate()
        .filter(|(_, &sample)| sample > 0 && sample as f64 >= mean)
        .map(|(index, &sample)| Peak {
            index,
            amplitude: sample,
        })
        .collect()
}

/// Stage 2: one maximum per consecutive, non-overlapping window
///
/// Windows partition positions in the retained sequence, not sample indices.
/// Ties keep the first occurrence.
pub fn windowed_maxima(data: &[Peak], window: usize) -> Vec<Peak> {
    data.chunks(window)
        .filter_map(|chunk| {
            chunk
                .iter()
                .copied()
                .reduce(|best, candidate| {
                    if candidate.amplitude > best.amplitude {
                        candidate
                    } else {
                        best
                    }
                })
        })
        .collect()
}

/// Stage 3: centered moving average over the maxima sequence
///
/// The window is clamped at the sequence boundaries; each entry keeps its
/// index and takes the mean amplitude of its neighborhood. The neighborhood
/// spans `window / 2` entries on each side of the center, so an even
/// `window` covers `window + 1` entries.
pub fn smooth_moving_average(data: &[Peak], window: usize) -> Vec<Peak> {
    let half = window / 2;
    data.iter()
        .enumerate()
        .map(|(i, peak)| {
            let start = i.saturating_sub(half);
            let end = (i + half).min(data.len().saturating_sub(1));
            let sum: i64 = data[start..=end].iter().map(|p| p.amplitude as i64).sum();
            let count = (end - start + 1) as i64;
            Peak {
                index: peak.index,
                amplitude: (sum / count) as i16,
            }
        })
        .collect()
}

/// Stage 4: merge entries whose amplitudes differ by less than `threshold`
///
/// Scanning in order, a new entry starts when the amplitude moves at least
/// `threshold` away from the previously kept entry; otherwise the kept entry
/// is replaced by whichever of the two has the larger amplitude. This folds
/// near-duplicate detections of one onset into a single peak.
pub fn merge_by_amplitude(data: &[Peak], threshold: i16) -> Vec<Peak> {
    let mut merged: Vec<Peak> = Vec::new();

    for &current in data {
        match merged.last_mut() {
            None => merged.push(current),
            Some(previous) => {
                let difference = (current.amplitude as i32 - previous.amplitude as i32).abs();
                if difference >= threshold as i32 {
                    merged.push(current);
                } else if current.amplitude > previous.amplitude {
                    *previous = current;
                }
            }
        }
    }

    merged
}

/// Stage 5: keep entries whose amplitude does not drop below the
/// immediately preceding input entry
///
/// A drop means the signal is still decaying from a prior onset rather than
/// rising into a new one.
pub fn filter_drops(data: &[Peak]) -> Vec<Peak> {
    data.iter()
        .enumerate()
        .filter(|(i, peak)| *i == 0 || peak.amplitude >= data[i - 1].amplitude)
        .map(|(_, &peak)| peak)
        .collect()
}

/// Stage 6: reject peaks below the final amplitude floor
pub fn reject_low_peaks(data: &[Peak], threshold: i16) -> Vec<Peak> {
    data.iter()
        .copied()
        .filter(|peak| peak.amplitude >= threshold)
        .collect()
}
