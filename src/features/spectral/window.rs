//! Analysis window extraction and conditioning

/// Extract a window of `window_size` samples centered on `center`
///
/// The window start is clamped at the left buffer edge. If fewer than
/// `window_size` samples remain from the (clamped) start, there is nothing
/// to analyze at this onset and `None` is returned; a short window at the
/// buffer tail is a "no detection", never an error.
pub fn extract_centered(samples: &[i16], center: usize, window_size: usize) -> Option<Vec<f32>> {
    let start = center.saturating_sub(window_size / 2);
    let end = start.checked_add(window_size)?;
    if end > samples.len() {
        return None;
    }

    Some(samples[start..end].iter().map(|&s| s as f32).collect())
}

/// Condition a window in place for spectral or autocorrelation analysis
///
/// Removes the DC offset, normalizes by peak absolute amplitude (skipped for
/// an all-zero window), and applies a Hann taper.
pub fn prepare(window: &mut [f32]) {
    if window.is_empty() {
        return;
    }

    let mean = window.iter().sum::<f32>() / window.len() as f32;
    for sample in window.iter_mut() {
        *sample -= mean;
    }

    let peak = window.iter().fold(0.0f32, |max, s| max.max(s.abs()));
    if peak > 0.0 {
        for sample in window.iter_mut() {
            *sample /= peak;
        }
    }

    apply_hann(window);
}

/// Multiply the window by a Hann taper
fn apply_hann(window: &mut [f32]) {
    let n = window.len();
    if n < 2 {
        return;
    }

    let scale = 2.0 * std::f32::consts::PI / (n - 1) as f32;
    for (i, sample) in window.iter_mut().enumerate() {
        *sample *= 0.5 * (1.0 - (scale * i as f32).cos());
    }
}

/// Root-mean-square amplitude of a window
pub fn rms(window: &[f32]) -> f32 {
    if window.is_empty() {
        return 0.0;
    }
    let sum_sq: f32 = window.iter().map(|s| s * s).sum();
    (sum_sq / window.len() as f32).sqrt()
}
