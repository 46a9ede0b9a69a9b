//! FFT magnitude spectra and spectral note detection
//!
//! Chord mode collects every spectral peak above a fraction of the maximum
//! magnitude and maps each to the nearest note name; single-note mode takes
//! the single strongest bin. Bin `k` of an `N`-point window corresponds to
//! `k * sample_rate / N` Hz.

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

use crate::theory::note_table::NoteTable;

/// Numerical stability epsilon
const EPSILON: f32 = 1e-10;

/// Detected partials closer than this collapse into one frequency, so a
/// single note smeared over neighboring bins is not counted twice
const CLUSTER_WIDTH_HZ: f64 = 5.0;

/// Magnitude spectrum of a prepared window
///
/// Computes the unscaled forward DFT and returns the magnitudes of the
/// first half of the bins (up to Nyquist).
pub fn magnitude_spectrum(window: &[f32]) -> Vec<f32> {
    if window.is_empty() {
        return Vec::new();
    }

    let mut spectrum: Vec<Complex<f32>> =
        window.iter().map(|&s| Complex::new(s, 0.0)).collect();

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(spectrum.len());
    fft.process(&mut spectrum);

    spectrum[..spectrum.len() / 2]
        .iter()
        .map(|c| c.norm())
        .collect()
}

/// Frequency of the strongest spectral bin, in Hz
///
/// Returns 0.0 (no pitch) when the spectrum carries no energy, so a silent
/// window resolves to the silence sentinel downstream rather than a
/// spurious note.
pub fn dominant_frequency(window: &[f32], sample_rate: u32) -> f64 {
    let magnitudes = magnitude_spectrum(window);

    let mut best_bin = 0usize;
    let mut best_magnitude = 0.0f32;
    for (bin, &magnitude) in magnitudes.iter().enumerate() {
        if magnitude > best_magnitude {
            best_magnitude = magnitude;
            best_bin = bin;
        }
    }

    if best_magnitude <= EPSILON {
        return 0.0;
    }

    bin_frequency(best_bin, sample_rate, window.len())
}

/// Detect simultaneously sounding notes in a prepared window
///
/// Collects every strict local maximum of the magnitude spectrum at or above
/// `peak_fraction` of the maximum magnitude, clusters near-coincident
/// frequencies, and maps each to its nearest note name. Duplicate names
/// collapse, preserving first-occurrence order.
///
/// A window with no spectral energy returns an empty list.
pub fn detect_chord_notes(
    window: &[f32],
    sample_rate: u32,
    peak_fraction: f32,
    table: &NoteTable,
) -> Vec<String> {
    let magnitudes = magnitude_spectrum(window);
    if magnitudes.len() < 3 {
        return Vec::new();
    }

    let max_magnitude = magnitudes.iter().copied().fold(0.0f32, f32::max);
    if max_magnitude <= EPSILON {
        return Vec::new();
    }

    let threshold = max_magnitude * peak_fraction;
    let mut frequencies = Vec::new();
    for bin in 1..magnitudes.len() - 1 {
        let magnitude = magnitudes[bin];
        if magnitude >= threshold
            && magnitude > magnitudes[bin - 1]
            && magnitude > magnitudes[bin + 1]
        {
            frequencies.push(bin_frequency(bin, sample_rate, window.len()));
        }
    }

    let clustered = cluster_frequencies(&frequencies, CLUSTER_WIDTH_HZ);
    log::debug!(
        "Spectral peaks: {} bins above {:.1}% of max, {} after clustering",
        frequencies.len(),
        peak_fraction * 100.0,
        clustered.len()
    );

    let mut notes: Vec<String> = Vec::new();
    for frequency in clustered {
        let name = table.nearest(frequency);
        if !notes.iter().any(|n| n == name) {
            notes.push(name.to_string());
        }
    }

    notes
}

/// Center frequency of a spectral bin
fn bin_frequency(bin: usize, sample_rate: u32, window_size: usize) -> f64 {
    bin as f64 * sample_rate as f64 / window_size as f64
}

/// Collapse ascending frequencies closer than `width` into their mean
fn cluster_frequencies(frequencies: &[f64], width: f64) -> Vec<f64> {
    let mut clustered = Vec::new();
    let mut iter = frequencies.iter();

    let Some(&first) = iter.next() else {
        return clustered;
    };

    let mut sum = first;
    let mut count = 1usize;
    let mut previous = first;

    for &frequency in iter {
        if frequency - previous <= width {
            sum += frequency;
            count += 1;
        } else {
            clustered.push(sum / count as f64);
            sum = frequency;
            count = 1;
        }
        previous = frequency;
    }
    clustered.push(sum / count as f64);

    clustered
}
