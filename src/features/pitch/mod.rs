//! Fundamental frequency estimation
//!
//! Time-domain autocorrelation estimator for single-note mode.

pub mod autocorrelation;

pub use autocorrelation::{autocorrelate, estimate_fundamental};
