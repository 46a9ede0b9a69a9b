//! Error types for the annotation engine

use std::fmt;

/// Errors that can occur during annotation
#[derive(Debug, Clone)]
pub enum AnalysisError {
    /// Invalid configuration parameters, rejected before any samples are touched
    InvalidConfig(String),

    /// Invalid input data (empty buffer, zero sample rate, etc.)
    InvalidInput(String),

    /// A note name was not found in the note table.
    ///
    /// This indicates a programming error: chord identification must only be
    /// fed names produced by the table itself.
    Lookup(String),

    /// Processing error during analysis
    Processing(String),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            AnalysisError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            AnalysisError::Lookup(msg) => write!(f, "Lookup error: {}", msg),
            AnalysisError::Processing(msg) => write!(f, "Processing error: {}", msg),
        }
    }
}

impl std::error::Error for AnalysisError {}
