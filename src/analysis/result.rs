//! Annotation result types

use serde::{Deserialize, Serialize};

use super::metadata::AnalysisMetadata;

/// Musical annotation attached to an onset frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Annotation {
    /// A single note name, or the `"---"` silence sentinel
    Note(String),

    /// Simultaneously sounding notes with an identified chord label
    ///
    /// `notes` is non-empty and de-duplicated; `label` is either
    /// `"<root> <quality>"` or the `"Unknown chord"` sentinel.
    Chord {
        /// Detected note names in first-occurrence order
        notes: Vec<String>,
        /// Identified chord label
        label: String,
    },
}

/// One frame per sample of the analyzed buffer
///
/// Only onset frames carry an annotation; every other frame stays
/// unannotated. An annotated silence (`Note("---")`) is distinct from an
/// unannotated frame: the former was analyzed and found pitchless.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Sample index
    pub index: usize,

    /// Elapsed time at this sample, in seconds
    pub time_seconds: f64,

    /// Raw signed 16-bit amplitude
    pub amplitude: i16,

    /// Musical annotation, written once per detected onset
    pub annotation: Option<Annotation>,
}

/// Complete result of one annotation pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// One frame per input sample
    pub frames: Vec<Frame>,

    /// Detected onset indices, strictly ascending, within buffer bounds
    pub onsets: Vec<usize>,

    /// Analysis metadata
    pub metadata: AnalysisMetadata,
}

impl AnalysisResult {
    /// Frames that received an annotation, in index order
    pub fn annotated_frames(&self) -> impl Iterator<Item = &Frame> {
        self.frames.iter().filter(|f| f.annotation.is_some())
    }
}
