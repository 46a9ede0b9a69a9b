//! Annotation result types
//!
//! Frames, per-onset annotations, and analysis metadata.

pub mod metadata;
pub mod result;

pub use metadata::AnalysisMetadata;
pub use result::{AnalysisResult, Annotation, Frame};
