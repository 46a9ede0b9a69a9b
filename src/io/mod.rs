//! Audio input types
//!
//! The engine consumes already-decoded PCM; format decoding and WAV parsing
//! live with the caller.

pub mod sample_buffer;

pub use sample_buffer::SampleBuffer;
