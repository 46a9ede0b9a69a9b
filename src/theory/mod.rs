//! Music theory tables
//!
//! Immutable, process-wide reference data:
//! - Equal-tempered note table with frequency and MIDI conversions
//! - Chord interval templates and interval-based chord identification

pub mod chords;
pub mod note_table;

pub use chords::{identify_chord, ChordTemplate, CHORD_TEMPLATES, UNKNOWN_CHORD};
pub use note_table::{NoteTable, SILENCE_NOTE};
