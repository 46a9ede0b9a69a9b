//! Equal-tempered note table
//!
//! Maps frequencies to canonical note names ("A4", "C#2", ...) on the
//! 12-tone equal-tempered grid, tuned to A4 = 440 Hz. The table covers nine
//! octaves (C0 through B8, MIDI 12-119) plus a silence sentinel at 0 Hz, and
//! is built once per process.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::AnalysisError;

/// Note name used for "no discernible pitch"
///
/// Distinct from an unannotated frame: a frame annotated with this sentinel
/// was analyzed and found silent.
pub const SILENCE_NOTE: &str = "---";

/// The 12 pitch class names, C through B
const PITCH_CLASSES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// MIDI number of A4 (440 Hz reference)
const MIDI_A4: i32 = 69;

/// MIDI range used when converting detected frequencies to note numbers
/// (standard 88-key piano, A0 through C8)
const MIDI_MIN: i32 = 21;
const MIDI_MAX: i32 = 108;

/// Immutable frequency/name lookup table
///
/// Entries are sorted by ascending frequency with the silence sentinel first,
/// so nearest-frequency lookup is a binary search. A companion map resolves a
/// full note name to its semitone class (0-11, octave-independent) for chord
/// arithmetic.
#[derive(Debug)]
pub struct NoteTable {
    /// (frequency, name) pairs in generation order: sentinel, then ascending
    /// octave, ascending pitch class
    entries: Vec<(f64, String)>,

    /// Full note name -> semitone class (0-11); the sentinel is not a member
    semitone_classes: HashMap<String, u8>,
}

impl NoteTable {
    /// Shared process-wide table, built on first use
    pub fn global() -> &'static NoteTable {
        static TABLE: OnceLock<NoteTable> = OnceLock::new();
        TABLE.get_or_init(NoteTable::build)
    }

    /// Build the table deterministically from the A4 = 440 Hz reference
    pub fn build() -> Self {
        let mut entries = Vec::with_capacity(9 * 12 + 1);
        let mut semitone_classes = HashMap::with_capacity(9 * 12);

        entries.push((0.0, SILENCE_NOTE.to_string()));

        // C0 is MIDI 12; nine octaves end at B8 (MIDI 119)
        for octave in 0..=8i32 {
            for (class, pitch_class) in PITCH_CLASSES.iter().enumerate() {
                let midi = (octave + 1) * 12 + class as i32;
                let frequency = midi_to_frequency(midi);
                let name = format!("{}{}", pitch_class, octave);
                entries.push((frequency, name.clone()));
                semitone_classes.insert(name, class as u8);
            }
        }

        Self {
            entries,
            semitone_classes,
        }
    }

    /// Name of the table entry closest in frequency to `frequency`
    ///
    /// Ties break toward the entry earlier in generation order. The silence
    /// sentinel is returned only for zero or negative input.
    pub fn nearest(&self, frequency: f64) -> &str {
        if frequency <= 0.0 {
            return SILENCE_NOTE;
        }

        // Skip the sentinel; pitched entries start at index 1.
        let pitched = &self.entries[1..];
        let idx = pitched.partition_point(|(f, _)| *f < frequency);

        if idx == 0 {
            return &pitched[0].1;
        }
        if idx == pitched.len() {
            return &pitched[pitched.len() - 1].1;
        }

        let below = &pitched[idx - 1];
        let above = &pitched[idx];
        if (frequency - below.0) <= (above.0 - frequency) {
            &below.1
        } else {
            &above.1
        }
    }

    /// Convert a detected frequency to a MIDI note number
    ///
    /// Returns `None` for zero or negative frequencies (no pitch). The result
    /// is clamped to the standard 88-key range [21, 108].
    pub fn frequency_to_midi(&self, frequency: f64) -> Option<u8> {
        if frequency <= 0.0 {
            return None;
        }

        let midi = (MIDI_A4 as f64 + 12.0 * (frequency / 440.0).log2()).round() as i32;
        Some(midi.clamp(MIDI_MIN, MIDI_MAX) as u8)
    }

    /// Canonical name of a MIDI note number
    pub fn midi_to_name(&self, midi: u8) -> String {
        let class = (midi % 12) as usize;
        let octave = (midi / 12) as i32 - 1;
        format!("{}{}", PITCH_CLASSES[class], octave)
    }

    /// Semitone class (0-11) of a full note name
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::Lookup` if the name is not a table member.
    /// Callers must only pass names produced by this table; anything else is
    /// a contract violation.
    pub fn semitone_class(&self, name: &str) -> Result<u8, AnalysisError> {
        self.semitone_classes
            .get(name)
            .copied()
            .ok_or_else(|| AnalysisError::Lookup(format!("Unknown note name: {:?}", name)))
    }

    /// All (frequency, name) entries in generation order, sentinel included
    pub fn entries(&self) -> impl Iterator<Item = (f64, &str)> {
        self.entries.iter().map(|(f, n)| (*f, n.as_str()))
    }
}

/// Equal-tempered frequency of a MIDI note number
fn midi_to_frequency(midi: i32) -> f64 {
    440.0 * 2f64.powf((midi - MIDI_A4) as f64 / 12.0)
}
