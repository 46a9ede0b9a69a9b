//! Chord interval templates and identification
//!
//! A chord template is a set of semitone offsets relative to a root. A set of
//! detected notes matches a template when, for some candidate root, every
//! template offset is present among the notes' offsets modulo 12.

use super::note_table::NoteTable;
use crate::error::AnalysisError;

/// Label returned when no (root, template) pair matches
pub const UNKNOWN_CHORD: &str = "Unknown chord";

/// A named set of semitone offsets relative to a root
#[derive(Debug, Clone, Copy)]
pub struct ChordTemplate {
    /// Chord quality name ("Major", "Minor", ...)
    pub name: &'static str,

    /// Semitone offsets from the root, root itself included as 0
    pub intervals: &'static [u8],
}

/// Fixed chord dictionary, matched in declaration order
pub const CHORD_TEMPLATES: [ChordTemplate; 5] = [
    ChordTemplate {
        name: "Major",
        intervals: &[0, 4, 7],
    },
    ChordTemplate {
        name: "Minor",
        intervals: &[0, 3, 7],
    },
    ChordTemplate {
        name: "Diminished",
        intervals: &[0, 3, 6],
    },
    ChordTemplate {
        name: "Augmented",
        intervals: &[0, 4, 8],
    },
    ChordTemplate {
        name: "Dominant7",
        intervals: &[0, 4, 7, 10],
    },
];

/// Identify a chord from a de-duplicated set of note names
///
/// Candidate roots are tried in first-occurrence order over `notes`;
/// templates in declaration order. The first (root, template) pair whose
/// offsets are all present wins, with no best-fit scoring. If nothing
/// matches, [`UNKNOWN_CHORD`] is returned.
///
/// # Arguments
///
/// * `notes` - Octave-qualified note names produced by `table`
/// * `table` - Note table used for semitone arithmetic
///
/// # Errors
///
/// Returns `AnalysisError::Lookup` if any name is not a table member. That
/// only happens when callers feed names the table did not produce, which is
/// a programming error rather than a recoverable condition.
pub fn identify_chord(notes: &[String], table: &NoteTable) -> Result<String, AnalysisError> {
    let classes: Vec<u8> = notes
        .iter()
        .map(|name| table.semitone_class(name))
        .collect::<Result<_, _>>()?;

    for (root_name, &root_class) in notes.iter().zip(&classes) {
        let mut offsets = [false; 12];
        for &class in &classes {
            offsets[((class + 12 - root_class) % 12) as usize] = true;
        }

        for template in &CHORD_TEMPLATES {
            if template
                .intervals
                .iter()
                .all(|&offset| offsets[offset as usize])
            {
                return Ok(format!("{} {}", root_name, template.name));
            }
        }
    }

    Ok(UNKNOWN_CHORD.to_string())
}
