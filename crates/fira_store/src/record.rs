//! Record kinds held by the lexicon.
//!
//! All string fields are stored lowercased; the interpreter normalizes
//! before writing and before building query conditions.

use serde::{Deserialize, Serialize};

/// An atomic, manually defined vocabulary entry.
///
/// Unique within its table by `(gloss, spelling)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootWord {
    /// English name of the word.
    pub gloss: String,
    /// Fira rendering, supplied by the user.
    pub spelling: String,
    /// Free-form annotation, empty when none was given.
    pub note: String,
}

impl RootWord {
    /// Creates a root word with no note.
    #[must_use]
    pub fn new(gloss: impl Into<String>, spelling: impl Into<String>) -> Self {
        Self {
            gloss: gloss.into(),
            spelling: spelling.into(),
            note: String::new(),
        }
    }

    /// Sets the note.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }
}

/// A vocabulary entry whose spelling was computed from other words.
///
/// The `source` field keeps the literal command line that produced the
/// record, for audit and replay. The spelling is always assembled by the
/// interpreter; the store never accepts a caller-authored spelling path
/// for compounds other than through that assembly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexWord {
    /// English name of the word.
    pub gloss: String,
    /// Computed Fira rendering.
    pub spelling: String,
    /// The defining command line, verbatim.
    pub source: String,
    /// Free-form annotation, empty when none was given.
    pub note: String,
}

/// A numeral entry.
///
/// `spelling` is always produced by the numeral decomposer from `value`.
/// `value` is the primary key; `gloss` and `spelling` are each unique.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Numeral {
    /// The integer this numeral denotes.
    pub value: i64,
    /// English name of the numeral.
    pub gloss: String,
    /// Decomposed Fira rendering.
    pub spelling: String,
    /// Free-form annotation, empty when none was given.
    pub note: String,
}
