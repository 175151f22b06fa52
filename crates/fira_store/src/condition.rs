//! Query conditions and column projection.
//!
//! The interpreter builds [`Condition`] values (equality predicates on the
//! language columns or the numeral value); the store only executes them.
//! This is the typed rendition of the conditioned-record contract: the
//! store never inspects a predicate's meaning beyond evaluating it.

use crate::record::{ComplexWord, Numeral, RootWord};

/// A predicate over lexicon records.
///
/// String comparisons are exact; callers are expected to lowercase their
/// operands the same way record fields are lowercased on insert.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Condition {
    /// Matches every record.
    All,
    /// The gloss (English column) equals the operand.
    GlossEq(String),
    /// The spelling (Fira column) equals the operand.
    SpellingEq(String),
    /// Either language column equals the operand.
    EitherEq(String),
    /// The numeral value equals the operand. Never matches word records.
    ValueEq(i64),
}

impl Condition {
    /// Evaluates this condition against a root word.
    #[must_use]
    pub fn matches_root(&self, record: &RootWord) -> bool {
        match self {
            Self::All => true,
            Self::GlossEq(word) => record.gloss == *word,
            Self::SpellingEq(word) => record.spelling == *word,
            Self::EitherEq(word) => record.gloss == *word || record.spelling == *word,
            Self::ValueEq(_) => false,
        }
    }

    /// Evaluates this condition against a complex word.
    #[must_use]
    pub fn matches_complex(&self, record: &ComplexWord) -> bool {
        match self {
            Self::All => true,
            Self::GlossEq(word) => record.gloss == *word,
            Self::SpellingEq(word) => record.spelling == *word,
            Self::EitherEq(word) => record.gloss == *word || record.spelling == *word,
            Self::ValueEq(_) => false,
        }
    }

    /// Evaluates this condition against a numeral.
    #[must_use]
    pub fn matches_numeral(&self, record: &Numeral) -> bool {
        match self {
            Self::All => true,
            Self::GlossEq(word) => record.gloss == *word,
            Self::SpellingEq(word) => record.spelling == *word,
            Self::EitherEq(word) => record.gloss == *word || record.spelling == *word,
            Self::ValueEq(value) => record.value == *value,
        }
    }
}

/// A projectable column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Column {
    /// English name.
    Gloss,
    /// Fira rendering.
    Spelling,
    /// Numeral value (empty for word records).
    Value,
    /// Defining command line (empty for non-compound records).
    Source,
    /// Annotation.
    Note,
}

impl Column {
    /// All columns, in table order.
    pub const ALL: [Self; 5] = [
        Self::Gloss,
        Self::Spelling,
        Self::Value,
        Self::Source,
        Self::Note,
    ];

    /// Projects this column out of a root word.
    #[must_use]
    pub fn of_root(self, record: &RootWord) -> String {
        match self {
            Self::Gloss => record.gloss.clone(),
            Self::Spelling => record.spelling.clone(),
            Self::Note => record.note.clone(),
            Self::Value | Self::Source => String::new(),
        }
    }

    /// Projects this column out of a complex word.
    #[must_use]
    pub fn of_complex(self, record: &ComplexWord) -> String {
        match self {
            Self::Gloss => record.gloss.clone(),
            Self::Spelling => record.spelling.clone(),
            Self::Source => record.source.clone(),
            Self::Note => record.note.clone(),
            Self::Value => String::new(),
        }
    }

    /// Projects this column out of a numeral.
    #[must_use]
    pub fn of_numeral(self, record: &Numeral) -> String {
        match self {
            Self::Gloss => record.gloss.clone(),
            Self::Spelling => record.spelling.clone(),
            Self::Value => record.value.to_string(),
            Self::Note => record.note.clone(),
            Self::Source => String::new(),
        }
    }
}
