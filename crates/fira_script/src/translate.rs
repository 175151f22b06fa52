//! The translation resolver.
//!
//! Looks a single word up in either direction across the three record
//! kinds. Root words always win; for Fira-bound lookups of a purely
//! numeric word, a numeral matched by value supersedes any compound word;
//! compounds come last. Lookups are case-insensitive.

use fira_foundation::{Error, Result};
use fira_store::{Column, Condition, Kind, Lexicon};

/// Translation direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Fira spelling to English gloss.
    ToEnglish,
    /// English gloss to Fira spelling.
    ToFira,
}

impl Direction {
    /// Parses a direction token (`e`/`english` or `f`/`fira`),
    /// case-insensitively.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "e" | "english" => Some(Self::ToEnglish),
            "f" | "fira" => Some(Self::ToFira),
            _ => None,
        }
    }
}

/// Resolves a single word.
///
/// # Errors
///
/// Returns a syntax error when no record kind has a translation.
pub fn resolve(lexicon: &Lexicon, word: &str, direction: Direction) -> Result<String> {
    let needle = word.to_lowercase();
    let (condition, column) = match direction {
        Direction::ToEnglish => (Condition::SpellingEq(needle.clone()), Column::Gloss),
        Direction::ToFira => (Condition::GlossEq(needle.clone()), Column::Spelling),
    };

    let root_rows = lexicon.select(Kind::Root, &condition, &[column]);
    if let Some(row) = root_rows.into_iter().next() {
        return Ok(row.into_iter().next().unwrap_or_default());
    }

    // A purely numeric word bound for Fira resolves through the numeral
    // table by value, ahead of any compound record.
    if direction == Direction::ToFira {
        if let Ok(value) = needle.parse::<i64>() {
            let numeral_rows =
                lexicon.select(Kind::Numeral, &Condition::ValueEq(value), &[Column::Spelling]);
            if let Some(row) = numeral_rows.into_iter().next() {
                return Ok(row.into_iter().next().unwrap_or_default());
            }
        }
    }

    let complex_rows = lexicon.select(Kind::Complex, &condition, &[column]);
    if let Some(row) = complex_rows.into_iter().next() {
        return Ok(row.into_iter().next().unwrap_or_default());
    }

    Err(Error::syntax(format!(
        "TRANSLATE ERROR: no translation found for '{word}'"
    )))
}
