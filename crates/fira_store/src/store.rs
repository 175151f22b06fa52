//! The lexicon: three conditioned record tables.
//!
//! Inserts that would violate a uniqueness constraint are swallowed — the
//! failed write is reported through the returned `bool` and nothing else
//! happens. Queries return rows in insertion order.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::condition::{Column, Condition};
use crate::record::{ComplexWord, Numeral, RootWord};

/// The three record kinds held by the lexicon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    /// Root words.
    Root,
    /// Complex (compound) words.
    Complex,
    /// Numerals.
    Numeral,
}

/// The vocabulary store.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Lexicon {
    roots: Vector<RootWord>,
    complexes: Vector<ComplexWord>,
    numerals: Vector<Numeral>,
}

impl Lexicon {
    /// Creates an empty lexicon.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a root word.
    ///
    /// Returns `false` (without modifying the table) if a record with the
    /// same `(gloss, spelling)` pair already exists.
    pub fn insert_root(&mut self, record: RootWord) -> bool {
        let duplicate = self
            .roots
            .iter()
            .any(|r| r.gloss == record.gloss && r.spelling == record.spelling);
        if duplicate {
            return false;
        }
        self.roots.push_back(record);
        true
    }

    /// Inserts a complex word.
    ///
    /// Returns `false` if a record with the same `(gloss, spelling)` pair
    /// already exists.
    pub fn insert_complex(&mut self, record: ComplexWord) -> bool {
        let duplicate = self
            .complexes
            .iter()
            .any(|r| r.gloss == record.gloss && r.spelling == record.spelling);
        if duplicate {
            return false;
        }
        self.complexes.push_back(record);
        true
    }

    /// Inserts a numeral.
    ///
    /// Returns `false` if the value, the gloss, or the spelling is already
    /// taken.
    pub fn insert_numeral(&mut self, record: Numeral) -> bool {
        let duplicate = self.numerals.iter().any(|r| {
            r.value == record.value || r.gloss == record.gloss || r.spelling == record.spelling
        });
        if duplicate {
            return false;
        }
        self.numerals.push_back(record);
        true
    }

    /// Runs a conditioned query with column projection.
    ///
    /// Rows come back in insertion order, one `Vec<String>` per matching
    /// record, with the requested columns in the requested order. Columns
    /// a record kind does not carry project as empty strings.
    #[must_use]
    pub fn select(&self, kind: Kind, condition: &Condition, columns: &[Column]) -> Vec<Vec<String>> {
        match kind {
            Kind::Root => self
                .roots
                .iter()
                .filter(|r| condition.matches_root(r))
                .map(|r| columns.iter().map(|c| c.of_root(r)).collect())
                .collect(),
            Kind::Complex => self
                .complexes
                .iter()
                .filter(|r| condition.matches_complex(r))
                .map(|r| columns.iter().map(|c| c.of_complex(r)).collect())
                .collect(),
            Kind::Numeral => self
                .numerals
                .iter()
                .filter(|r| condition.matches_numeral(r))
                .map(|r| columns.iter().map(|c| c.of_numeral(r)).collect())
                .collect(),
        }
    }

    /// Updates the spelling of every root word whose gloss matches.
    ///
    /// Returns `true` if at least one record was found and updated.
    pub fn update_root_spelling(&mut self, gloss: &str, spelling: &str) -> bool {
        let mut found = false;
        for record in self.roots.iter_mut() {
            if record.gloss == gloss {
                record.spelling = spelling.to_string();
                found = true;
            }
        }
        found
    }

    /// Deletes every record of the given kind matching the condition.
    pub fn delete(&mut self, kind: Kind, condition: &Condition) {
        match kind {
            Kind::Root => self.roots.retain(|r| !condition.matches_root(r)),
            Kind::Complex => self.complexes.retain(|r| !condition.matches_complex(r)),
            Kind::Numeral => self.numerals.retain(|r| !condition.matches_numeral(r)),
        }
    }

    /// Removes every record from all three tables.
    pub fn clear(&mut self) {
        self.roots.clear();
        self.complexes.clear();
        self.numerals.clear();
    }

    /// Number of records of the given kind.
    #[must_use]
    pub fn count(&self, kind: Kind) -> usize {
        match kind {
            Kind::Root => self.roots.len(),
            Kind::Complex => self.complexes.len(),
            Kind::Numeral => self.numerals.len(),
        }
    }

    /// Returns `true` when all three tables are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty() && self.complexes.is_empty() && self.numerals.is_empty()
    }
}
