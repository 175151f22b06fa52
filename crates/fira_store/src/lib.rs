//! Lexicon storage for the Fira interpreter.
//!
//! The store holds three record kinds — root words, complex (compound)
//! words, and numerals — and answers conditioned queries with column
//! projection. It never raises on a constraint violation: a duplicate
//! insert is reported through the returned status and otherwise ignored.
//!
//! Tables are persistent `im::Vector` values, so cloning a [`Lexicon`]
//! snapshot is O(1).

pub mod condition;
pub mod persist;
pub mod record;
pub mod store;

pub use condition::{Column, Condition};
pub use persist::{load_from_file, save_to_file};
pub use record::{ComplexWord, Numeral, RootWord};
pub use store::{Kind, Lexicon};
