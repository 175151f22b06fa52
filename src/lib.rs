//! Fira - FiraScript vocabulary interpreter
//!
//! This crate re-exports all layers of the Fira system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: fira_runtime    — REPL, line editor, CLI
//! Layer 2: fira_script     — tokenizer, dispatcher, composition engine
//! Layer 1: fira_store      — lexicon tables, conditions, snapshots
//! Layer 0: fira_foundation — error taxonomy, shared Result
//! ```

pub use fira_foundation as foundation;
pub use fira_runtime as runtime;
pub use fira_script as script;
pub use fira_store as store;
