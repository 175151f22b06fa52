//! Runtime layer for the Fira interpreter.
//!
//! Hosts the interactive REPL, the line-editor abstraction over rustyline,
//! and the `fira` CLI binary.

pub mod editor;
pub mod repl;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::Repl;
