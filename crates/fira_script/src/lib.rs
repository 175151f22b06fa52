//! The FiraScript language core.
//!
//! FiraScript is a line-based command language for defining, storing, and
//! translating vocabulary for a constructed language. This crate holds the
//! interpreter: the line tokenizer, the command dispatcher, the recursive
//! modifier parser shared by the definition commands, the word assembler,
//! the numeral decomposer, the translation resolver, and the depth-guarded
//! file includer.
//!
//! The [`Interpreter`] owns a [`fira_store::Lexicon`] and the mutable
//! session settings; one call to [`Interpreter::execute_line`] handles one
//! command and returns the lines to print plus a stop signal.

pub mod assemble;
pub mod define;
pub mod interpreter;
pub mod numeral;
pub mod tokenizer;
pub mod translate;

pub use assemble::{CombineMode, DeriveRole};
pub use define::Role;
pub use interpreter::{Interpreter, Response, Settings, DEFAULT_MAX_RECURSION_DEPTH};
pub use tokenizer::tokenize;
pub use translate::{resolve, Direction};
