//! Foundation layer for the Fira interpreter.
//!
//! Provides the error taxonomy shared by every other crate in the
//! workspace, plus the common [`Result`] alias.

pub mod error;

pub use error::{Error, ErrorContext, ErrorKind};

/// The common result type for Fira operations.
pub type Result<T> = std::result::Result<T, Error>;
