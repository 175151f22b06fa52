//! Error types for the Fira interpreter.
//!
//! Uses `thiserror` for ergonomic error definition. Every failure the
//! interpreter can surface to a user is an [`Error`] wrapping an
//! [`ErrorKind`]; the file includer attaches an [`ErrorContext`] so errors
//! raised inside a script report the file and line they came from.

use std::fmt;

use thiserror::Error;

/// The main error type for Fira operations.
#[derive(Debug, Error)]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a syntax error from a message.
    #[must_use]
    pub fn syntax(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Syntax {
            message: message.into(),
        })
    }

    /// Creates a recursion limit error.
    #[must_use]
    pub fn recursion_limit(limit: usize) -> Self {
        Self::new(ErrorKind::RecursionLimit { limit })
    }

    /// Creates an I/O error with a description of the failed operation.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization(message.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }

    /// Returns `true` if this is a syntax error.
    #[must_use]
    pub const fn is_syntax(&self) -> bool {
        matches!(self.kind, ErrorKind::Syntax { .. })
    }

    /// Returns `true` if this is a recursion limit error.
    #[must_use]
    pub const fn is_recursion_limit(&self) -> bool {
        matches!(self.kind, ErrorKind::RecursionLimit { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(context) = &self.context {
            write!(f, " ({context})")?;
        }
        Ok(())
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Malformed command: wrong argument count, missing required literal,
    /// unknown modifier or subcommand, unresolvable translation, or an
    /// unparsable integer.
    #[error("{message}")]
    Syntax {
        /// Human-readable description built from the offending tokens.
        message: String,
    },

    /// File-inclusion depth exceeded the configured ceiling.
    #[error("max recursion depth ({limit}) reached")]
    RecursionLimit {
        /// The configured ceiling.
        limit: usize,
    },

    /// Underlying I/O failure (file read, snapshot write).
    #[error("io error: {0}")]
    Io(String),

    /// Snapshot encode/decode failure.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file the failing line came from.
    pub source: Option<String>,
    /// Line number in the source (1-based).
    pub line: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source name.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line number (1-based).
    #[must_use]
    pub const fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.source, self.line) {
            (Some(source), Some(line)) => write!(f, "in {source} at line {line}"),
            (Some(source), None) => write!(f, "in {source}"),
            (None, Some(line)) => write!(f, "at line {line}"),
            (None, None) => Ok(()),
        }
    }
}
