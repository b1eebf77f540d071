//! Error types for the Bestiary system.
//!
//! Grammar mismatches are never errors; a parser that does not apply
//! simply yields no result. These errors cover the surrounding plumbing:
//! persistence, file access, and the grammar explorer.

use std::fmt;

use thiserror::Error;

/// Convenience result alias used across the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Bestiary operations.
#[derive(Debug, Error)]
#[error("{kind}")]
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

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SerializationError(message.into()))
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::IoError(message.into()))
    }

    /// Creates an unknown command error.
    #[must_use]
    pub fn unknown_command(command: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownCommand(command.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Encoding or decoding a persisted value failed.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// Reading or writing a file failed.
    #[error("i/o error: {0}")]
    IoError(String),

    /// The grammar explorer received a command it does not know.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file or parser name.
    pub source: Option<String>,
    /// Line number in source.
    pub line: Option<usize>,
    /// Input text that was being processed.
    pub input: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line number.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Records the input being processed.
    #[must_use]
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let Some(line) = self.line {
                write!(f, ":{line}")?;
            }
        }
        if let Some(input) = &self.input {
            if self.source.is_some() {
                write!(f, " ")?;
            }
            write!(f, "while reading {input:?}")?;
        }
        Ok(())
    }
}
