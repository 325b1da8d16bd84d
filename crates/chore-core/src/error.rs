//! Error types for the chore library.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for every fallible chore operation.
#[derive(Error, Debug)]
pub enum TodoError {
    /// A field value failed validation
    #[error("Invalid value for field '{field}': {reason}")]
    InvalidField { field: String, reason: String },
    /// A timestamp did not match `YYYY-MM-DDTHH:MM[:SS]`
    #[error("Unparsable date '{input}': expected YYYY-MM-DDTHH:MM")]
    UnparsableDate { input: String },
    /// A persisted line could not be turned back into a record
    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },
    /// The todo file does not exist
    #[error("Todo file not found at '{path}'")]
    SourceNotFound { path: PathBuf },
    /// A 1-based position that does not name a record
    #[error("No todo at position {position} (the list has {len})")]
    PositionOutOfRange { position: usize, len: usize },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
}

/// Builder for field validation errors.
pub struct InvalidFieldBuilder {
    field: String,
}

impl InvalidFieldBuilder {
    /// Create a new invalid field error builder.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> TodoError {
        TodoError::InvalidField {
            field: self.field,
            reason: reason.into(),
        }
    }
}

/// Builder for malformed record errors.
pub struct MalformedRecordBuilder {
    line: usize,
}

impl MalformedRecordBuilder {
    /// Create a new malformed record builder for a 1-based line number.
    pub fn new(line: usize) -> Self {
        Self { line }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> TodoError {
        TodoError::MalformedRecord {
            line: self.line,
            reason: reason.into(),
        }
    }
}

impl TodoError {
    /// Creates a builder for field validation errors.
    pub fn invalid_field(field: impl Into<String>) -> InvalidFieldBuilder {
        InvalidFieldBuilder::new(field)
    }

    /// Creates a builder for malformed record errors.
    pub fn malformed(line: usize) -> MalformedRecordBuilder {
        MalformedRecordBuilder::new(line)
    }

    /// Whether the caller can re-prompt and try again with different input.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            TodoError::InvalidField { .. }
                | TodoError::UnparsableDate { .. }
                | TodoError::PositionOutOfRange { .. }
        )
    }
}

/// Result type alias for chore operations
pub type Result<T> = std::result::Result<T, TodoError>;
