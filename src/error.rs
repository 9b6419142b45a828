//! Error types for docscope.

use std::io;
use thiserror::Error;

/// Result type alias for docscope operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while querying a document.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed caller input (bad level, empty name, inverted range).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A named or keyed lookup produced no match.
    #[error("{target} not found: {criteria}")]
    NotFound {
        /// What was being looked up (e.g. "Bookmark")
        target: &'static str,
        /// The search criteria, echoed back for diagnosis
        criteria: String,
    },

    /// A numeric index is outside a known bound.
    #[error("{target} index {index} is out of range (document has {bound})")]
    OutOfRange {
        /// What was being indexed (e.g. "Paragraph")
        target: &'static str,
        /// The requested index
        index: usize,
        /// Number of available items
        bound: usize,
    },

    /// A call into the host document failed.
    #[error("Host error: {0}")]
    Host(String),

    /// A document snapshot is malformed or inconsistent.
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// Error during serialization (Markdown, text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// I/O error when reading a document snapshot.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Shorthand for a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }

    /// Check if this is a lookup miss.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// Check if this is an index bound violation.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Error::OutOfRange { .. })
    }

    /// Check if this is a validation failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}
