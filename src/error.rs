//! Error types for the highlighter.

use std::fmt;
use std::io;

/// Result type alias for highlighter operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for highlighter operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error while reading input or writing rendered output.
    Io(io::Error),
    /// The classifier was handed something that is not a grapheme cluster
    /// (e.g. an empty string).
    InvalidInput(String),
    /// User-supplied text that does not name a byte category (1-4).
    InvalidCategory(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidInput(s) => write!(f, "invalid input: {s}"),
            Self::InvalidCategory(s) => {
                write!(f, "invalid byte category: {s} (expected 1, 2, 3 or 4)")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
