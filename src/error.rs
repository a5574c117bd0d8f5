//! Error types for URL decomposition.

use std::fmt;

/// Errors that can occur when decomposing a raw URL string into a
/// [`UrlData`](crate::UrlData) value.
///
/// Matching itself never produces errors: a matcher that does not apply
/// simply yields no result. `ParseError` exists only at the boundary where
/// raw text enters the system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to decompose
    pub input: String,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
}

/// Specific decomposition error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Input is empty
    Empty,
    /// Input contains a character a URL cannot carry unencoded
    InvalidChar {
        /// The offending character
        char: char,
        /// Position in the input
        position: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to decompose URL '{}': ", self.input)?;
        match &self.kind {
            ParseErrorKind::Empty => write!(f, "input is empty"),
            ParseErrorKind::InvalidChar { char, position } => {
                write!(f, "invalid character '{char}' at position {position}")
            }
        }
    }
}

impl std::error::Error for ParseError {}
