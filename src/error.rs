//! Error types for VDF parsing and deserialization.
//!
//! ## Error Categories
//!
//! - **Syntax Errors**: Invalid VDF syntax with line/column information
//!   (unterminated strings, unexpected end of input, missing structural
//!   characters)
//! - **Semantic Errors**: Well-formed syntax the data model rejects (an
//!   object used as a mapping key, nesting beyond the depth limit)
//! - **I/O Errors**: File reading failures, kept distinct from syntax errors
//!   so callers can tell a missing file from a malformed one
//!
//! All parsing errors carry the line and column at which the parser stopped.
//!
//! ## Examples
//!
//! ```rust
//! use serde_vdf::{parse, Error};
//!
//! let result = parse("\"unterminated");
//! assert!(matches!(result, Err(Error::UnterminatedString { .. })));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while parsing VDF input
/// or deserializing it into Rust types.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error while reading input
    #[error("IO error: {0}")]
    Io(String),

    /// A quoted string was never closed before end of input
    #[error("unterminated quoted string, still open at line {line}, column {col}")]
    UnterminatedString { line: usize, col: usize },

    /// Input ended while a value or a closing brace was still expected
    #[error("unexpected end of input at line {line}, column {col}: expected {expected}")]
    UnexpectedEof {
        line: usize,
        col: usize,
        expected: String,
    },

    /// A structural character (`{` or `"`) was required but not found
    #[error("expected `{expected}` at line {line}, column {col}")]
    Expected {
        line: usize,
        col: usize,
        expected: char,
    },

    /// An unquoted token scanned to zero length, i.e. the cursor sat on a
    /// delimiter where a value was required
    #[error("expected a value at line {line}, column {col}, found a delimiter")]
    EmptyToken { line: usize, col: usize },

    /// An object appeared in key position; mapping keys must be strings
    #[error("object used as a mapping key at line {line}, column {col}")]
    ObjectKey { line: usize, col: usize },

    /// Objects nested deeper than the parser's depth limit
    #[error("nesting deeper than {limit} levels at line {line}, column {col}")]
    DepthLimit {
        line: usize,
        col: usize,
        limit: usize,
    },

    /// A deserialization target the VDF data model cannot satisfy
    #[error("unsupported type: {0}")]
    Unsupported(String),

    /// Custom error raised through the serde error trait
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates an unexpected end-of-input error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_vdf::Error;
    ///
    /// let err = Error::unexpected_eof(3, 1, "`}`");
    /// assert!(err.to_string().contains("line 3"));
    /// ```
    pub fn unexpected_eof(line: usize, col: usize, expected: &str) -> Self {
        Error::UnexpectedEof {
            line,
            col,
            expected: expected.to_string(),
        }
    }

    /// Creates an expected-character error for a missing `{` or `"`.
    pub fn expected(line: usize, col: usize, expected: char) -> Self {
        Error::Expected {
            line,
            col,
            expected,
        }
    }

    /// Creates an unsupported-type error for deserialization targets the
    /// string/object data model cannot produce.
    pub fn unsupported(msg: &str) -> Self {
        Error::Unsupported(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_vdf::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for file reading failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
