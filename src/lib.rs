//! # serde_vdf
//!
//! A parser for Valve's VDF/KeyValues text format.
//!
//! ## What is VDF?
//!
//! VDF (Valve Data Format, also known as KeyValues) is the key-value text
//! format used throughout Steam and the Source engine for app manifests,
//! library folders, and game configuration. A document is a single root key
//! followed by a value, where values are quoted or unquoted strings or
//! brace-delimited objects of further key-value pairs:
//!
//! ```text
//! "AppState"
//! {
//!     "appid"    "440"
//!     "name"     "Team Fortress 2"   // line comments are allowed
//!     "UserConfig"
//!     {
//!         "language"  "english"
//!     }
//! }
//! ```
//!
//! ## Key Features
//!
//! - **Single-pass parsing**: one cursor sweep over the input, no
//!   backtracking, no separate tokenizer phase
//! - **Order-preserving**: objects keep their keys in file order via
//!   [`indexmap`], with last-wins semantics for duplicate keys
//! - **Precise errors**: every syntax error carries the line and column at
//!   which parsing stopped
//! - **Serde Compatible**: deserialize parsed documents into Rust types
//!   with `#[derive(Deserialize)]`, or render them as JSON through the
//!   [`serde::Serialize`] impl on [`Value`]
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_vdf::parse;
//!
//! let doc = parse(r#"
//!     "AppState"
//!     {
//!         "appid"  "440"
//!         "name"   "Team Fortress 2"
//!     }
//! "#).unwrap();
//!
//! let state = doc.get("AppState").unwrap();
//! assert_eq!(state.get("appid").and_then(|v| v.as_str()), Some("440"));
//! ```
//!
//! ### Typed Deserialization
//!
//! ```rust
//! use serde::Deserialize;
//! use serde_vdf::from_str;
//!
//! #[derive(Deserialize)]
//! struct Manifest {
//!     #[serde(rename = "AppState")]
//!     app_state: AppState,
//! }
//!
//! #[derive(Deserialize)]
//! struct AppState {
//!     appid: u32,
//!     name: String,
//! }
//!
//! let manifest: Manifest = from_str(r#"
//!     "AppState" { "appid" "440" "name" "Team Fortress 2" }
//! "#).unwrap();
//! assert_eq!(manifest.app_state.appid, 440);
//! ```
//!
//! ## Format Notes
//!
//! - Quoted strings are verbatim: there are **no escape sequences**, so a
//!   backslash is a literal character and a quoted string simply cannot
//!   contain `"`.
//! - `//` starts a comment running to the end of the line.
//! - An input of nothing but whitespace and comments parses to an empty
//!   document rather than an error.
//! - Text after the root value is ignored.
//!
//! There is deliberately no serializer: this crate reads VDF, it does not
//! write it. For display, serialize the parsed tree with `serde_json` (the
//! bundled `vdf2json` binary does exactly that).

pub mod de;
pub mod error;
pub mod map;
pub mod parser;
pub mod value;

pub use de::{from_str, from_value};
pub use error::{Error, Result};
pub use map::VdfMap;
pub use parser::Parser;
pub use value::Value;

use std::io;
use std::path::Path;

/// Parse a complete VDF text buffer into a document.
///
/// The returned map holds at most one entry: the root key mapped to the
/// root value. Blank input (only whitespace and comments) yields an empty
/// map.
///
/// # Examples
///
/// ```rust
/// use serde_vdf::parse;
///
/// let doc = parse(r#"root { "k" "v" }"#).unwrap();
/// assert_eq!(doc.len(), 1);
///
/// let empty = parse("// nothing here\n").unwrap();
/// assert!(empty.is_empty());
/// ```
///
/// # Errors
///
/// Returns a syntax error for malformed input: an unterminated quoted
/// string, input that ends while a value or `}` was still expected, or an
/// object in key position.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse(text: &str) -> Result<VdfMap> {
    Parser::new(text).parse_document()
}

/// Read a file as UTF-8 text and parse it as VDF.
///
/// # Errors
///
/// File access failures surface as [`Error::Io`], a distinct category from
/// the syntax errors [`parse`] produces.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<VdfMap> {
    let text = std::fs::read_to_string(path).map_err(|e| Error::io(&e.to_string()))?;
    parse(&text)
}

/// Read VDF text from an I/O stream and parse it.
///
/// # Examples
///
/// ```rust
/// use serde_vdf::parse_reader;
/// use std::io::Cursor;
///
/// let doc = parse_reader(Cursor::new(b"root { k v }")).unwrap();
/// assert!(doc.get("root").is_some());
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails or the bytes are not valid UTF-8,
/// and a syntax error if the text is malformed.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_reader<R: io::Read>(mut reader: R) -> Result<VdfMap> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| Error::io(&e.to_string()))?;
    parse(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip_shape() {
        let doc = parse(r#""root" {"a" "1" "b" "2"}"#).unwrap();
        let root = doc.get("root").and_then(|v| v.as_object()).unwrap();
        assert_eq!(root.len(), 2);
        assert_eq!(root.get("a").and_then(|v| v.as_str()), Some("1"));
        assert_eq!(root.get("b").and_then(|v| v.as_str()), Some("2"));
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("   \t\n  ").unwrap().is_empty());
        assert!(parse("// only a comment").unwrap().is_empty());
    }

    #[test]
    fn test_parse_file_missing_is_io_error() {
        let err = parse_file("/definitely/not/a/real/path.vdf").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_parse_reader() {
        let doc = parse_reader(std::io::Cursor::new(b"root { k v }")).unwrap();
        assert_eq!(
            doc.get("root").and_then(|v| v.get("k")).and_then(|v| v.as_str()),
            Some("v")
        );
    }

    #[test]
    fn test_sequential_parses_share_nothing() {
        let first = parse(r#"a { "x" "1" }"#).unwrap();
        let second = parse(r#"b { "y" "2" }"#).unwrap();
        assert!(first.contains_key("a"));
        assert!(!second.contains_key("a"));
        assert!(second.contains_key("b"));
    }
}
