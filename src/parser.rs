//! The VDF recursive-descent parser.
//!
//! ## Overview
//!
//! The parser makes a single pass over the input with no backtracking.
//! Tokenization is not a separate phase: the scanning cursor is shared by
//! every parse operation, and each operation consumes exactly the characters
//! it needs.
//!
//! The grammar, informally:
//!
//! ```text
//! document := noise? (key value)? trailing_ignored
//! value    := object | quoted_string | unquoted_token
//! object   := '{' noise? (key noise? value noise?)* '}'
//! noise    := (whitespace | "//" line comment)*
//! ```
//!
//! Quoted strings are taken verbatim: VDF has no escape sequences, so a
//! backslash is just a backslash and the only character a quoted string
//! cannot contain is `"` itself.
//!
//! ## Usage
//!
//! Most users should use [`crate::parse`] or [`crate::parse_file`]:
//!
//! ```rust
//! use serde_vdf::parse;
//!
//! let doc = parse(r#"
//!     "root"
//!     {
//!         "a" "1"  // trailing comment
//!         "b" "2"
//!     }
//! "#).unwrap();
//! assert_eq!(doc.len(), 1);
//! ```

use crate::{Error, Result, Value, VdfMap};

/// Objects nested deeper than this fail with [`Error::DepthLimit`] instead
/// of risking call-stack exhaustion on hostile input.
pub const MAX_DEPTH: usize = 128;

/// The VDF parser.
///
/// Holds the scanning cursor over a borrowed input buffer. A `Parser` is
/// built fresh for each document and consumed by [`Parser::parse_document`],
/// so no cursor state can leak between parse calls.
pub struct Parser<'de> {
    input: &'de str,
    position: usize,
    line: usize,
    column: usize,
    depth: usize,
}

impl<'de> Parser<'de> {
    pub fn new(input: &'de str) -> Self {
        Parser {
            input,
            position: 0,
            line: 1,
            column: 1,
            depth: 0,
        }
    }

    /// Parses the whole document: at most one root key/value pair.
    ///
    /// Input that is only whitespace and comments yields an empty map, not
    /// an error. Any text after the root value is silently ignored.
    pub fn parse_document(mut self) -> Result<VdfMap> {
        let mut result = VdfMap::new();

        self.skip_noise();
        if self.at_end() {
            return Ok(result);
        }

        let root_key = self.parse_key()?;
        self.skip_noise();
        let root_value = self.parse_value()?;
        result.insert(root_key, root_value);

        Ok(result)
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        if let Some(ch) = self.input[self.position..].chars().next() {
            self.position += ch.len_utf8();
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            Some(ch)
        } else {
            None
        }
    }

    fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Skips whitespace and `//` line comments, alternating until neither
    /// applies. A comment runs to the next newline (the newline itself is
    /// consumed as whitespace on the following round) or to end of input.
    /// Idempotent: calling this twice from the same position is a no-op the
    /// second time.
    fn skip_noise(&mut self) {
        loop {
            let before = self.position;

            while let Some(ch) = self.peek_char() {
                if ch.is_whitespace() {
                    self.next_char();
                } else {
                    break;
                }
            }

            if self.input[self.position..].starts_with("//") {
                while let Some(ch) = self.peek_char() {
                    if ch == '\n' {
                        break;
                    }
                    self.next_char();
                }
            }

            if self.position == before {
                break;
            }
        }
    }

    /// Scans a quoted string. The cursor must sit on the opening `"`.
    ///
    /// Content is taken verbatim with no escape processing. Fails with
    /// [`Error::UnterminatedString`] if the closing quote never comes.
    fn parse_quoted(&mut self) -> Result<String> {
        if self.peek_char() != Some('"') {
            return Err(Error::expected(self.line, self.column, '"'));
        }
        self.next_char(); // consume opening quote

        let start = self.position;
        while let Some(ch) = self.peek_char() {
            if ch == '"' {
                let text = self.input[start..self.position].to_string();
                self.next_char(); // consume closing quote
                return Ok(text);
            }
            self.next_char();
        }

        Err(Error::UnterminatedString {
            line: self.line,
            col: self.column,
        })
    }

    /// Scans an unquoted token: everything up to the next whitespace, `{`,
    /// `}`, or `"`.
    ///
    /// A zero-length token means the cursor sat on a delimiter where a value
    /// was required; that is a hard error here rather than an empty string,
    /// which would never advance the cursor and spin the object loop
    /// forever.
    fn parse_token(&mut self) -> Result<String> {
        let start = self.position;
        while let Some(ch) = self.peek_char() {
            if ch.is_whitespace() || ch == '{' || ch == '}' || ch == '"' {
                break;
            }
            self.next_char();
        }

        if self.position == start {
            return Err(Error::EmptyToken {
                line: self.line,
                col: self.column,
            });
        }
        Ok(self.input[start..self.position].to_string())
    }

    /// Parses a value: an object, a quoted string, or an unquoted token.
    fn parse_value(&mut self) -> Result<Value> {
        self.skip_noise();

        match self.peek_char() {
            None => Err(Error::unexpected_eof(self.line, self.column, "a value")),
            Some('{') => Ok(Value::Object(self.parse_object()?)),
            Some('"') => Ok(Value::String(self.parse_quoted()?)),
            Some(_) => Ok(Value::String(self.parse_token()?)),
        }
    }

    /// Parses a mapping key. Keys are strings; the grammar would admit an
    /// object here, but that gets a distinct [`Error::ObjectKey`] instead of
    /// a non-string map key.
    fn parse_key(&mut self) -> Result<String> {
        let (line, col) = (self.line, self.column);
        match self.parse_value()? {
            Value::String(s) => Ok(s),
            Value::Object(_) => Err(Error::ObjectKey { line, col }),
        }
    }

    /// Parses an object. The cursor must sit on the opening `{`.
    ///
    /// Entries are key/value pairs separated only by noise; the map keeps
    /// first-insertion order and a repeated key overwrites its earlier value
    /// in place.
    fn parse_object(&mut self) -> Result<VdfMap> {
        if self.peek_char() != Some('{') {
            return Err(Error::expected(self.line, self.column, '{'));
        }
        if self.depth >= MAX_DEPTH {
            return Err(Error::DepthLimit {
                line: self.line,
                col: self.column,
                limit: MAX_DEPTH,
            });
        }
        self.depth += 1;
        self.next_char(); // consume '{'

        let mut result = VdfMap::new();
        loop {
            self.skip_noise();

            match self.peek_char() {
                None => {
                    return Err(Error::unexpected_eof(self.line, self.column, "`}`"));
                }
                Some('}') => {
                    self.next_char();
                    break;
                }
                Some(_) => {
                    let key = self.parse_key()?;
                    self.skip_noise();
                    let value = self.parse_value()?;
                    result.insert(key, value);
                }
            }
        }

        self.depth -= 1;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_noise_is_idempotent() {
        let mut parser = Parser::new("  // comment\n  // another\n  token");
        parser.skip_noise();
        let after_first = parser.position;
        parser.skip_noise();
        assert_eq!(parser.position, after_first);
        assert_eq!(parser.peek_char(), Some('t'));
    }

    #[test]
    fn test_skip_noise_comment_at_eof() {
        let mut parser = Parser::new("// no trailing newline");
        parser.skip_noise();
        assert!(parser.at_end());
    }

    #[test]
    fn test_token_stops_at_delimiters() {
        for (input, expected) in [
            ("foo{", "foo"),
            ("foo}", "foo"),
            ("foo\"bar\"", "foo"),
            ("foo bar", "foo"),
            ("foo\tbar", "foo"),
        ] {
            let mut parser = Parser::new(input);
            assert_eq!(parser.parse_token().unwrap(), expected);
        }
    }

    #[test]
    fn test_empty_token_is_an_error() {
        let mut parser = Parser::new("}");
        assert!(matches!(
            parser.parse_token(),
            Err(Error::EmptyToken { .. })
        ));
        // The cursor did not move, so the caller cannot loop on it.
        assert_eq!(parser.position, 0);
    }

    #[test]
    fn test_quoted_requires_opening_quote() {
        let mut parser = Parser::new("plain");
        assert!(matches!(
            parser.parse_quoted(),
            Err(Error::Expected { expected: '"', .. })
        ));
    }

    #[test]
    fn test_quoted_takes_content_verbatim() {
        let mut parser = Parser::new(r#""a b { } // not a comment \n""#);
        let text = parser.parse_quoted().unwrap();
        assert_eq!(text, r"a b { } // not a comment \n");
        assert!(parser.at_end());
    }

    #[test]
    fn test_unterminated_quote() {
        let mut parser = Parser::new("\"never closed");
        assert!(matches!(
            parser.parse_quoted(),
            Err(Error::UnterminatedString { .. })
        ));
    }

    #[test]
    fn test_value_at_eof() {
        let mut parser = Parser::new("   // just noise");
        assert!(matches!(
            parser.parse_value(),
            Err(Error::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn test_object_key_rejected() {
        let parser = Parser::new(r#"root { { "k" "v" } "x" }"#);
        assert!(matches!(
            parser.parse_document(),
            Err(Error::ObjectKey { .. })
        ));
    }

    #[test]
    fn test_depth_limit() {
        let mut input = String::from("root ");
        for _ in 0..(MAX_DEPTH + 1) {
            input.push_str("{ k ");
        }
        let parser = Parser::new(&input);
        assert!(matches!(
            parser.parse_document(),
            Err(Error::DepthLimit { .. })
        ));
    }

    #[test]
    fn test_deep_but_legal_nesting() {
        let mut input = String::from("root ");
        for _ in 0..(MAX_DEPTH - 1) {
            input.push_str("{ k ");
        }
        input.push_str("v ");
        for _ in 0..(MAX_DEPTH - 1) {
            input.push('}');
        }
        assert!(Parser::new(&input).parse_document().is_ok());
    }

    #[test]
    fn test_error_location_line_and_column() {
        let parser = Parser::new("root\n{\n  \"k\" \"1\"\n");
        match parser.parse_document() {
            Err(Error::UnexpectedEof { line, col, .. }) => {
                assert_eq!(line, 4);
                assert_eq!(col, 1);
            }
            other => panic!("expected UnexpectedEof, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_crlf_counts_as_whitespace() {
        let doc = Parser::new("root\r\n{\r\n\t\"k\" \"v\"\r\n}\r\n")
            .parse_document()
            .unwrap();
        assert_eq!(
            doc.get("root").and_then(|v| v.get("k")).and_then(|v| v.as_str()),
            Some("v")
        );
    }

    #[test]
    fn test_multibyte_input() {
        let doc = Parser::new("\"wurzel\" { \"schlüssel\" \"wert mit äöü\" }")
            .parse_document()
            .unwrap();
        let root = doc.get("wurzel").unwrap();
        assert_eq!(root.get("schlüssel").and_then(|v| v.as_str()), Some("wert mit äöü"));
    }
}
