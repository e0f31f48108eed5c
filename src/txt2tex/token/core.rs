//! Token records
//!
//! A `Token` is what the parser sees: a kind, the literal source text it was produced from,
//! and a 1-based line/column. Synthetic tokens (`Indent`, `Eof`) carry the text they stand
//! for (possibly empty) and the position where they were inserted.

use super::kind::TokenKind;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: u32,
    pub column: u32,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            column,
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Width of the token text in characters
    pub fn width(&self) -> u32 {
        self.text.chars().count() as u32
    }

    /// Column just past the last character of the token (same line only)
    pub fn end_column(&self) -> u32 {
        self.column + self.width()
    }

    /// True when `next` starts exactly where this token ends, with no whitespace between
    pub fn is_adjacent_to(&self, next: &Token) -> bool {
        self.line == next.line && self.end_column() == next.column
    }

    /// Human description used in error messages
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Eof => "end of input".to_string(),
            TokenKind::Newline => "end of line".to_string(),
            TokenKind::Indent => "indentation".to_string(),
            _ => format!("'{}'", self.text),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({:?}) at {}:{}",
            self.kind, self.text, self.line, self.column
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacency() {
        let f = Token::new(TokenKind::Identifier, "f", 1, 1);
        let paren = Token::new(TokenKind::LParen, "(", 1, 2);
        let spaced = Token::new(TokenKind::LParen, "(", 1, 3);
        assert!(f.is_adjacent_to(&paren));
        assert!(!f.is_adjacent_to(&spaced));
    }

    #[test]
    fn test_width_counts_chars_not_bytes() {
        let arrow = Token::new(TokenKind::TotalFn, "→", 2, 4);
        assert_eq!(arrow.width(), 1);
        assert_eq!(arrow.end_column(), 5);
    }

    #[test]
    fn test_describe() {
        assert_eq!(Token::new(TokenKind::Eof, "", 1, 1).describe(), "end of input");
        assert_eq!(Token::new(TokenKind::Newline, "\n", 1, 1).describe(), "end of line");
        assert_eq!(Token::new(TokenKind::RParen, ")", 1, 1).describe(), "')'");
    }

    #[test]
    fn test_display() {
        let token = Token::new(TokenKind::Identifier, "x", 3, 7);
        assert_eq!(token.to_string(), "IDENTIFIER(\"x\") at 3:7");
    }
}
