//! Lexical errors

use super::position::SourceLocation;
use thiserror::Error;

/// A lexical error: unknown character or an ambiguity the lexer refuses to guess at
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Line {line}, column {column}: {message}")]
pub struct LexerError {
    pub message: String,
    pub line: u32,
    pub column: u32,
}

impl LexerError {
    pub fn new(message: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            message: message.into(),
            line,
            column,
        }
    }

    /// Build an error located at a byte offset of the source
    pub fn at_offset(message: impl Into<String>, location: &SourceLocation, offset: usize) -> Self {
        let (line, column) = location.position(offset);
        Self::new(message, line, column)
    }
}
