//! Parse errors

use crate::txt2tex::token::Token;
use thiserror::Error;

/// A syntax error, located at the offending token
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Line {}, column {}: {}", .token.line, .token.column, .message)]
pub struct ParserError {
    pub message: String,
    pub token: Token,
}

impl ParserError {
    pub fn new(message: impl Into<String>, token: &Token) -> Self {
        Self {
            message: message.into(),
            token: token.clone(),
        }
    }

    pub fn line(&self) -> u32 {
        self.token.line
    }

    pub fn column(&self) -> u32 {
        self.token.column
    }
}

pub type ParseResult<T> = Result<T, ParserError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::txt2tex::token::TokenKind;

    #[test]
    fn test_display() {
        let token = Token::new(TokenKind::RBrace, "}", 3, 14);
        let err = ParserError::new("Expected ')' to close '(', found '}'", &token);
        assert_eq!(
            err.to_string(),
            "Line 3, column 14: Expected ')' to close '(', found '}'"
        );
        assert_eq!((err.line(), err.column()), (3, 14));
    }
}
