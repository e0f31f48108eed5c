//! Main module for txt2tex library functionality
//!
//! The front end runs in two one-shot passes over fully materialized input:
//!
//!     source text --tokenize--> Vec<Token> --parse--> Ast
//!
//! Both passes are pure functions of their input. They hold no global state, so separate
//! inputs may be processed concurrently on separate threads without coordination.

pub mod ast;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod testing;
pub mod token;

use thiserror::Error;

/// Either failure of the full source-to-tree run
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Lexer(#[from] lexing::LexerError),
    #[error(transparent)]
    Parser(#[from] parsing::ParserError),
}

impl Error {
    /// 1-based line of the offending input
    pub fn line(&self) -> u32 {
        match self {
            Error::Lexer(e) => e.line,
            Error::Parser(e) => e.line(),
        }
    }

    /// 1-based column of the offending input
    pub fn column(&self) -> u32 {
        match self {
            Error::Lexer(e) => e.column,
            Error::Parser(e) => e.column(),
        }
    }
}

/// Tokenize and parse `source` in one call
pub fn parse_source(source: &str) -> Result<ast::Ast, Error> {
    let tokens = lexing::tokenize(source)?;
    Ok(parsing::parse(tokens)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_source_reports_lexer_errors() {
        let err = parse_source("p $ q").unwrap_err();
        assert!(matches!(err, Error::Lexer(_)));
        assert_eq!((err.line(), err.column()), (1, 3));
    }

    #[test]
    fn test_parse_source_reports_parser_errors() {
        let err = parse_source("(p land q").unwrap_err();
        assert!(matches!(err, Error::Parser(_)));
        assert_eq!(err.line(), 1);
    }

    #[test]
    fn test_parse_source_single_item() {
        let ast = parse_source("p land q").unwrap();
        assert!(matches!(ast, ast::Ast::Single(_)));
    }
}
