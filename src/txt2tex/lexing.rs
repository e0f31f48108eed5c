//! Lexing pipeline for txt2tex source
//!
//! Source text becomes a flat `Vec<Token>` ending in `Eof`, in two stages:
//!
//!     1. Base tokenization: the logos DFA plus the few things that need to look at raw
//!        lines (raw text capture after TEXT:/PURETEXT:/LATEX:, section and solution
//!        titles, indentation inside PROOF: blocks). See [base_tokenization].
//!     2. Transformations: context-sensitive rewrites over the located token stream, each a
//!        [Transformation](transformations::Transformation). See [transformations].
//!
//! Until the very end every token is a `(TokenKind, Range<usize>)` pair. Only once the
//! stream is final are ranges converted to text and 1-based line/column.

pub mod base_tokenization;
pub mod error;
pub mod position;
pub mod transformations;

pub use error::LexerError;
pub use position::SourceLocation;

use crate::txt2tex::token::{Token, TokenKind};
use std::ops::Range;
use tracing::{debug, trace};

/// Token kinds with their byte range in the source
pub type LocatedTokens = Vec<(TokenKind, Range<usize>)>;

/// Tokenize txt2tex source into a token sequence ending in `Eof`
///
/// Fails on the first unrecognized character or on an ambiguity the lexer refuses to
/// resolve (`>^<`). Never returns a partial stream.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexerError> {
    let location = SourceLocation::new(source);
    let mut stream = base_tokenization::tokenize(&location)?;

    for transformation in transformations::pipeline() {
        stream = transformation.transform(&location, stream)?;
        trace!(
            transformation = transformation.name(),
            tokens = stream.len(),
            "applied lexer transformation"
        );
    }

    let tokens = materialize(&location, stream);
    debug!(
        lines = location.line_count(),
        tokens = tokens.len(),
        "tokenized source"
    );
    Ok(tokens)
}

/// Convert located kinds into token records and append `Eof`
fn materialize(location: &SourceLocation, stream: LocatedTokens) -> Vec<Token> {
    let source = location.source();
    let mut tokens: Vec<Token> = stream
        .into_iter()
        .map(|(kind, range)| {
            let (line, column) = location.position(range.start);
            Token::new(kind, &source[range], line, column)
        })
        .collect();

    let (line, column) = location.position(source.len());
    tokens.push(Token::new(TokenKind::Eof, "", line, column));
    tokens
}
