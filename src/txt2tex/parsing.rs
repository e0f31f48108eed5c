//! Recursive-descent parser for txt2tex token streams
//!
//! The parser is one [Parser] struct owning the token vector and a cursor into it. Its
//! methods are split by construct across the child modules, each an `impl Parser` block:
//!
//!     cursor          peek/advance/expect, line handling, grouping depth
//!     document        items, sections, solutions, parts, prose blocks
//!     expressions     precedence climbing, prefix/postfix operators, primaries
//!     bindings        quantifier, lambda and set comprehension bindings
//!     declarations    given, free types, abbreviations, axdef/schema/gendef, zed, syntax
//!     proofs          truth tables, EQUIV/ARGUE, PROOF trees, INFRULE
//!     justification   bracketed justification and label text
//!
//! Newlines are significant at the top level (one item or declaration per line) and ignored
//! inside any bracket pair, so long expressions can be wrapped inside parentheses. A `\` at
//! the end of a line joins it with the next one anywhere.
//!
//! The first error aborts the parse. There is no recovery and no partial tree.

pub mod bindings;
pub mod cursor;
pub mod declarations;
pub mod document;
pub mod error;
pub mod expressions;
pub mod justification;
pub mod proofs;

pub use error::{ParseResult, ParserError};

use crate::txt2tex::ast::Ast;
use crate::txt2tex::token::{Token, TokenKind};
use document::Boundary;
use tracing::debug;

/// Parse a token sequence into a syntax tree
///
/// Returns [Ast::Single] when the input holds exactly one top-level item and
/// [Ast::Document] otherwise (including for empty input).
pub fn parse(tokens: Vec<Token>) -> Result<Ast, ParserError> {
    let mut parser = Parser::new(tokens);
    let items = parser.parse_items(Boundary::Document)?;
    debug!(items = items.len(), "parsed document");
    Ok(Ast::from_items(items))
}

/// Parser state: the tokens, a cursor, and the stack of open groups
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    /// Index of the most recently consumed token
    last: usize,
    /// Open brackets, innermost last. `Semicolon` marks a binding list, where `;`
    /// separates groups instead of composing relations.
    groups: Vec<TokenKind>,
}

impl Parser {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|t| t.kind) != Some(TokenKind::Eof) {
            let (line, column) = tokens
                .last()
                .map(|t| (t.line, t.end_column()))
                .unwrap_or((1, 1));
            tokens.push(Token::new(TokenKind::Eof, "", line, column));
        }
        Self {
            tokens,
            pos: 0,
            last: 0,
            groups: Vec::new(),
        }
    }
}
