//! # txt2tex
//!
//! Lexer, parser and syntax tree for the txt2tex notation: a plain-text way of writing
//! propositional and predicate logic, set theory, relations, functions, sequences,
//! Z paragraphs, proof trees and prose with embedded formulas.
//!
//! The LaTeX generator that consumes the tree lives outside this crate. What this crate
//! guarantees is the tree itself: every construct of the notation has a node, every node
//! carries its source position, and malformed input is reported with an exact line and
//! column.
//!
//! File Layout
//!
//!     src/txt2tex
//!       ├── token       Token kinds (the logos DFA), token records, operator symbols
//!       ├── lexing      Base tokenization and the context-sensitive transformations
//!       ├── ast         Node types
//!       ├── parsing     Recursive-descent parser and its block sub-parsers
//!       ├── formats     Tree serializers used for inspection and snapshots
//!       └── testing     Fluent assertions over the tree
//!
//! For comprehensive testing guidelines, see the [testing module](crate::txt2tex::testing).

#![allow(rustdoc::invalid_html_tags)]

pub mod txt2tex;

pub use txt2tex::ast::{Ast, Document, Expr, Item, Location};
pub use txt2tex::lexing::{tokenize, LexerError};
pub use txt2tex::parsing::{parse, ParserError};
pub use txt2tex::token::{Token, TokenKind};
pub use txt2tex::{parse_source, Error};
