//! Syntax tree for txt2tex documents
//!
//! The tree is a closed set of enums and structs, built once by the parser and never
//! mutated afterwards. Children are owned by their parents; there are no back references.
//!
//! Node Groups
//!
//!     Expressions:    [Expr] and its operator enums. See [expressions].
//!     Document:       [Item], the top-level unit, plus sections, solutions, parts and the
//!                     prose blocks. See [document].
//!     Declarations:   Z paragraphs (given types, free types, abbreviations, axdef, schema,
//!                     gendef, zed, syntax). See [declarations].
//!     Proofs:         truth tables, EQUIV/ARGUE chains, proof trees, inference rules. See
//!                     [proofs].
//!
//! Every node carries the [Location] of the token it starts at, except `BinaryOp` which is
//! located at its operator.

pub mod declarations;
pub mod document;
pub mod expressions;
pub mod proofs;

pub use declarations::{
    Abbreviation, AxDef, Declaration, FreeBranch, FreeType, GenDef, GivenType, Schema, Syntax,
    Zed,
};
pub use document::{
    Contents, Document, Item, LatexBlock, PageBreak, Paragraph, Part, PureParagraph, Section,
    Solution,
};
pub use expressions::{ArrowKind, BinaryOperator, Binding, Expr, QuantifierKind, UnaryOperator};
pub use proofs::{
    CaseAnalysis, ChainKind, EquivChain, EquivStep, InfruleBlock, InfruleLine, ProofChild,
    ProofNode, ProofTree, TruthTable,
};

use crate::txt2tex::token::Token;
use serde::Serialize;
use std::fmt;

/// 1-based source position of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

impl Location {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl From<&Token> for Location {
    fn from(token: &Token) -> Self {
        Self::new(token.line, token.column)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Root returned by [parse](crate::txt2tex::parsing::parse)
///
/// A source with exactly one top-level item comes back bare as `Single`. Zero items, or two
/// or more, come back wrapped as `Document`. Downstream generators rely on this shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Ast {
    Single(Item),
    Document(Document),
}

impl Ast {
    /// Collapse a list of parsed items into the root shape
    pub fn from_items(mut items: Vec<Item>) -> Self {
        if items.len() == 1 {
            if let Some(item) = items.pop() {
                return Ast::Single(item);
            }
        }
        Ast::Document(Document { items })
    }

    /// Top-level items regardless of the root shape
    pub fn items(&self) -> &[Item] {
        match self {
            Ast::Single(item) => std::slice::from_ref(item),
            Ast::Document(doc) => &doc.items,
        }
    }

    pub fn into_items(self) -> Vec<Item> {
        match self {
            Ast::Single(item) => vec![item],
            Ast::Document(doc) => doc.items,
        }
    }

    /// The bare expression, when the root is a single expression item
    pub fn as_expr(&self) -> Option<&Expr> {
        match self {
            Ast::Single(Item::Expr(expr)) => Some(expr),
            _ => None,
        }
    }

    pub fn is_document(&self) -> bool {
        matches!(self, Ast::Document(_))
    }
}
