//! Testing utilities for AST assertions
//!
//! Tests of the parser should check the shape and content of the whole tree, not just node
//! counts. Matching on nested enums by hand gets long quickly:
//!
//! ```rust-example
//! match &ast {
//!     Ast::Single(Item::Section(s)) => {
//!         assert_eq!(s.title, "Introduction");
//!         match &s.items[0] {
//!             Item::Expr(Expr::BinaryOp { op, left, .. }) => { ... }
//!             _ => panic!("Expected BinaryOp"),
//!         }
//!     }
//!     _ => panic!("Expected Section"),
//! }
//! ```
//!
//! With the fluent API the same test reads:
//!
//! ```rust-example
//! use txt2tex::txt2tex::testing::assert_ast;
//!
//! assert_ast(&ast)
//!     .single()
//!     .item(0, |item| {
//!         item.assert_section()
//!             .title("Introduction")
//!             .item(0, |item| {
//!                 item.assert_expr()
//!                     .binary(BinaryOperator::And)
//!                     .left(|left| left.identifier("p"))
//!             });
//!     });
//! ```
//!
//! Every assertion carries a context path (`items[0].items[2].left`) that is printed when
//! it fails.

mod assertions;
mod matchers;

pub use assertions::{
    assert_ast, assert_expr, AstAssertion, ContainerAssertion, ExprAssertion, FreeTypeAssertion,
    ItemAssertion, ProofAssertion, ProofNodeAssertion, TruthTableAssertion,
};
pub use matchers::TextMatch;
