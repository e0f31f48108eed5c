//! Core token types shared across the lexer, parser, and tooling.
//!
//! Token Layers
//!
//!     Kinds:
//!         `TokenKind` is the closed set of token kinds. It doubles as the logos lexer: the
//!         `#[token]`/`#[regex]` attributes on its variants are the single operator table of
//!         the crate, and logos compiles them into one DFA that always takes the longest
//!         match. See [kind](kind).
//!
//!     Records:
//!         `Token` pairs a kind with its literal text and 1-based line/column. Tokens are
//!         produced once by the lexer and only read afterwards. See [core](core).
//!
//!     Synthetic kinds:
//!         Some kinds never come out of the DFA directly. They are produced by the lexing
//!         transformations from context: `Cat`/`Caret` from whitespace around `^`, `LAngle`
//!         and `RAngle` from ASCII `<`/`>`, `PartLabel`, `Indent` (proof blocks only), raw
//!         `Text` captured after TEXT:/PURETEXT:/LATEX: and in titles, and `Eof`.
//!
//!     Symbols:
//!         Every operator kind has a display symbol. Justification text inside EQUIV and
//!         PROOF brackets is re-lexed through the same DFA and operators are replaced by
//!         their symbols, so prose and expressions agree on longest match. See
//!         [symbols](symbols).

pub mod core;
pub mod kind;
pub mod symbols;

pub use self::core::Token;
pub use kind::TokenKind;
pub use symbols::substitute_operators;
