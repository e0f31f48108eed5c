//! Property-based tests for the txt2tex lexer
//!
//! These tests check the whitespace rule that separates concatenation from exponents, and
//! that the lexer is total and deterministic over arbitrary operator soup.

use proptest::prelude::*;
use txt2tex::{tokenize, TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source)
        .unwrap()
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

/// Names that can never collide with a keyword
fn name_strategy() -> impl Strategy<Value = String> {
    "[xyz][0-9]{0,3}"
}

fn operand_strategy() -> impl Strategy<Value = String> {
    prop_oneof![name_strategy(), "[1-9][0-9]{0,2}"]
}

fn blank_strategy() -> impl Strategy<Value = String> {
    "[ \t]{1,3}"
}

/// Fragments that exercise every context-sensitive decision in the lexer
fn fragment_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "<", ">", "^", "|", "-", "+", "*", "~", "=", "==", "(", ")", "[", "]", "[[", "]]",
        "{", "}", ",", ".", ":", ";", "x", "R", "7", "a", "⟨", "⟩", "∧", "⌢", " ", "\t", "\n",
        "\n\n", "TEXT:", "PROOF:", "===", "**", "(a)", "land", "forall",
    ])
}

proptest! {
    #[test]
    fn glued_caret_is_exponent(base in name_strategy(), exponent in operand_strategy()) {
        let source = format!("{}^{}", base, exponent);
        prop_assert_eq!(kinds(&source)[1], TokenKind::Caret);
    }

    #[test]
    fn spaced_caret_is_concatenation(
        left in name_strategy(),
        right in name_strategy(),
        before in blank_strategy(),
        after in prop_oneof![Just(String::new()), blank_strategy()],
    ) {
        let source = format!("{}{}^{}{}", left, before, after, right);
        prop_assert_eq!(kinds(&source)[1], TokenKind::Cat);
    }

    #[test]
    fn tokenize_is_deterministic(fragments in prop::collection::vec(fragment_strategy(), 0..40)) {
        let source = fragments.concat();
        prop_assert_eq!(tokenize(&source), tokenize(&source));
    }

    #[test]
    fn tokenize_never_panics(fragments in prop::collection::vec(fragment_strategy(), 0..40)) {
        let source = fragments.concat();
        if let Ok(tokens) = tokenize(&source) {
            prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
            for token in &tokens {
                prop_assert!(token.line >= 1 && token.column >= 1);
            }
        }
    }

    #[test]
    fn positions_never_decrease(fragments in prop::collection::vec(fragment_strategy(), 0..40)) {
        let source = fragments.concat();
        if let Ok(tokens) = tokenize(&source) {
            for pair in tokens.windows(2) {
                prop_assert!(
                    (pair[0].line, pair[0].column) <= (pair[1].line, pair[1].column),
                    "{:?} before {:?}", pair[0], pair[1]
                );
            }
        }
    }
}
