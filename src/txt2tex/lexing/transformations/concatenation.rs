//! Concatenation transformation
//!
//! `^` means two different things: `s ^ t` concatenates sequences, `x^2` is an exponent.
//! The only thing that tells them apart is whitespace: a `^` with whitespace (or the start
//! of input) right before it is CAT, a `^` glued to what precedes it is CARET. `⌢` is always
//! CAT and never reaches this transformation as a CARET.
//!
//! `<a>^<b>` has no whitespace on either side and sits between sequence brackets, where
//! both readings are plausible. That input is rejected instead of guessed.

use crate::txt2tex::lexing::error::LexerError;
use crate::txt2tex::lexing::position::SourceLocation;
use crate::txt2tex::lexing::transformations::Transformation;
use crate::txt2tex::lexing::LocatedTokens;
use crate::txt2tex::token::TokenKind;

pub struct Concatenation;

impl Transformation for Concatenation {
    fn name(&self) -> &str {
        "concatenation"
    }

    fn description(&self) -> &str {
        "Classify ^ as CAT (whitespace before) or CARET (glued), rejecting >^<"
    }

    fn transform(
        &self,
        location: &SourceLocation,
        tokens: LocatedTokens,
    ) -> Result<LocatedTokens, LexerError> {
        let source = location.source();
        tokens
            .into_iter()
            .map(|(kind, range)| {
                if kind != TokenKind::Caret {
                    return Ok((kind, range));
                }
                let before = source[..range.start].chars().next_back();
                let after = source[range.end..].chars().next();
                if matches!(before, Some('>') | Some('⟩')) && matches!(after, Some('<') | Some('⟨'))
                {
                    return Err(LexerError::at_offset(
                        "Ambiguous '^' between sequence brackets: write ' ^ ' for concatenation",
                        location,
                        range.start,
                    ));
                }
                let kind = match before {
                    None => TokenKind::Cat,
                    Some(c) if c.is_whitespace() => TokenKind::Cat,
                    Some(_) => TokenKind::Caret,
                };
                Ok((kind, range))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::txt2tex::lexing::transformations::test_support::{kinds, run};

    #[test]
    fn test_glued_caret_is_exponent() {
        assert_eq!(
            kinds(&Concatenation, "x^2"),
            vec![TokenKind::Identifier, TokenKind::Caret, TokenKind::Number]
        );
    }

    #[test]
    fn test_spaced_caret_is_concatenation() {
        assert_eq!(kinds(&Concatenation, "s ^ t")[1], TokenKind::Cat);
        assert_eq!(kinds(&Concatenation, "s\t^t")[1], TokenKind::Cat);
    }

    #[test]
    fn test_caret_at_start_of_input() {
        assert_eq!(kinds(&Concatenation, "^ t")[0], TokenKind::Cat);
    }

    #[test]
    fn test_unicode_concatenation_unchanged() {
        assert_eq!(kinds(&Concatenation, "s⌢t")[1], TokenKind::Cat);
    }

    #[test]
    fn test_ambiguous_between_brackets() {
        let err = run(&Concatenation, "<a>^<b>").unwrap_err();
        assert!(err.message.contains("Ambiguous '^'"));
        assert_eq!((err.line, err.column), (1, 4));

        let err = run(&Concatenation, "⟨a⟩^⟨b⟩").unwrap_err();
        assert_eq!(err.column, 4);
    }

    #[test]
    fn test_bracket_on_one_side_only_is_fine() {
        assert_eq!(kinds(&Concatenation, "<a>^2")[3], TokenKind::Caret);
    }
}
