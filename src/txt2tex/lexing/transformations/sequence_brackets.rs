//! Sequence bracket transformation
//!
//! ASCII `<` and `>` are both comparison operators and sequence delimiters. The logos DFA
//! has already claimed every longer operator that starts with them (`<=>`, `<->`, `<|`,
//! `<<|`, `|>`, `>->`, ...), so only bare `<` and `>` are left to classify here.
//!
//! A `<` opens a sequence when:
//!
//!     - it is immediately followed by `>` (the empty sequence `<>`), or
//!     - the token before it cannot end an operand (`x = <a>`, `(<a>, <b>)`) and a `>`
//!       follows later on the same line, or
//!     - its matching `>` on the same line is not followed by the start of an expression
//!       (`rev <a, b>`, `head <a> = a`, `leaf<N> | ...`, but not `x < y land y > z`).
//!       A comparison `>` always needs a right operand, so this never steals one.
//!
//! A `>` closes a sequence when a sequence is open at the current grouping depth. Open
//! sequences are kept on a stack of grouping depths, so `<<x,y>,<>>` closes correctly.
//!
//! The same pass resolves `]]`: outside an open bag it is two closing brackets (`f[X[Y]]`).

use crate::txt2tex::lexing::error::LexerError;
use crate::txt2tex::lexing::position::SourceLocation;
use crate::txt2tex::lexing::transformations::Transformation;
use crate::txt2tex::lexing::LocatedTokens;
use crate::txt2tex::token::TokenKind;
use std::ops::Range;

pub struct SequenceBrackets;

impl Transformation for SequenceBrackets {
    fn name(&self) -> &str {
        "sequence_brackets"
    }

    fn description(&self) -> &str {
        "Classify ASCII < and > as sequence brackets or comparisons, split ]] outside bags"
    }

    fn transform(
        &self,
        _location: &SourceLocation,
        tokens: LocatedTokens,
    ) -> Result<LocatedTokens, LexerError> {
        Ok(classify_brackets(&tokens))
    }
}

pub fn classify_brackets(tokens: &[(TokenKind, Range<usize>)]) -> LocatedTokens {
    let mut result: LocatedTokens = Vec::with_capacity(tokens.len());
    let mut open_sequences: Vec<usize> = Vec::new();
    let mut depth = 0usize;
    let mut bag_depth = 0usize;

    for (i, (kind, range)) in tokens.iter().enumerate() {
        let range = range.clone();
        match kind {
            TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace | TokenKind::LImage => {
                depth += 1;
                result.push((*kind, range));
            }
            TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace | TokenKind::RImage => {
                depth = depth.saturating_sub(1);
                result.push((*kind, range));
            }
            TokenKind::LessThan if opens_sequence(tokens, i, result.last()) => {
                open_sequences.push(depth);
                result.push((TokenKind::LAngle, range));
            }
            TokenKind::LAngle => {
                open_sequences.push(depth);
                result.push((*kind, range));
            }
            TokenKind::GreaterThan if open_sequences.last() == Some(&depth) => {
                open_sequences.pop();
                result.push((TokenKind::RAngle, range));
            }
            TokenKind::RAngle => {
                open_sequences.pop();
                result.push((*kind, range));
            }
            TokenKind::BagOpen => {
                bag_depth += 1;
                result.push((*kind, range));
            }
            TokenKind::BagClose if bag_depth > 0 => {
                bag_depth -= 1;
                result.push((*kind, range));
            }
            TokenKind::BagClose if range.len() == 2 => {
                depth = depth.saturating_sub(2);
                result.push((TokenKind::RBracket, range.start..range.start + 1));
                result.push((TokenKind::RBracket, range.start + 1..range.end));
            }
            _ => result.push((*kind, range)),
        }
    }

    result
}

fn opens_sequence(
    tokens: &[(TokenKind, Range<usize>)],
    i: usize,
    previous: Option<&(TokenKind, Range<usize>)>,
) -> bool {
    let (_, range) = &tokens[i];

    // `<>`
    if let Some((TokenKind::GreaterThan, next_range)) = tokens.get(i + 1) {
        if next_range.start == range.end {
            return true;
        }
    }

    let Some(close) = matching_close(tokens, i) else {
        return false;
    };

    let prev_ends_operand = previous.is_some_and(|(kind, _)| kind.is_operand_end());
    if !prev_ends_operand {
        return true;
    }

    !tokens
        .get(close + 1)
        .is_some_and(|(kind, _)| kind.is_expression_start())
}

/// Index of the `>` that would close the `<` at `open`, searching the rest of its line
/// at the same grouping depth
fn matching_close(tokens: &[(TokenKind, Range<usize>)], open: usize) -> Option<usize> {
    let mut nesting = 0usize;
    let mut depth = 0usize;
    for (j, (kind, _)) in tokens.iter().enumerate().skip(open + 1) {
        match kind {
            TokenKind::Newline => return None,
            TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace | TokenKind::LImage => {
                depth += 1
            }
            TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace | TokenKind::RImage => {
                if depth == 0 {
                    return None;
                }
                depth -= 1;
            }
            _ if depth > 0 => {}
            TokenKind::LessThan => nesting += 1,
            TokenKind::GreaterThan if nesting == 0 => return Some(j),
            TokenKind::GreaterThan => nesting -= 1,
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::txt2tex::lexing::transformations::test_support::kinds;
    use TokenKind::*;

    #[test]
    fn test_empty_sequence() {
        assert_eq!(kinds(&SequenceBrackets, "<>"), vec![LAngle, RAngle]);
    }

    #[test]
    fn test_sequence_after_operator() {
        assert_eq!(
            kinds(&SequenceBrackets, "s = <a, b>"),
            vec![Identifier, Equals, LAngle, Identifier, Comma, Identifier, RAngle]
        );
    }

    #[test]
    fn test_comparison_between_operands() {
        assert_eq!(
            kinds(&SequenceBrackets, "x < y land y > z"),
            vec![Identifier, LessThan, Identifier, And, Identifier, GreaterThan, Identifier]
        );
    }

    #[test]
    fn test_nested_sequences() {
        assert_eq!(
            kinds(&SequenceBrackets, "<<x,y>,<>>"),
            vec![LAngle, LAngle, Identifier, Comma, Identifier, RAngle, Comma, LAngle, RAngle, RAngle]
        );
    }

    #[test]
    fn test_constructor_parameter() {
        assert_eq!(
            kinds(&SequenceBrackets, "leaf<N> | node"),
            vec![Identifier, LAngle, Identifier, RAngle, Pipe, Identifier]
        );
    }

    #[test]
    fn test_sequence_applied_by_juxtaposition() {
        assert_eq!(
            kinds(&SequenceBrackets, "rev <a, b>"),
            vec![Identifier, LAngle, Identifier, Comma, Identifier, RAngle]
        );
        assert_eq!(
            kinds(&SequenceBrackets, "x = rev <1, 2>"),
            vec![Identifier, Equals, Identifier, LAngle, Number, Comma, Number, RAngle]
        );
        assert_eq!(
            kinds(&SequenceBrackets, "head <a> = a"),
            vec![Identifier, LAngle, Identifier, RAngle, Equals, Identifier]
        );
    }

    #[test]
    fn test_comparisons_across_groups() {
        assert_eq!(
            kinds(&SequenceBrackets, "{x : N | x < 9} = {y : N | y > 3}")
                .into_iter()
                .filter(|k| matches!(k, LessThan | GreaterThan | LAngle | RAngle))
                .collect::<Vec<_>>(),
            vec![LessThan, GreaterThan]
        );
    }

    #[test]
    fn test_glued_comparison_stays_comparison() {
        assert_eq!(
            kinds(&SequenceBrackets, "x<y and y>z"),
            vec![Identifier, LessThan, Identifier, And, Identifier, GreaterThan, Identifier]
        );
    }

    #[test]
    fn test_comparison_inside_parens_of_sequence() {
        assert_eq!(
            kinds(&SequenceBrackets, "<(a > b)>"),
            vec![LAngle, LParen, Identifier, GreaterThan, Identifier, RParen, RAngle]
        );
    }

    #[test]
    fn test_longer_operators_are_never_brackets() {
        assert_eq!(
            kinds(&SequenceBrackets, "S <| R |> T"),
            vec![Identifier, DomRes, Identifier, RanRes, Identifier]
        );
        assert_eq!(kinds(&SequenceBrackets, "p <=> q")[1], Iff);
        assert_eq!(kinds(&SequenceBrackets, "A <-> B")[1], Relation);
    }

    #[test]
    fn test_less_than_without_close_on_line() {
        assert_eq!(
            kinds(&SequenceBrackets, "x = < \n y > 1")[2],
            LessThan
        );
    }

    #[test]
    fn test_double_bracket_outside_bag() {
        assert_eq!(
            kinds(&SequenceBrackets, "f[X[Y]]"),
            vec![Identifier, LBracket, Identifier, LBracket, Identifier, RBracket, RBracket]
        );
    }

    #[test]
    fn test_bag_brackets() {
        assert_eq!(
            kinds(&SequenceBrackets, "[[a, b]]"),
            vec![BagOpen, Identifier, Comma, Identifier, BagClose]
        );
    }
}
