//! Part label transformation
//!
//! `(a)`, `(b)`, ... at the start of a line open a part of a solution. The three tokens
//! `(`, a single lowercase letter and `)` must be adjacent, and what follows must not be a
//! binary operator: `(p) land q` at the start of a line is still an expression.

use crate::txt2tex::lexing::error::LexerError;
use crate::txt2tex::lexing::position::SourceLocation;
use crate::txt2tex::lexing::transformations::Transformation;
use crate::txt2tex::lexing::LocatedTokens;
use crate::txt2tex::token::TokenKind;

pub struct PartLabels;

impl Transformation for PartLabels {
    fn name(&self) -> &str {
        "part_labels"
    }

    fn description(&self) -> &str {
        "Replace (a) at the start of a line with a single PartLabel token"
    }

    fn transform(
        &self,
        location: &SourceLocation,
        tokens: LocatedTokens,
    ) -> Result<LocatedTokens, LexerError> {
        Ok(detect_part_labels(location.source(), tokens))
    }
}

fn is_label_letter(text: &str) -> bool {
    let mut chars = text.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_lowercase())
}

pub fn detect_part_labels(source: &str, tokens: LocatedTokens) -> LocatedTokens {
    let mut result = Vec::with_capacity(tokens.len());
    let mut i = 0;

    while i < tokens.len() {
        let at_line_start = i == 0 || tokens[i - 1].0 == TokenKind::Newline;
        if at_line_start && i + 2 < tokens.len() {
            let (open, open_range) = &tokens[i];
            let (letter, letter_range) = &tokens[i + 1];
            let (close, close_range) = &tokens[i + 2];
            let follower = tokens.get(i + 3).map(|(kind, _)| *kind);
            let is_label = *open == TokenKind::LParen
                && *letter == TokenKind::Identifier
                && is_label_letter(&source[letter_range.clone()])
                && *close == TokenKind::RParen
                && open_range.end == letter_range.start
                && letter_range.end == close_range.start
                && match follower {
                    None | Some(TokenKind::Newline) => true,
                    Some(kind) => !kind.is_infix_operator() && kind != TokenKind::Minus,
                };
            if is_label {
                result.push((TokenKind::PartLabel, open_range.start..close_range.end));
                i += 3;
                continue;
            }
        }
        result.push(tokens[i].clone());
        i += 1;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::txt2tex::lexing::transformations::test_support::{kinds, run};

    #[test]
    fn test_label_alone_on_line() {
        let tokens = run(&PartLabels, "(a)\np").unwrap();
        assert_eq!(tokens[0], (TokenKind::PartLabel, "(a)".to_string()));
        assert_eq!(tokens[1].0, TokenKind::Newline);
    }

    #[test]
    fn test_label_followed_by_content() {
        assert_eq!(
            kinds(&PartLabels, "(b) x + 1"),
            vec![
                TokenKind::PartLabel,
                TokenKind::Identifier,
                TokenKind::Plus,
                TokenKind::Number
            ]
        );
    }

    #[test]
    fn test_parenthesized_expression_is_not_a_label() {
        let tokens = kinds(&PartLabels, "(p) land q");
        assert_eq!(tokens[0], TokenKind::LParen);
    }

    #[test]
    fn test_only_at_line_start() {
        let tokens = kinds(&PartLabels, "f (a)");
        assert!(!tokens.contains(&TokenKind::PartLabel));
    }

    #[test]
    fn test_multi_letter_is_not_a_label() {
        let tokens = kinds(&PartLabels, "(ab)\n");
        assert_eq!(tokens[0], TokenKind::LParen);
    }
}
