//! Bracketed annotations: justifications, assumption labels and rule names
//!
//! The text between `[` and `]` is rebuilt from its tokens, keeping the spacing the author
//! wrote, then tidied around commas and parentheses and given display symbols for operator
//! spellings (`=>` becomes `⇒`, `land` becomes `∧`). Plain words stay as written.

use super::error::ParseResult;
use super::Parser;
use crate::txt2tex::token::{substitute_operators, Token, TokenKind};
use once_cell::sync::Lazy;
use regex::Regex;

static SPACE_BEFORE_COMMA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+,").expect("comma pattern is valid"));
static SPACE_AFTER_COMMA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",[ \t]*").expect("comma pattern is valid"));
static SPACE_AFTER_OPEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\([ \t]+").expect("paren pattern is valid"));
static SPACE_BEFORE_CLOSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t]+\)").expect("paren pattern is valid"));

/// Contents of one `[...]` annotation
#[derive(Debug, Clone)]
pub(super) enum Annotation {
    /// `[3]`
    Label(u32),
    Justification(String),
}

impl Parser {
    /// Parse `[...]` at the cursor, on a single line
    pub(super) fn parse_annotation(&mut self) -> ParseResult<Annotation> {
        let tokens = self.parse_bracketed()?;
        if let [token] = tokens.as_slice() {
            if token.kind == TokenKind::Number {
                if let Ok(label) = token.text.parse() {
                    return Ok(Annotation::Label(label));
                }
            }
        }
        Ok(Annotation::Justification(justification_text(&tokens)))
    }

    /// Parse `[...]` and return its display text
    pub(super) fn parse_justification(&mut self) -> ParseResult<String> {
        let tokens = self.parse_bracketed()?;
        Ok(justification_text(&tokens))
    }

    /// Tokens strictly between `[` and its matching `]`
    fn parse_bracketed(&mut self) -> ParseResult<Vec<Token>> {
        self.expect(TokenKind::LBracket, "'['")?;
        let mut tokens = Vec::new();
        let mut depth = 0usize;
        loop {
            match self.peek_kind() {
                TokenKind::RBracket if depth == 0 => break,
                TokenKind::Newline | TokenKind::Eof => {
                    return Err(self.error_here("Expected ']' to close justification"))
                }
                TokenKind::LBracket => depth += 1,
                TokenKind::RBracket => depth -= 1,
                _ => {}
            }
            tokens.push(self.advance());
        }
        self.advance();
        Ok(tokens)
    }

    /// Tokens from the cursor to the end of the line, not consumed past it
    pub(super) fn rest_of_line(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while !self.at_line_end() {
            tokens.push(self.advance());
        }
        tokens
    }
}

/// Rebuild source text from tokens, keeping the gaps between them
pub fn join_tokens(tokens: &[Token]) -> String {
    let mut text = String::new();
    let mut previous: Option<&Token> = None;
    for token in tokens {
        if let Some(prev) = previous {
            let gap = if prev.line == token.line {
                token.column.saturating_sub(prev.end_column())
            } else {
                1
            };
            text.extend(std::iter::repeat(' ').take(gap as usize));
        }
        text.push_str(&token.text);
        previous = Some(token);
    }
    text
}

/// Normalize spacing around commas and inside parentheses
pub fn smart_join(text: &str) -> String {
    let text = SPACE_BEFORE_COMMA.replace_all(text, ",");
    let text = SPACE_AFTER_COMMA.replace_all(&text, ", ");
    let text = SPACE_AFTER_OPEN.replace_all(&text, "(");
    let text = SPACE_BEFORE_CLOSE.replace_all(&text, ")");
    text.trim().to_string()
}

/// Display text of a justification
pub fn justification_text(tokens: &[Token]) -> String {
    substitute_operators(&smart_join(&join_tokens(tokens)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::txt2tex::lexing::tokenize;

    fn text_of(source: &str) -> String {
        let tokens: Vec<Token> = tokenize(source)
            .unwrap()
            .into_iter()
            .filter(|t| t.kind != TokenKind::Eof)
            .collect();
        justification_text(&tokens)
    }

    #[test]
    fn test_spacing_is_kept() {
        assert_eq!(join_tokens(&tokenize("and  elim").unwrap()[..2]), "and  elim");
    }

    #[test]
    fn test_smart_join() {
        assert_eq!(smart_join("from 1 ,2"), "from 1, 2");
        assert_eq!(smart_join("( a , b )"), "(a, b)");
    }

    #[test]
    fn test_operators_get_symbols() {
        assert_eq!(text_of("=> intro"), "⇒ intro");
        assert_eq!(text_of("land elim , 1"), "∧ elim, 1");
    }

    #[test]
    fn test_words_are_left_alone() {
        assert_eq!(text_of("definition of union"), "definition of union");
    }

    #[test]
    fn test_annotations() {
        let mut parser = Parser::new(tokenize("[1] [and intro]").unwrap());
        assert!(matches!(
            parser.parse_annotation().unwrap(),
            Annotation::Label(1)
        ));
        match parser.parse_annotation().unwrap() {
            Annotation::Justification(text) => assert_eq!(text, "and intro"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_unclosed_bracket() {
        let mut parser = Parser::new(tokenize("[and intro\np").unwrap());
        let err = parser.parse_annotation().unwrap_err();
        assert!(err.message.contains("Expected ']' to close justification"));
    }
}
