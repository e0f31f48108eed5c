//! Token cursor
//!
//! All token access goes through here. `peek`/`advance` see only significant tokens: a
//! `Continuation` is never significant, and `Newline`/`Indent` stop being significant as
//! soon as a bracket is open. The raw accessors (`raw_kind`, `skip_blank_lines`) ignore
//! that rule and are used by the line-oriented block parsers.

use super::error::{ParseResult, ParserError};
use super::Parser;
use crate::txt2tex::token::{Token, TokenKind};

impl Parser {
    /// Newlines are insignificant inside any open bracket
    pub(super) fn skips_line_breaks(&self) -> bool {
        self.groups.iter().any(|g| *g != TokenKind::Semicolon)
    }

    /// `;` composes relations only directly inside parentheses
    pub(super) fn semicolon_composes(&self) -> bool {
        self.groups.last() == Some(&TokenKind::LParen)
    }

    fn is_trivia(&self, kind: TokenKind) -> bool {
        match kind {
            TokenKind::Continuation => true,
            TokenKind::Newline | TokenKind::Indent => self.skips_line_breaks(),
            _ => false,
        }
    }

    fn significant_from(&self, mut idx: usize) -> usize {
        let last = self.tokens.len() - 1;
        while idx < last && self.is_trivia(self.tokens[idx].kind) {
            idx += 1;
        }
        idx.min(last)
    }

    pub(super) fn peek(&self) -> &Token {
        &self.tokens[self.significant_from(self.pos)]
    }

    pub(super) fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    /// The `n`-th significant token ahead; `peek_nth(0)` is `peek()`
    pub(super) fn peek_nth(&self, n: usize) -> &Token {
        let mut idx = self.significant_from(self.pos);
        for _ in 0..n {
            idx = self.significant_from(idx + 1);
        }
        &self.tokens[idx]
    }

    /// Consume and return the next significant token. `Eof` is never consumed.
    pub(super) fn advance(&mut self) -> Token {
        let idx = self.significant_from(self.pos);
        let token = self.tokens[idx].clone();
        if token.kind != TokenKind::Eof {
            self.pos = idx + 1;
            self.last = idx;
        } else {
            self.pos = idx;
        }
        token
    }

    /// The most recently consumed token
    pub(super) fn previous(&self) -> &Token {
        &self.tokens[self.last]
    }

    pub(super) fn check(&self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    pub(super) fn eat(&mut self, kind: TokenKind) -> Option<Token> {
        if self.check(kind) {
            Some(self.advance())
        } else {
            None
        }
    }

    /// Consume a token of `kind` or fail with "Expected {what}, found ..."
    pub(super) fn expect(&mut self, kind: TokenKind, what: &str) -> ParseResult<Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.error_here(format!("Expected {}", what)))
        }
    }

    /// Error at the next significant token, appending what was found there
    pub(super) fn error_here(&self, message: impl Into<String>) -> ParserError {
        let token = self.peek();
        ParserError::new(
            format!("{}, found {}", message.into(), token.describe()),
            token,
        )
    }

    pub(super) fn at_line_end(&self) -> bool {
        self.peek_kind().is_line_end()
    }

    /// Kind of the raw token `offset` places ahead, trivia included
    pub(super) fn raw_kind(&self, offset: usize) -> TokenKind {
        let idx = (self.pos + offset).min(self.tokens.len() - 1);
        self.tokens[idx].kind
    }

    /// Skip any run of newlines, indents and continuations
    pub(super) fn skip_blank_lines(&mut self) {
        while matches!(
            self.raw_kind(0),
            TokenKind::Newline | TokenKind::Indent | TokenKind::Continuation
        ) {
            self.pos += 1;
        }
    }

    /// Skip indents and continuations, but stop at newlines
    pub(super) fn skip_indent(&mut self) {
        while matches!(self.raw_kind(0), TokenKind::Indent | TokenKind::Continuation) {
            self.pos += 1;
        }
    }

    /// At the end of a line of a line-oriented block: consume the newline and report
    /// whether the next line still belongs to the block. A blank line, the end of input,
    /// and any line starting a new document construct end the block.
    pub(super) fn continue_block(&mut self) -> bool {
        self.skip_continuations();
        if self.raw_kind(0) != TokenKind::Newline {
            return false;
        }
        let mut offset = 1;
        while self.raw_kind(offset) == TokenKind::Indent {
            offset += 1;
        }
        let next = self.raw_kind(offset);
        if next.is_line_end() || next.is_block_keyword() || next.is_structural_marker() {
            return false;
        }
        self.pos += 1;
        true
    }

    fn skip_continuations(&mut self) {
        while self.raw_kind(0) == TokenKind::Continuation {
            self.pos += 1;
        }
    }

    /// After a binary operator, the right operand may start on the next line
    pub(super) fn skip_line_breaks_after_operator(&mut self) {
        while matches!(
            self.raw_kind(0),
            TokenKind::Newline | TokenKind::Indent | TokenKind::Continuation
        ) && !self.raw_kind(1).is_line_end()
        {
            self.pos += 1;
        }
    }

    /// Run `f` with `kind` pushed as the innermost open group
    pub(super) fn grouped<T>(
        &mut self,
        kind: TokenKind,
        f: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        self.groups.push(kind);
        let result = f(self);
        self.groups.pop();
        result
    }

    /// Run `f` with every open group hidden, so newlines are significant again
    pub(super) fn ungrouped<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        let saved = std::mem::take(&mut self.groups);
        let result = f(self);
        self.groups = saved;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::txt2tex::lexing::tokenize;

    fn parser(source: &str) -> Parser {
        Parser::new(tokenize(source).unwrap())
    }

    #[test]
    fn test_newlines_are_significant_at_top_level() {
        let p = parser("a\nb");
        assert_eq!(p.peek_nth(1).kind, TokenKind::Newline);
    }

    #[test]
    fn test_newlines_are_skipped_inside_groups() {
        let mut p = parser("(a\n  b)");
        p.advance();
        p.grouped(TokenKind::LParen, |p| {
            assert_eq!(p.advance().text, "a");
            assert_eq!(p.peek().text, "b");
            Ok(())
        })
        .unwrap();
    }

    #[test]
    fn test_binding_marker_keeps_newlines() {
        let mut p = parser("a\nb");
        p.grouped(TokenKind::Semicolon, |p| {
            assert!(!p.skips_line_breaks());
            assert!(!p.semicolon_composes());
            p.advance();
            assert_eq!(p.peek_kind(), TokenKind::Newline);
            Ok(())
        })
        .unwrap();
    }

    #[test]
    fn test_continuation_is_always_skipped() {
        let p = parser("a \\\n b");
        assert_eq!(p.peek_nth(1).text, "b");
    }

    #[test]
    fn test_advance_stops_at_eof() {
        let mut p = parser("a");
        p.advance();
        assert_eq!(p.advance().kind, TokenKind::Eof);
        assert_eq!(p.advance().kind, TokenKind::Eof);
        assert_eq!(p.previous().text, "a");
    }

    #[test]
    fn test_expect_reports_what_was_found() {
        let mut p = parser("a");
        let err = p.expect(TokenKind::RParen, "')'").unwrap_err();
        assert_eq!(err.message, "Expected ')', found 'a'");
    }

    #[test]
    fn test_continue_block_stops_at_blank_line() {
        let mut p = parser("a\nb\n\nc");
        p.advance();
        assert!(p.continue_block());
        p.advance();
        assert!(!p.continue_block());
    }

    #[test]
    fn test_continue_block_stops_at_structural_line() {
        let mut p = parser("a\nTEXT: hi");
        p.advance();
        assert!(!p.continue_block());
    }
}
