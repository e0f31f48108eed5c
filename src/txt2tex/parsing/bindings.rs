//! Binders: quantifiers, lambda and set comprehension
//!
//! A binding list is one or more `;`-separated groups. Each group is a comma list of names
//! or a single parenthesized tuple of names, optionally typed with `: Domain`:
//!
//!     forall x, y : N; (a, b) : N cross N | ...
//!
//! Quantifiers and lambdas hold one group per node, so several groups desugar to nested
//! nodes with the same keyword. Set comprehensions keep all groups in one node.

use super::error::ParseResult;
use super::Parser;
use crate::txt2tex::ast::{Binding, Expr, Location, QuantifierKind};
use crate::txt2tex::token::{Token, TokenKind};

#[derive(Debug, Clone)]
struct BindingGroup {
    variables: Vec<String>,
    tuple_pattern: bool,
    domain: Option<Expr>,
    location: Location,
}

impl Parser {
    /// `forall`, `exists`, `exists1` or `mu`, positioned at the keyword
    pub(super) fn parse_quantifier(&mut self) -> ParseResult<Expr> {
        let keyword = self.advance();
        let kind = QuantifierKind::from_token(keyword.kind).unwrap_or(QuantifierKind::Forall);
        let groups = self.parse_binding_groups()?;

        self.expect(TokenKind::Pipe, "'|' after quantifier binding")?;
        self.skip_line_breaks_after_operator();
        let body = self.parse_expression()?;

        let expression = if kind == QuantifierKind::Mu && self.eat(TokenKind::Dot).is_some() {
            self.skip_line_breaks_after_operator();
            Some(Box::new(self.parse_expression()?))
        } else {
            None
        };

        Ok(nest(groups, body, |group, inner, is_innermost| Expr::Quantifier {
            kind,
            variables: group.variables,
            tuple_pattern: group.tuple_pattern,
            domain: group.domain.map(Box::new),
            body: Box::new(inner),
            expression: if is_innermost { expression.clone() } else { None },
            location: Location::from(&keyword),
        }))
    }

    /// `lambda x : T . body`; `|` is accepted in place of `.`
    pub(super) fn parse_lambda(&mut self) -> ParseResult<Expr> {
        let keyword = self.advance();
        let groups = self.parse_binding_groups()?;

        if self.eat(TokenKind::Dot).is_none() && self.eat(TokenKind::Pipe).is_none() {
            return Err(self.error_here("Expected '.' after lambda binding"));
        }
        self.skip_line_breaks_after_operator();
        let body = self.parse_expression()?;

        Ok(nest(groups, body, |group, inner, _| Expr::Lambda {
            variables: group.variables,
            tuple_pattern: group.tuple_pattern,
            domain: group.domain.map(Box::new),
            body: Box::new(inner),
            location: Location::from(&keyword),
        }))
    }

    /// After `{`: a name list or a tuple pattern `(a, b)`, followed by `:` or `|`, starts a
    /// comprehension
    pub(super) fn looks_like_comprehension(&self) -> bool {
        let tuple = self.peek_kind() == TokenKind::LParen;
        let mut n = usize::from(tuple);
        loop {
            if self.peek_nth(n).kind != TokenKind::Identifier {
                return false;
            }
            match self.peek_nth(n + 1).kind {
                TokenKind::Comma => n += 2,
                TokenKind::RParen if tuple => {
                    return matches!(
                        self.peek_nth(n + 2).kind,
                        TokenKind::Colon | TokenKind::Pipe
                    )
                }
                TokenKind::Colon | TokenKind::Pipe if !tuple => return true,
                _ => return false,
            }
        }
    }

    /// `{ bindings | P }`, `{ bindings | P . E }` or `{ bindings . E }`, after the `{`
    pub(super) fn parse_set_comprehension(&mut self, open: &Token) -> ParseResult<Expr> {
        let bindings = self
            .parse_binding_groups()?
            .into_iter()
            .map(|group| Binding {
                variables: group.variables,
                domain: group.domain,
                location: group.location,
            })
            .collect();

        let mut predicate = None;
        let mut expression = None;
        if self.eat(TokenKind::Pipe).is_some() {
            predicate = Some(Box::new(self.parse_expression()?));
            if self.eat(TokenKind::Dot).is_some() {
                expression = Some(Box::new(self.parse_expression()?));
            }
        } else if self.eat(TokenKind::Dot).is_some() {
            expression = Some(Box::new(self.parse_expression()?));
        } else if !self.check(TokenKind::RBrace) {
            return Err(self.error_here("Expected '|' after set comprehension binding"));
        }

        self.expect(TokenKind::RBrace, "'}' to close set comprehension")?;
        Ok(Expr::SetComprehension {
            bindings,
            predicate,
            expression,
            location: Location::from(open),
        })
    }

    fn parse_binding_groups(&mut self) -> ParseResult<Vec<BindingGroup>> {
        self.grouped(TokenKind::Semicolon, |p| {
            let mut groups = vec![p.parse_binding_group()?];
            while p.eat(TokenKind::Semicolon).is_some() {
                groups.push(p.parse_binding_group()?);
            }
            Ok(groups)
        })
    }

    fn parse_binding_group(&mut self) -> ParseResult<BindingGroup> {
        let start = self.peek().clone();
        let (variables, tuple_pattern) = if start.kind == TokenKind::LParen {
            (self.parse_tuple_pattern()?, true)
        } else {
            (self.parse_variable_list()?, false)
        };

        let domain = if self.eat(TokenKind::Colon).is_some() {
            Some(self.parse_expression()?)
        } else {
            None
        };

        Ok(BindingGroup {
            variables,
            tuple_pattern,
            domain,
            location: Location::from(&start),
        })
    }

    fn parse_variable_list(&mut self) -> ParseResult<Vec<String>> {
        let mut variables = vec![self.expect(TokenKind::Identifier, "bound variable")?.text];
        while self.eat(TokenKind::Comma).is_some() {
            variables.push(self.expect(TokenKind::Identifier, "bound variable")?.text);
        }
        Ok(variables)
    }

    /// `(a, b, c)`: names only, no nesting
    fn parse_tuple_pattern(&mut self) -> ParseResult<Vec<String>> {
        self.advance();
        self.grouped(TokenKind::LParen, |p| {
            if p.check(TokenKind::RParen) {
                return Err(p.error_here("Empty tuple pattern in quantifier binding"));
            }
            let mut names = Vec::new();
            loop {
                match p.eat(TokenKind::Identifier) {
                    Some(name) => names.push(name.text),
                    None => {
                        return Err(p.error_here(
                            "Tuple pattern in quantifier binding must contain only identifiers",
                        ))
                    }
                }
                if p.eat(TokenKind::Comma).is_none() {
                    break;
                }
            }
            p.expect(TokenKind::RParen, "')' to close tuple pattern")?;
            Ok(names)
        })
    }
}

/// Wrap `body` in one node per group, first group outermost
fn nest(
    groups: Vec<BindingGroup>,
    body: Expr,
    mut build: impl FnMut(BindingGroup, Expr, bool) -> Expr,
) -> Expr {
    let count = groups.len();
    groups
        .into_iter()
        .enumerate()
        .rev()
        .fold(body, |inner, (i, group)| build(group, inner, i + 1 == count))
}

#[cfg(test)]
mod tests {
    use crate::txt2tex::ast::{Expr, QuantifierKind};
    use crate::txt2tex::parse_source;

    fn expr(source: &str) -> Expr {
        parse_source(source).unwrap().as_expr().cloned().unwrap()
    }

    #[test]
    fn test_semicolon_groups_nest() {
        match expr("forall x : N; y : N | x + y > 0") {
            Expr::Quantifier {
                kind,
                variables,
                body,
                ..
            } => {
                assert_eq!(kind, QuantifierKind::Forall);
                assert_eq!(variables, vec!["x"]);
                match *body {
                    Expr::Quantifier {
                        kind, variables, ..
                    } => {
                        assert_eq!(kind, QuantifierKind::Forall);
                        assert_eq!(variables, vec!["y"]);
                    }
                    other => panic!("unexpected {:?}", other),
                }
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_variable_list_and_untyped() {
        match expr("exists a, b | a = b") {
            Expr::Quantifier {
                variables, domain, ..
            } => {
                assert_eq!(variables, vec!["a", "b"]);
                assert!(domain.is_none());
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_tuple_pattern() {
        match expr("forall (a, b) : N cross N | a > b") {
            Expr::Quantifier {
                variables,
                tuple_pattern,
                ..
            } => {
                assert_eq!(variables, vec!["a", "b"]);
                assert!(tuple_pattern);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_nested_tuple_pattern_is_rejected() {
        let err = parse_source("forall ((a,b),c) : T | P").unwrap_err();
        assert!(err
            .to_string()
            .contains("Tuple pattern in quantifier binding must contain only identifiers"));
    }

    #[test]
    fn test_empty_tuple_pattern_is_rejected() {
        let err = parse_source("forall () : T | P").unwrap_err();
        assert!(err.to_string().contains("Empty tuple pattern"));
    }

    #[test]
    fn test_missing_pipe() {
        let err = parse_source("forall x : N x > 0").unwrap_err();
        assert!(err.to_string().contains("Expected '|' after quantifier binding"));
    }

    #[test]
    fn test_mu_expression_part() {
        match expr("mu x : N | x > 2 . x * x") {
            Expr::Quantifier {
                kind, expression, ..
            } => {
                assert_eq!(kind, QuantifierKind::Mu);
                assert!(expression.is_some());
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_lambda() {
        assert!(matches!(expr("lambda x : N . x + 1"), Expr::Lambda { .. }));
    }

    #[test]
    fn test_set_comprehension_forms() {
        match expr("{x : N | x > 2 . x * x}") {
            Expr::SetComprehension {
                bindings,
                predicate,
                expression,
                ..
            } => {
                assert_eq!(bindings.len(), 1);
                assert!(predicate.is_some());
                assert!(expression.is_some());
            }
            other => panic!("unexpected {:?}", other),
        }
        match expr("{x : N . x * x}") {
            Expr::SetComprehension {
                predicate,
                expression,
                ..
            } => {
                assert!(predicate.is_none());
                assert!(expression.is_some());
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(expr("{a, b}"), Expr::SetLiteral { .. }));
    }

    #[test]
    fn test_set_comprehension_over_tuple_pattern() {
        match expr("{ (a, b) : T | a = b }") {
            Expr::SetComprehension {
                bindings,
                predicate,
                ..
            } => {
                assert_eq!(bindings[0].variables, vec!["a", "b"]);
                assert!(predicate.is_some());
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(expr("{(a, b)}"), Expr::SetLiteral { .. }));
        assert!(matches!(expr("{(a, b), c}"), Expr::SetLiteral { .. }));
    }

    #[test]
    fn test_comprehension_missing_pipe() {
        let err = parse_source("{x : N, y}").unwrap_err();
        assert!(err
            .to_string()
            .contains("Expected '|' after set comprehension binding"));
    }
}
