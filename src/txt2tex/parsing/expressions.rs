//! Expression parsing
//!
//! Binary operators are parsed by precedence climbing over the table below, loosest first.
//! Equal precedence resolves by associativity; the non-associative levels refuse to chain.
//!
//!     1   <=>                                         left
//!     2   =>                                          right
//!     3   or lor                                      left
//!     4   and land                                    left
//!     5   = != in elem notin < <= > >= subset psubset none
//!     6   <-> |-> and the nine function arrows        right
//!     7   union intersect ++ bag_union <| |> <<| |>> filter   left
//!     8   + - \ ^(cat)                                left
//!     9   * div mod o9 ; cross                        left
//!     10  ..                                          none
//!     11  prefix: not - # P P1 F F1 dom ran inv id bigcup bigcap seq seq1 iseq bag
//!     12  postfix: ~ + * ^ .field (args) (| |) [params] and application by juxtaposition
//!
//! `;` composes relations only directly inside parentheses; elsewhere it separates
//! declarations and binding groups.

use super::error::{ParseResult, ParserError};
use super::Parser;
use crate::txt2tex::ast::{ArrowKind, BinaryOperator, Expr, Location, UnaryOperator};
use crate::txt2tex::token::{Token, TokenKind};

pub mod precedence {
    pub const IFF: u8 = 1;
    pub const IMPLIES: u8 = 2;
    pub const OR: u8 = 3;
    pub const AND: u8 = 4;
    pub const COMPARISON: u8 = 5;
    pub const RELATION: u8 = 6;
    pub const UNION: u8 = 7;
    pub const ADDITIVE: u8 = 8;
    pub const MULTIPLICATIVE: u8 = 9;
    pub const RANGE: u8 = 10;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Assoc {
    Left,
    Right,
    None,
}

#[derive(Debug, Clone, Copy)]
enum Infix {
    Binary(BinaryOperator),
    Arrow(ArrowKind),
    Range,
}

#[derive(Debug, Clone, Copy)]
struct InfixInfo {
    precedence: u8,
    assoc: Assoc,
    infix: Infix,
}

impl Parser {
    /// Parse a full expression, loosest precedence first
    pub(super) fn parse_expression(&mut self) -> ParseResult<Expr> {
        self.parse_expr_bp(precedence::IFF)
    }

    /// Parse an expression whose binary operators all bind at least as tight as
    /// `min_precedence`
    pub(super) fn parse_expr_bp(&mut self, min_precedence: u8) -> ParseResult<Expr> {
        let mut left = self.parse_prefix()?;

        loop {
            let token = self.peek().clone();
            let Some(info) = self.infix_info(&token) else {
                break;
            };
            if info.precedence < min_precedence {
                break;
            }
            self.advance();
            self.skip_line_breaks_after_operator();

            let next_min = match info.assoc {
                Assoc::Right => info.precedence,
                Assoc::Left | Assoc::None => info.precedence + 1,
            };
            let right = self.parse_expr_bp(next_min)?;
            left = build_infix(info.infix, left, right, Location::from(&token));

            if info.assoc == Assoc::None {
                let next = self.peek().clone();
                if let Some(next_info) = self.infix_info(&next) {
                    if next_info.precedence == info.precedence {
                        return Err(ParserError::new(chaining_message(info, &next), &next));
                    }
                }
            }
        }

        Ok(left)
    }

    fn infix_info(&self, token: &Token) -> Option<InfixInfo> {
        if let Some(arrow) = ArrowKind::from_token(token.kind) {
            return Some(InfixInfo {
                precedence: precedence::RELATION,
                assoc: Assoc::Right,
                infix: Infix::Arrow(arrow),
            });
        }
        if token.kind == TokenKind::DotDot {
            return Some(InfixInfo {
                precedence: precedence::RANGE,
                assoc: Assoc::None,
                infix: Infix::Range,
            });
        }
        if token.kind == TokenKind::Semicolon && !self.semicolon_composes() {
            return None;
        }

        let op = BinaryOperator::from_token(token.kind)?;
        let (precedence, assoc) = match op {
            BinaryOperator::Iff => (precedence::IFF, Assoc::Left),
            BinaryOperator::Implies => (precedence::IMPLIES, Assoc::Right),
            BinaryOperator::Or => (precedence::OR, Assoc::Left),
            BinaryOperator::And => (precedence::AND, Assoc::Left),
            op if op.is_comparison() => (precedence::COMPARISON, Assoc::None),
            BinaryOperator::Relation | BinaryOperator::Maplet => {
                (precedence::RELATION, Assoc::Right)
            }
            BinaryOperator::Union
            | BinaryOperator::Intersect
            | BinaryOperator::Override
            | BinaryOperator::BagUnion
            | BinaryOperator::DomRes
            | BinaryOperator::RanRes
            | BinaryOperator::DomSub
            | BinaryOperator::RanSub
            | BinaryOperator::Filter => (precedence::UNION, Assoc::Left),
            BinaryOperator::Plus
            | BinaryOperator::Minus
            | BinaryOperator::Setminus
            | BinaryOperator::Concat => (precedence::ADDITIVE, Assoc::Left),
            _ => (precedence::MULTIPLICATIVE, Assoc::Left),
        };
        Some(InfixInfo {
            precedence,
            assoc,
            infix: Infix::Binary(op),
        })
    }

    /// Prefix operators, binders and conditionals, falling through to postfix forms
    pub(super) fn parse_prefix(&mut self) -> ParseResult<Expr> {
        let token = self.peek().clone();
        match token.kind {
            TokenKind::Not | TokenKind::Minus | TokenKind::Hash => {
                self.advance();
                let operand = self.parse_prefix()?;
                Ok(unary(&token, operand))
            }
            kind if kind.is_prefix_function() && self.applies_prefix_function(&token) => {
                self.advance();
                let operand = self.parse_prefix()?;
                Ok(unary(&token, operand))
            }
            TokenKind::Forall | TokenKind::Exists | TokenKind::Exists1 | TokenKind::Mu => {
                self.parse_quantifier()
            }
            TokenKind::Lambda => self.parse_lambda(),
            TokenKind::If => self.parse_conditional(),
            _ => {
                let primary = self.parse_primary()?;
                self.parse_postfix(primary, true)
            }
        }
    }

    /// `P X` is a power set, but `P` alone, `P = Q` or `P(x)` use `P` as a plain name
    fn applies_prefix_function(&self, token: &Token) -> bool {
        let next = self.peek_nth(1);
        if !next.kind.is_expression_start() || next.kind == TokenKind::Minus {
            return false;
        }
        let name_like = token.kind.is_name_like();
        !(name_like && next.kind == TokenKind::LParen && token.is_adjacent_to(next))
    }

    fn parse_conditional(&mut self) -> ParseResult<Expr> {
        let keyword = self.advance();
        let condition = self.parse_expression()?;

        self.skip_line_breaks_before(&[TokenKind::Then]);
        self.expect(TokenKind::Then, "'then' after if condition")?;
        self.skip_line_breaks_after_operator();
        let then_branch = self.parse_expression()?;

        self.skip_line_breaks_before(&[TokenKind::Else, TokenKind::Otherwise]);
        if self.eat(TokenKind::Else).is_none() && self.eat(TokenKind::Otherwise).is_none() {
            return Err(self.error_here("Expected 'else' in conditional expression"));
        }
        self.skip_line_breaks_after_operator();
        let else_branch = self.parse_expression()?;

        Ok(Expr::Conditional {
            condition: Box::new(condition),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
            location: Location::from(&keyword),
        })
    }

    /// Skip line breaks when the next line starts with one of `kinds`
    pub(super) fn skip_line_breaks_before(&mut self, kinds: &[TokenKind]) {
        let mut offset = 0;
        while matches!(
            self.raw_kind(offset),
            TokenKind::Newline | TokenKind::Indent | TokenKind::Continuation
        ) {
            offset += 1;
        }
        if offset > 0 && kinds.contains(&self.raw_kind(offset)) {
            self.pos += offset;
        }
    }

    /// Postfix operators applied to `base`, left to right
    pub(super) fn parse_postfix(
        &mut self,
        mut base: Expr,
        allow_juxtaposition: bool,
    ) -> ParseResult<Expr> {
        loop {
            let token = self.peek().clone();
            let glued = self.previous().is_adjacent_to(&token);

            base = match token.kind {
                TokenKind::LParen if glued && is_applicable(&base) => self.parse_call(base)?,
                TokenKind::LImage => self.parse_relational_image(base)?,
                TokenKind::LBracket if glued && self.starts_generic_parameters(&base) => {
                    self.parse_generic_instantiation(base)?
                }
                TokenKind::Tilde => {
                    self.advance();
                    postfix(UnaryOperator::Inverse, base)
                }
                TokenKind::Plus | TokenKind::Star
                    if glued && !self.peek_nth(1).kind.is_expression_start() =>
                {
                    self.advance();
                    let op = if token.kind == TokenKind::Plus {
                        UnaryOperator::TransitiveClosure
                    } else {
                        UnaryOperator::ReflexiveClosure
                    };
                    postfix(op, base)
                }
                TokenKind::Caret => {
                    self.advance();
                    let exponent = self.parse_exponent()?;
                    let location = base.location();
                    Expr::Superscript {
                        base: Box::new(base),
                        exponent: Box::new(exponent),
                        location,
                    }
                }
                TokenKind::Dot if glued && self.starts_projection(&token) => {
                    self.advance();
                    let field = self.advance();
                    let location = base.location();
                    Expr::TupleProjection {
                        base: Box::new(base),
                        field: field.text,
                        location,
                    }
                }
                kind if allow_juxtaposition
                    && is_applicable(&base)
                    && starts_argument(kind) =>
                {
                    let primary = self.parse_primary()?;
                    let arg = self.parse_postfix(primary, false)?;
                    let location = base.location();
                    Expr::FunctionApp {
                        function: Box::new(base),
                        args: vec![arg],
                        location,
                    }
                }
                _ => break,
            };
        }
        Ok(base)
    }

    fn parse_exponent(&mut self) -> ParseResult<Expr> {
        let token = self.peek().clone();
        if token.kind == TokenKind::Minus {
            self.advance();
            let operand = self.parse_exponent()?;
            return Ok(unary(&token, operand));
        }
        let primary = self.parse_primary()?;
        self.parse_postfix(primary, false)
    }

    fn starts_projection(&self, dot: &Token) -> bool {
        let field = self.peek_nth(1);
        matches!(field.kind, TokenKind::Identifier | TokenKind::Number) && dot.is_adjacent_to(field)
    }

    /// `T[X]` but not `p[1]`, which is a proof label glued to its formula
    fn starts_generic_parameters(&self, base: &Expr) -> bool {
        matches!(base, Expr::Identifier { .. })
            && !(self.peek_nth(1).kind == TokenKind::Number
                && self.peek_nth(2).kind == TokenKind::RBracket)
    }

    fn parse_call(&mut self, function: Expr) -> ParseResult<Expr> {
        self.advance();
        let location = function.location();
        let args = self.grouped(TokenKind::LParen, |p| {
            let mut args = Vec::new();
            if !p.check(TokenKind::RParen) {
                args.push(p.parse_expression()?);
                while p.eat(TokenKind::Comma).is_some() {
                    args.push(p.parse_expression()?);
                }
            }
            p.expect(TokenKind::RParen, "')' to close function arguments")?;
            Ok(args)
        })?;
        Ok(Expr::FunctionApp {
            function: Box::new(function),
            args,
            location,
        })
    }

    fn parse_relational_image(&mut self, relation: Expr) -> ParseResult<Expr> {
        self.advance();
        let location = relation.location();
        let set = self.grouped(TokenKind::LImage, |p| {
            let set = p.parse_expression()?;
            p.expect(TokenKind::RImage, "'|)' to close relational image")?;
            Ok(set)
        })?;
        Ok(Expr::RelationalImage {
            relation: Box::new(relation),
            set: Box::new(set),
            location,
        })
    }

    fn parse_generic_instantiation(&mut self, base: Expr) -> ParseResult<Expr> {
        self.advance();
        let location = base.location();
        let parameters = self.grouped(TokenKind::LBracket, |p| {
            let parameters = p.parse_expression_list()?;
            p.expect(TokenKind::RBracket, "']' to close generic parameters")?;
            Ok(parameters)
        })?;
        Ok(Expr::GenericInstantiation {
            base: Box::new(base),
            parameters,
            location,
        })
    }

    /// Atoms: names, numbers and bracketed forms
    pub(super) fn parse_primary(&mut self) -> ParseResult<Expr> {
        let token = self.peek().clone();
        match token.kind {
            TokenKind::Identifier => {
                self.advance();
                Ok(identifier(&token))
            }
            kind if kind.is_prefix_function() => {
                self.advance();
                Ok(identifier(&token))
            }
            TokenKind::Number => {
                self.advance();
                Ok(Expr::Number {
                    value: token.text.clone(),
                    location: Location::from(&token),
                })
            }
            TokenKind::LParen => self.parse_parenthesized(),
            TokenKind::LBrace => self.parse_set(),
            TokenKind::LAngle => self.parse_sequence(),
            TokenKind::BagOpen => self.parse_bag(),
            _ => Err(self.error_here("Expected expression")),
        }
    }

    fn parse_parenthesized(&mut self) -> ParseResult<Expr> {
        let open = self.advance();
        self.grouped(TokenKind::LParen, |p| {
            if p.check(TokenKind::RParen) {
                return Err(p.error_here("Expected expression inside parentheses"));
            }
            let first = p.parse_expression()?;
            if p.check(TokenKind::Comma) {
                let mut elements = vec![first];
                while p.eat(TokenKind::Comma).is_some() {
                    elements.push(p.parse_expression()?);
                }
                p.expect(TokenKind::RParen, "')' to close tuple")?;
                return Ok(Expr::Tuple {
                    elements,
                    location: Location::from(&open),
                });
            }
            p.expect(TokenKind::RParen, "')' to close '('")?;
            Ok(with_explicit_parens(first))
        })
    }

    fn parse_set(&mut self) -> ParseResult<Expr> {
        let open = self.advance();
        self.grouped(TokenKind::LBrace, |p| {
            if p.eat(TokenKind::RBrace).is_some() {
                return Ok(Expr::SetLiteral {
                    elements: Vec::new(),
                    location: Location::from(&open),
                });
            }
            if p.looks_like_comprehension() {
                return p.parse_set_comprehension(&open);
            }
            let elements = p.parse_expression_list()?;
            p.expect(TokenKind::RBrace, "'}' to close set")?;
            Ok(Expr::SetLiteral {
                elements,
                location: Location::from(&open),
            })
        })
    }

    fn parse_sequence(&mut self) -> ParseResult<Expr> {
        let open = self.advance();
        self.grouped(TokenKind::LAngle, |p| {
            let elements = if p.check(TokenKind::RAngle) {
                Vec::new()
            } else {
                p.parse_expression_list()?
            };
            p.expect(TokenKind::RAngle, "'>' to close sequence")?;
            Ok(Expr::SequenceLiteral {
                elements,
                location: Location::from(&open),
            })
        })
    }

    fn parse_bag(&mut self) -> ParseResult<Expr> {
        let open = self.advance();
        self.grouped(TokenKind::BagOpen, |p| {
            let elements = if p.check(TokenKind::BagClose) {
                Vec::new()
            } else {
                p.parse_expression_list()?
            };
            p.expect(TokenKind::BagClose, "']]' to close bag")?;
            Ok(Expr::BagLiteral {
                elements,
                location: Location::from(&open),
            })
        })
    }

    /// One or more comma-separated expressions
    pub(super) fn parse_expression_list(&mut self) -> ParseResult<Vec<Expr>> {
        let mut elements = vec![self.parse_expression()?];
        while self.eat(TokenKind::Comma).is_some() {
            elements.push(self.parse_expression()?);
        }
        Ok(elements)
    }
}

fn build_infix(infix: Infix, left: Expr, right: Expr, location: Location) -> Expr {
    match infix {
        Infix::Binary(op) => Expr::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
            explicit_parens: false,
            location,
        },
        Infix::Arrow(arrow) => Expr::FunctionType {
            arrow,
            domain: Box::new(left),
            range: Box::new(right),
            location,
        },
        Infix::Range => Expr::Range {
            start: Box::new(left),
            end: Box::new(right),
            location,
        },
    }
}

fn chaining_message(info: InfixInfo, next: &Token) -> String {
    match info.infix {
        Infix::Range => "Range operator '..' cannot be chained; add parentheses".to_string(),
        _ => format!(
            "Comparison operator '{}' cannot be chained; add parentheses",
            next.text
        ),
    }
}

fn identifier(token: &Token) -> Expr {
    Expr::Identifier {
        name: token.text.clone(),
        location: Location::from(token),
    }
}

fn unary(token: &Token, operand: Expr) -> Expr {
    let op = UnaryOperator::prefix(token.kind).unwrap_or(UnaryOperator::Not);
    Expr::UnaryOp {
        op,
        operand: Box::new(operand),
        location: Location::from(token),
    }
}

fn postfix(op: UnaryOperator, operand: Expr) -> Expr {
    let location = operand.location();
    Expr::UnaryOp {
        op,
        operand: Box::new(operand),
        location,
    }
}

fn with_explicit_parens(expr: Expr) -> Expr {
    match expr {
        Expr::BinaryOp {
            op,
            left,
            right,
            location,
            ..
        } => Expr::BinaryOp {
            op,
            left,
            right,
            explicit_parens: true,
            location,
        },
        other => other,
    }
}

/// Expressions that can be applied to arguments
fn is_applicable(expr: &Expr) -> bool {
    match expr {
        Expr::Identifier { .. }
        | Expr::FunctionApp { .. }
        | Expr::GenericInstantiation { .. }
        | Expr::TupleProjection { .. }
        | Expr::RelationalImage { .. }
        | Expr::Lambda { .. } => true,
        Expr::UnaryOp { op, .. } => op.is_postfix(),
        Expr::BinaryOp {
            explicit_parens, ..
        } => *explicit_parens,
        _ => false,
    }
}

/// Tokens that can start the argument of `f x`
fn starts_argument(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Identifier
            | TokenKind::Number
            | TokenKind::LParen
            | TokenKind::LBrace
            | TokenKind::LAngle
            | TokenKind::BagOpen
    )
}
