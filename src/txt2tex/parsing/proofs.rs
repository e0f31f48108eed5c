//! Line-oriented proof blocks: TRUTH TABLE:, EQUIV:/ARGUE:, PROOF: and INFRULE:
//!
//! Each block starts with its keyword and takes the following lines until a blank line or
//! a line that starts another construct. Only PROOF: looks at indentation; the lexer emits
//! an `Indent` token at the start of each of its lines, and nesting follows the width of
//! that indent relative to the first line:
//!
//!     PROOF:
//!     p land q [and intro]        depth 0
//!       p [1]                     depth 1, child of the line above
//!       :: q [2]                  depth 1, marked as a sibling premise
//!       case x elem S:            depth 1, a case analysis
//!         ...                     depth 2, an elided step inside the case

use super::error::{ParseResult, ParserError};
use super::justification::{join_tokens, Annotation};
use super::Parser;
use crate::txt2tex::ast::{
    BinaryOperator, CaseAnalysis, ChainKind, EquivChain, EquivStep, InfruleBlock, InfruleLine,
    Location, ProofChild, ProofNode, ProofTree, TruthTable,
};
use crate::txt2tex::token::{Token, TokenKind};

/// A parsed proof line waiting to be placed in the tree
struct Slot {
    item: ProofChild,
    parent: Option<usize>,
}

impl Parser {
    /// Step onto the line after a block keyword
    fn enter_block(&mut self) {
        if self.raw_kind(0) == TokenKind::Newline {
            self.pos += 1;
        }
    }

    pub(super) fn parse_truth_table(&mut self) -> ParseResult<TruthTable> {
        let keyword = self.advance();
        self.enter_block();

        if !self.peek_kind().is_name_like() {
            return Err(self.error_here("Expected truth table header row"));
        }
        let headers: Vec<String> = split_cells(&self.rest_of_line())
            .iter()
            .map(|cell| single_spaced(cell))
            .collect();
        if headers.iter().any(String::is_empty) {
            return Err(self.error_here("Empty column in truth table header row"));
        }

        let mut rows = Vec::new();
        while self.continue_block() {
            let row_start = self.peek().clone();
            let cells = split_cells(&self.rest_of_line());
            let mut row = Vec::with_capacity(cells.len());
            for cell in &cells {
                row.push(truth_value(cell, &row_start)?);
            }
            if row.len() != headers.len() {
                return Err(ParserError::new(
                    format!(
                        "Truth table row has {} values but the header has {} columns",
                        row.len(),
                        headers.len()
                    ),
                    &row_start,
                ));
            }
            rows.push(row);
        }

        Ok(TruthTable {
            headers,
            rows,
            location: Location::from(&keyword),
        })
    }

    pub(super) fn parse_equiv_chain(&mut self) -> ParseResult<EquivChain> {
        let keyword = self.advance();
        let kind = if keyword.kind == TokenKind::ArgueKeyword {
            ChainKind::Argue
        } else {
            ChainKind::Equiv
        };
        self.enter_block();

        let mut steps = Vec::new();
        loop {
            steps.push(self.parse_equiv_step()?);
            if !self.continue_block() {
                break;
            }
        }

        Ok(EquivChain {
            kind,
            steps,
            location: Location::from(&keyword),
        })
    }

    fn parse_equiv_step(&mut self) -> ParseResult<EquivStep> {
        let start = self.peek().clone();
        let relation = match start.kind {
            TokenKind::Iff | TokenKind::Implies | TokenKind::Equals => {
                self.advance();
                BinaryOperator::from_token(start.kind)
            }
            _ => None,
        };
        let expression = self.parse_expression()?;
        let justification = if self.check(TokenKind::LBracket) {
            Some(self.parse_justification()?)
        } else {
            None
        };
        if !self.at_line_end() {
            return Err(self.error_here("Expected end of line after equivalence step"));
        }
        Ok(EquivStep {
            relation,
            expression,
            justification,
            location: Location::from(&start),
        })
    }

    pub(super) fn parse_proof(&mut self) -> ParseResult<ProofTree> {
        let keyword = self.advance();
        let mut slots: Vec<Slot> = Vec::new();
        // (indent width, slot index) of the lines that can still take children
        let mut open: Vec<(u32, usize)> = Vec::new();
        let mut base: Option<u32> = None;

        while self.raw_kind(0) == TokenKind::Newline && self.raw_kind(1) == TokenKind::Indent {
            self.pos += 1;
            let indent = self.tokens[self.pos].clone();
            self.pos += 1;
            let width = indent.width();

            let base_width = *base.get_or_insert(width);
            if width < base_width {
                return Err(ParserError::new(
                    "Proof line is indented less than the first line of the proof",
                    self.peek(),
                ));
            }

            while open.last().map_or(false, |(w, _)| *w >= width) {
                open.pop();
            }
            let line_start = self.peek().clone();
            let item = self.parse_proof_line()?;
            let parent = open.last().map(|(_, idx)| *idx);
            if parent.is_none() && matches!(item, ProofChild::Case(_)) {
                return Err(ParserError::new(
                    "Case analysis must be nested under a proof step",
                    &line_start,
                ));
            }
            open.push((width, slots.len()));
            slots.push(Slot { item, parent });
        }

        if slots.is_empty() {
            return Err(self.error_here("Expected proof line after 'PROOF:'"));
        }

        Ok(ProofTree {
            nodes: assemble(slots),
            location: Location::from(&keyword),
        })
    }

    /// One proof line, without its indentation
    fn parse_proof_line(&mut self) -> ParseResult<ProofChild> {
        let start = self.peek().clone();
        let is_sibling = self.eat(TokenKind::DoubleColon).is_some();
        let mut label = None;
        let mut justification = None;

        if self.check(TokenKind::LBracket) {
            self.apply_annotation(&mut label, &mut justification)?;
        }

        if self.check(TokenKind::Case) {
            let keyword = self.advance();
            let mut tokens = self.rest_of_line();
            if tokens.last().map(|t| t.kind) != Some(TokenKind::Colon) {
                return Err(self.error_here("Expected ':' after case"));
            }
            tokens.pop();
            if tokens.is_empty() {
                return Err(ParserError::new("Expected case name after 'case'", &keyword));
            }
            return Ok(ProofChild::Case(CaseAnalysis {
                case_name: join_tokens(&tokens),
                steps: Vec::new(),
                location: Location::from(&keyword),
            }));
        }

        let expression = if self.eat(TokenKind::Ellipsis).is_some() {
            None
        } else {
            Some(self.parse_expression()?)
        };
        while self.check(TokenKind::LBracket) {
            self.apply_annotation(&mut label, &mut justification)?;
        }
        if !self.at_line_end() {
            return Err(self.error_here("Expected end of line after proof step"));
        }

        Ok(ProofChild::Node(ProofNode {
            expression,
            justification,
            label,
            is_sibling,
            children: Vec::new(),
            location: Location::from(&start),
        }))
    }

    fn apply_annotation(
        &mut self,
        label: &mut Option<u32>,
        justification: &mut Option<String>,
    ) -> ParseResult<()> {
        match self.parse_annotation()? {
            Annotation::Label(n) => *label = Some(n),
            Annotation::Justification(text) => *justification = Some(text),
        }
        Ok(())
    }

    pub(super) fn parse_infrule(&mut self) -> ParseResult<InfruleBlock> {
        let keyword = self.advance();
        self.enter_block();

        let mut premises = Vec::new();
        while !self.check(TokenKind::InfruleSeparator) {
            if self.check(TokenKind::Eof) {
                return Err(self.error_here("Expected '---' separator in inference rule"));
            }
            premises.push(self.parse_infrule_line()?);
            if !self.continue_block() {
                return Err(self.error_here("Expected '---' separator in inference rule"));
            }
        }
        if premises.is_empty() {
            return Err(self.error_here("Expected at least one premise before '---'"));
        }

        self.advance();
        if !self.continue_block() {
            return Err(self.error_here("Expected conclusion after '---'"));
        }
        let conclusion = self.parse_infrule_line()?;
        if self.continue_block() {
            return Err(self.error_here("Inference rule has more than one conclusion"));
        }

        Ok(InfruleBlock {
            premises,
            conclusion,
            location: Location::from(&keyword),
        })
    }

    fn parse_infrule_line(&mut self) -> ParseResult<InfruleLine> {
        let start = self.peek().clone();
        let expression = self.parse_expression()?;
        let label = if self.check(TokenKind::LBracket) {
            Some(self.parse_justification()?)
        } else {
            None
        };
        if !self.at_line_end() {
            return Err(self.error_here("Expected end of line after inference rule line"));
        }
        Ok(InfruleLine {
            expression,
            label,
            location: Location::from(&start),
        })
    }
}

/// Build the tree bottom-up. Children always come after their parent, so popping slots
/// from the back sees every child before its parent.
fn assemble(mut slots: Vec<Slot>) -> Vec<ProofNode> {
    let mut roots = Vec::new();
    while let Some(slot) = slots.pop() {
        let mut item = slot.item;
        children_mut(&mut item).reverse();
        match slot.parent {
            Some(parent) => children_mut(&mut slots[parent].item).push(item),
            None => roots.push(item),
        }
    }
    roots.reverse();
    roots
        .into_iter()
        .filter_map(|root| match root {
            ProofChild::Node(node) => Some(node),
            ProofChild::Case(_) => None,
        })
        .collect()
}

fn children_mut(item: &mut ProofChild) -> &mut Vec<ProofChild> {
    match item {
        ProofChild::Node(node) => &mut node.children,
        ProofChild::Case(case) => &mut case.steps,
    }
}

/// Split a line of tokens at `|`
fn split_cells(tokens: &[Token]) -> Vec<Vec<Token>> {
    tokens
        .split(|t| t.kind == TokenKind::Pipe)
        .map(|cell| cell.to_vec())
        .collect()
}

/// Cell text with tokens separated by single spaces
fn single_spaced(cell: &[Token]) -> String {
    cell.iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

fn truth_value(cell: &[Token], row_start: &Token) -> ParseResult<String> {
    match cell {
        [token] if matches!(token.text.as_str(), "T" | "t") => Ok("T".to_string()),
        [token] if matches!(token.text.as_str(), "F" | "f") => Ok("F".to_string()),
        [token, ..] => Err(ParserError::new(
            format!("Expected truth value T or F, found '{}'", token.text),
            token,
        )),
        [] => Err(ParserError::new("Empty cell in truth table row", row_start)),
    }
}
