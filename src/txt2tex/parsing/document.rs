//! Document items
//!
//! A document is a sequence of items, one per line or block. Sections, solutions and parts
//! are containers: each one parses items until a marker that closes it.
//!
//!     === Title ===       a section runs until the next section
//!     ** Solution 1 **    a solution runs until the next solution or section
//!     (a)                 a part runs until the next part, solution or section
//!
//! Containers never need an explicit end, so closing markers propagate outward: a section
//! marker inside a part closes the part, then the enclosing solution, then the section.

use super::error::ParseResult;
use super::Parser;
use crate::txt2tex::ast::{
    Contents, Item, LatexBlock, Location, PageBreak, Paragraph, Part, PureParagraph, Section,
    Solution,
};
use crate::txt2tex::token::TokenKind;

/// Which container is being filled, and so which markers end it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    Document,
    Section,
    Solution,
    Part,
}

impl Boundary {
    pub fn stops_at(&self, kind: TokenKind) -> bool {
        match self {
            Boundary::Document => false,
            Boundary::Section => kind == TokenKind::SectionMarker,
            Boundary::Solution => {
                matches!(kind, TokenKind::SectionMarker | TokenKind::SolutionMarker)
            }
            Boundary::Part => kind.is_structural_marker(),
        }
    }
}

impl Parser {
    /// Items up to the end of input or the first marker that closes `boundary`
    pub(super) fn parse_items(&mut self, boundary: Boundary) -> ParseResult<Vec<Item>> {
        let mut items = Vec::new();
        loop {
            self.skip_blank_lines();
            let kind = self.peek_kind();
            if kind == TokenKind::Eof || boundary.stops_at(kind) {
                break;
            }
            items.push(self.parse_item(boundary)?);
        }
        Ok(items)
    }

    fn parse_item(&mut self, boundary: Boundary) -> ParseResult<Item> {
        let item = match self.peek_kind() {
            TokenKind::SectionMarker => return self.parse_section(),
            TokenKind::SolutionMarker => return self.parse_solution(),
            TokenKind::PartLabel => return self.parse_part(),
            TokenKind::TextKeyword => {
                let (text, location) = self.parse_raw_block()?;
                Item::Paragraph(Paragraph { text, location })
            }
            TokenKind::PureTextKeyword => {
                let (text, location) = self.parse_raw_block()?;
                Item::PureParagraph(PureParagraph { text, location })
            }
            TokenKind::LatexKeyword => {
                let (latex, location) = self.parse_raw_block()?;
                Item::LatexBlock(LatexBlock { latex, location })
            }
            TokenKind::PageBreakKeyword => {
                let keyword = self.advance();
                Item::PageBreak(PageBreak {
                    location: Location::from(&keyword),
                })
            }
            TokenKind::ContentsKeyword => {
                let keyword = self.advance();
                Item::Contents(Contents {
                    location: Location::from(&keyword),
                })
            }
            TokenKind::TruthTableKeyword => Item::TruthTable(self.parse_truth_table()?),
            TokenKind::EquivKeyword | TokenKind::ArgueKeyword => {
                Item::EquivChain(self.parse_equiv_chain()?)
            }
            TokenKind::ProofKeyword => Item::ProofTree(self.parse_proof()?),
            TokenKind::InfruleKeyword => Item::InfruleBlock(self.parse_infrule()?),
            TokenKind::Axdef => Item::AxDef(self.parse_axdef()?),
            TokenKind::Schema => Item::Schema(self.parse_schema()?),
            TokenKind::Gendef => Item::GenDef(self.parse_gendef()?),
            TokenKind::Zed => Item::Zed(self.parse_zed()?),
            TokenKind::Syntax => Item::Syntax(self.parse_syntax()?),
            _ => self.parse_paragraph_item()?,
        };
        self.finish_line(boundary, &item)?;
        Ok(item)
    }

    /// Line items allowed both at the top level and inside `zed`: given types, free
    /// types, abbreviations and bare predicates or expressions
    pub(super) fn parse_paragraph_item(&mut self) -> ParseResult<Item> {
        match self.peek_kind() {
            TokenKind::Given => Ok(Item::GivenType(self.parse_given()?)),
            TokenKind::LBracket => self.parse_bracketed_paragraph(),
            TokenKind::Identifier if self.peek_nth(1).kind == TokenKind::FreeTypeDef => {
                Ok(Item::FreeType(self.parse_free_type()?))
            }
            TokenKind::Identifier if self.starts_abbreviation() => {
                Ok(Item::Abbreviation(self.parse_abbreviation(Vec::new())?))
            }
            _ => Ok(Item::Expr(self.parse_expression()?)),
        }
    }

    /// A line item must end its line, or stop right before a marker closing the container
    fn finish_line(&mut self, boundary: Boundary, item: &Item) -> ParseResult<()> {
        let kind = self.peek_kind();
        if kind == TokenKind::Newline {
            self.advance();
            return Ok(());
        }
        if kind == TokenKind::Eof || boundary.stops_at(kind) {
            return Ok(());
        }
        Err(self.error_here(format!("Expected end of line after {}", item.node_name())))
    }

    /// `TEXT:`, `PURETEXT:` or `LATEX:` followed by the text the lexer captured
    fn parse_raw_block(&mut self) -> ParseResult<(String, Location)> {
        let keyword = self.advance();
        let text = self.expect(TokenKind::Text, "text after block keyword")?;
        Ok((text.text, Location::from(&keyword)))
    }

    fn parse_section(&mut self) -> ParseResult<Item> {
        let marker = self.advance();
        let title = self.expect(TokenKind::Text, "section title after '==='")?;
        self.expect(TokenKind::SectionMarker, "closing '===' after section title")?;
        let items = self.parse_items(Boundary::Section)?;
        Ok(Item::Section(Section {
            title: title.text,
            items,
            location: Location::from(&marker),
        }))
    }

    fn parse_solution(&mut self) -> ParseResult<Item> {
        let marker = self.advance();
        let title = self.expect(TokenKind::Text, "solution title after '**'")?;
        self.expect(TokenKind::SolutionMarker, "closing '**' after solution title")?;
        let items = self.parse_items(Boundary::Solution)?;
        Ok(Item::Solution(Solution {
            title: title.text,
            items,
            location: Location::from(&marker),
        }))
    }

    /// `(a)` followed by content on the same line and the lines after it
    fn parse_part(&mut self) -> ParseResult<Item> {
        let label = self.advance();
        let items = self.parse_items(Boundary::Part)?;
        Ok(Item::Part(Part {
            label: label
                .text
                .trim_start_matches('(')
                .trim_end_matches(')')
                .to_string(),
            items,
            location: Location::from(&label),
        }))
    }
}
