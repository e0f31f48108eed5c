//! Z paragraphs: given types, free types, abbreviations and the `end`-terminated blocks
//!
//! Boxed paragraphs share one body grammar:
//!
//!     axdef [X]               schema Name [X]             gendef [X]
//!       f : X -> N              a, b : N                    f : X -> X
//!     where                   where                       where
//!       forall x : X | ...      a < b                       ...
//!     end                     end                         end
//!
//! Declarations and predicates are separated by newlines or by `;` on one line.

use super::error::{ParseResult, ParserError};
use super::expressions::precedence;
use super::Parser;
use crate::txt2tex::ast::{
    Abbreviation, AxDef, Declaration, Expr, FreeBranch, FreeType, GenDef, GivenType, Item,
    Location, Schema, Syntax, Zed,
};
use crate::txt2tex::token::TokenKind;

/// Shared shape of axdef, schema and gendef
struct BoxBody {
    declarations: Vec<Declaration>,
    predicates: Vec<Expr>,
}

impl Parser {
    /// `given A, B, C`
    pub(super) fn parse_given(&mut self) -> ParseResult<GivenType> {
        let keyword = self.advance();
        let mut names = vec![self.expect(TokenKind::Identifier, "type name after 'given'")?.text];
        while self.eat(TokenKind::Comma).is_some() {
            names.push(self.expect(TokenKind::Identifier, "type name after ','")?.text);
        }
        Ok(GivenType {
            names,
            location: Location::from(&keyword),
        })
    }

    /// `[A, B]` given types, or `[X] Name == E` a generic abbreviation
    pub(super) fn parse_bracketed_paragraph(&mut self) -> ParseResult<Item> {
        let open = self.peek().clone();
        let names = self.parse_generic_parameters()?;
        if self.check(TokenKind::Identifier) {
            let mut abbreviation = self.parse_abbreviation(names)?;
            abbreviation.location = Location::from(&open);
            return Ok(Item::Abbreviation(abbreviation));
        }
        Ok(Item::GivenType(GivenType {
            names,
            location: Location::from(&open),
        }))
    }

    /// `Name == E` or `Name[X] == E`, at the name
    pub(super) fn starts_abbreviation(&self) -> bool {
        match self.peek_nth(1).kind {
            TokenKind::Abbrev => true,
            TokenKind::LBracket => {
                let mut n = 2;
                loop {
                    if self.peek_nth(n).kind != TokenKind::Identifier {
                        return false;
                    }
                    match self.peek_nth(n + 1).kind {
                        TokenKind::Comma => n += 2,
                        TokenKind::RBracket => {
                            return self.peek_nth(n + 2).kind == TokenKind::Abbrev
                        }
                        _ => return false,
                    }
                }
            }
            _ => false,
        }
    }

    /// `Name == E`, with generics given before the name or written after it
    pub(super) fn parse_abbreviation(
        &mut self,
        mut generics: Vec<String>,
    ) -> ParseResult<Abbreviation> {
        let name = self.expect(TokenKind::Identifier, "abbreviation name")?;
        if self.check(TokenKind::LBracket) {
            generics.extend(self.parse_generic_parameters()?);
        }
        self.expect(TokenKind::Abbrev, "'==' in abbreviation")?;
        self.skip_line_breaks_after_operator();
        let expression = self.parse_expression()?;
        let location = Location::from(&name);
        Ok(Abbreviation {
            name: name.text,
            generics,
            expression,
            location,
        })
    }

    /// `[X, Y]`
    fn parse_generic_parameters(&mut self) -> ParseResult<Vec<String>> {
        self.expect(TokenKind::LBracket, "'['")?;
        self.grouped(TokenKind::LBracket, |p| {
            let mut names = vec![p.expect(TokenKind::Identifier, "generic parameter name")?.text];
            while p.eat(TokenKind::Comma).is_some() {
                names.push(p.expect(TokenKind::Identifier, "generic parameter name")?.text);
            }
            p.expect(TokenKind::RBracket, "']' to close generic parameters")?;
            Ok(names)
        })
    }

    /// `Name ::= branch | branch<T> | ...`; branches may continue on lines starting with `|`
    pub(super) fn parse_free_type(&mut self) -> ParseResult<FreeType> {
        let name = self.expect(TokenKind::Identifier, "free type name")?;
        self.expect(TokenKind::FreeTypeDef, "'::=' in free type definition")?;
        self.skip_line_breaks_after_operator();
        self.eat(TokenKind::Pipe);

        let mut branches = Vec::new();
        loop {
            if !self.check(TokenKind::Identifier) {
                if branches.is_empty() {
                    return Err(self.error_here(format!(
                        "Expected at least one branch in free type '{}'",
                        name.text
                    )));
                }
                return Err(self.error_here("Expected constructor name after '|'"));
            }
            branches.push(self.parse_free_branch()?);

            self.skip_line_breaks_before(&[TokenKind::Pipe]);
            if self.eat(TokenKind::Pipe).is_none() {
                break;
            }
            self.skip_line_breaks_after_operator();
        }

        let location = Location::from(&name);
        Ok(FreeType {
            name: name.text,
            branches,
            location,
        })
    }

    fn parse_free_branch(&mut self) -> ParseResult<FreeBranch> {
        let name = self.advance();
        let parameter = match self.peek_kind() {
            TokenKind::LAngle => {
                self.advance();
                Some(self.grouped(TokenKind::LAngle, |p| {
                    let parameter = p.parse_expression()?;
                    p.expect(TokenKind::RAngle, "'>' to close constructor parameter")?;
                    Ok(parameter)
                })?)
            }
            TokenKind::LessThan => {
                self.advance();
                let parameter = self.parse_expr_bp(precedence::RELATION)?;
                if self.eat(TokenKind::GreaterThan).is_none()
                    && self.eat(TokenKind::RAngle).is_none()
                {
                    return Err(self.error_here("Expected '>' to close constructor parameter"));
                }
                Some(parameter)
            }
            _ => None,
        };
        let location = Location::from(&name);
        Ok(FreeBranch {
            name: name.text,
            parameter,
            location,
        })
    }

    pub(super) fn parse_axdef(&mut self) -> ParseResult<AxDef> {
        let keyword = self.advance();
        let generics = self.parse_optional_generics()?;
        let body = self.parse_box_body("axdef")?;
        Ok(AxDef {
            generics,
            declarations: body.declarations,
            predicates: body.predicates,
            location: Location::from(&keyword),
        })
    }

    pub(super) fn parse_schema(&mut self) -> ParseResult<Schema> {
        let keyword = self.advance();
        let name = self.eat(TokenKind::Identifier).map(|t| t.text);
        let generics = self.parse_optional_generics()?;
        let body = self.parse_box_body("schema")?;
        Ok(Schema {
            name,
            generics,
            declarations: body.declarations,
            predicates: body.predicates,
            location: Location::from(&keyword),
        })
    }

    pub(super) fn parse_gendef(&mut self) -> ParseResult<GenDef> {
        let keyword = self.advance();
        let generics = self.parse_optional_generics()?;
        let body = self.parse_box_body("gendef")?;
        Ok(GenDef {
            generics,
            declarations: body.declarations,
            predicates: body.predicates,
            location: Location::from(&keyword),
        })
    }

    fn parse_optional_generics(&mut self) -> ParseResult<Vec<String>> {
        if self.check(TokenKind::LBracket) {
            self.parse_generic_parameters()
        } else {
            Ok(Vec::new())
        }
    }

    fn parse_box_body(&mut self, block: &str) -> ParseResult<BoxBody> {
        let mut declarations = Vec::new();
        loop {
            self.skip_blank_lines();
            match self.peek_kind() {
                TokenKind::Where | TokenKind::End => break,
                TokenKind::Eof => return Err(self.unclosed_block(block)),
                _ => {}
            }
            declarations.push(self.parse_declaration()?);
            self.end_of_entry("declaration")?;
        }

        let mut predicates = Vec::new();
        if self.eat(TokenKind::Where).is_some() {
            loop {
                self.skip_blank_lines();
                match self.peek_kind() {
                    TokenKind::End => break,
                    TokenKind::Eof => return Err(self.unclosed_block(block)),
                    _ => {}
                }
                predicates.push(self.parse_expression()?);
                self.end_of_entry("predicate")?;
            }
        }

        self.expect(TokenKind::End, &format!("'end' to close {} block", block))?;
        Ok(BoxBody {
            declarations,
            predicates,
        })
    }

    /// `x, y : T`
    fn parse_declaration(&mut self) -> ParseResult<Declaration> {
        let first = self.expect(TokenKind::Identifier, "declared name")?;
        let location = Location::from(&first);
        let mut variables = vec![first.text];
        while self.eat(TokenKind::Comma).is_some() {
            variables.push(self.expect(TokenKind::Identifier, "declared name")?.text);
        }
        self.expect(TokenKind::Colon, "':' in declaration")?;
        let type_expr = self.parse_expression()?;
        Ok(Declaration {
            variables,
            type_expr,
            location,
        })
    }

    /// After one entry of a block: `;`, a line break, or the keyword that ends the section
    fn end_of_entry(&mut self, entry: &str) -> ParseResult<()> {
        match self.peek_kind() {
            TokenKind::Semicolon | TokenKind::Newline => {
                self.advance();
                Ok(())
            }
            TokenKind::Where | TokenKind::End | TokenKind::Eof => Ok(()),
            _ => Err(self.error_here(format!("Expected ';' or end of line after {}", entry))),
        }
    }

    fn unclosed_block(&self, block: &str) -> ParserError {
        self.error_here(format!("Expected 'end' to close {} block", block))
    }

    /// `zed` ... `end`
    pub(super) fn parse_zed(&mut self) -> ParseResult<Zed> {
        let keyword = self.advance();
        let mut items = Vec::new();
        loop {
            self.skip_blank_lines();
            match self.peek_kind() {
                TokenKind::End => break,
                TokenKind::Eof => return Err(self.unclosed_block("zed")),
                _ => {}
            }
            items.push(self.parse_paragraph_item()?);
            self.end_of_entry("zed item")?;
        }
        self.advance();
        Ok(Zed {
            items,
            location: Location::from(&keyword),
        })
    }

    /// `syntax` ... `end`, free types only
    pub(super) fn parse_syntax(&mut self) -> ParseResult<Syntax> {
        let keyword = self.advance();
        let mut definitions = Vec::new();
        loop {
            self.skip_blank_lines();
            match self.peek_kind() {
                TokenKind::End => break,
                TokenKind::Eof => return Err(self.unclosed_block("syntax")),
                _ => {}
            }
            if !self.starts_free_type() {
                return Err(self.error_here("Expected free type definition in syntax block"));
            }
            definitions.push(self.parse_free_type()?);
            self.end_of_entry("free type definition")?;
        }
        self.advance();
        Ok(Syntax {
            definitions,
            location: Location::from(&keyword),
        })
    }

    fn starts_free_type(&self) -> bool {
        self.check(TokenKind::Identifier) && self.peek_nth(1).kind == TokenKind::FreeTypeDef
    }
}
