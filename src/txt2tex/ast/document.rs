//! Document structure and prose nodes

use super::declarations::{Abbreviation, AxDef, FreeType, GenDef, GivenType, Schema, Syntax, Zed};
use super::expressions::Expr;
use super::proofs::{EquivChain, InfruleBlock, ProofTree, TruthTable};
use super::Location;
use serde::Serialize;

/// An ordered list of top-level items
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub items: Vec<Item>,
}

/// Anything that can stand on its own at the top level of a document or inside a section,
/// solution or part
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Item {
    Expr(Expr),
    Section(Section),
    Solution(Solution),
    Part(Part),
    GivenType(GivenType),
    FreeType(FreeType),
    Abbreviation(Abbreviation),
    AxDef(AxDef),
    Schema(Schema),
    GenDef(GenDef),
    Zed(Zed),
    Syntax(Syntax),
    TruthTable(TruthTable),
    EquivChain(EquivChain),
    ProofTree(ProofTree),
    InfruleBlock(InfruleBlock),
    Paragraph(Paragraph),
    PureParagraph(PureParagraph),
    LatexBlock(LatexBlock),
    PageBreak(PageBreak),
    Contents(Contents),
}

impl Item {
    pub fn location(&self) -> Location {
        match self {
            Item::Expr(e) => e.location(),
            Item::Section(s) => s.location,
            Item::Solution(s) => s.location,
            Item::Part(p) => p.location,
            Item::GivenType(g) => g.location,
            Item::FreeType(f) => f.location,
            Item::Abbreviation(a) => a.location,
            Item::AxDef(a) => a.location,
            Item::Schema(s) => s.location,
            Item::GenDef(g) => g.location,
            Item::Zed(z) => z.location,
            Item::Syntax(s) => s.location,
            Item::TruthTable(t) => t.location,
            Item::EquivChain(e) => e.location,
            Item::ProofTree(p) => p.location,
            Item::InfruleBlock(i) => i.location,
            Item::Paragraph(p) => p.location,
            Item::PureParagraph(p) => p.location,
            Item::LatexBlock(l) => l.location,
            Item::PageBreak(p) => p.location,
            Item::Contents(c) => c.location,
        }
    }

    pub fn node_name(&self) -> &'static str {
        match self {
            Item::Expr(e) => e.node_name(),
            Item::Section(_) => "Section",
            Item::Solution(_) => "Solution",
            Item::Part(_) => "Part",
            Item::GivenType(_) => "GivenType",
            Item::FreeType(_) => "FreeType",
            Item::Abbreviation(_) => "Abbreviation",
            Item::AxDef(_) => "AxDef",
            Item::Schema(_) => "Schema",
            Item::GenDef(_) => "GenDef",
            Item::Zed(_) => "Zed",
            Item::Syntax(_) => "Syntax",
            Item::TruthTable(_) => "TruthTable",
            Item::EquivChain(_) => "EquivChain",
            Item::ProofTree(_) => "ProofTree",
            Item::InfruleBlock(_) => "InfruleBlock",
            Item::Paragraph(_) => "Paragraph",
            Item::PureParagraph(_) => "PureParagraph",
            Item::LatexBlock(_) => "LatexBlock",
            Item::PageBreak(_) => "PageBreak",
            Item::Contents(_) => "Contents",
        }
    }
}

/// `=== Title ===` and everything up to the next section
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub title: String,
    pub items: Vec<Item>,
    pub location: Location,
}

/// `** Solution N **` and everything up to the next solution or section
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    pub title: String,
    pub items: Vec<Item>,
    pub location: Location,
}

/// `(a)` and everything up to the next part label, solution or section
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Part {
    /// The letter, without parentheses
    pub label: String,
    pub items: Vec<Item>,
    pub location: Location,
}

/// TEXT: prose; inline formulas inside it are found later, by the generator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paragraph {
    pub text: String,
    pub location: Location,
}

/// PURETEXT: prose that must never be scanned for formulas
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PureParagraph {
    pub text: String,
    pub location: Location,
}

/// LATEX: passthrough, stored verbatim
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LatexBlock {
    pub latex: String,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageBreak {
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contents {
    pub location: Location,
}
