//! Truth tables, equivalence chains, proof trees and inference rules

use super::expressions::{BinaryOperator, Expr};
use super::Location;
use serde::Serialize;

/// Headers are the display text of each column; cells are normalized to `T`/`F`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TruthTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub location: Location,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChainKind {
    Equiv,
    Argue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquivChain {
    pub kind: ChainKind,
    pub steps: Vec<EquivStep>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquivStep {
    /// Connective written at the start of the line (`<=>`, `=>`, `=`), if any
    pub relation: Option<BinaryOperator>,
    pub expression: Expr,
    pub justification: Option<String>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProofTree {
    pub nodes: Vec<ProofNode>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProofNode {
    /// `None` for an elided step (`...`)
    pub expression: Option<Expr>,
    pub justification: Option<String>,
    /// Assumption label `[n]`
    pub label: Option<u32>,
    /// The line was marked `::`, a premise beside the previous one
    pub is_sibling: bool,
    pub children: Vec<ProofChild>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ProofChild {
    Node(ProofNode),
    Case(CaseAnalysis),
}

impl ProofChild {
    pub fn location(&self) -> Location {
        match self {
            ProofChild::Node(node) => node.location,
            ProofChild::Case(case) => case.location,
        }
    }
}

/// `case <expr>:` with its nested steps
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseAnalysis {
    pub case_name: String,
    pub steps: Vec<ProofChild>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfruleBlock {
    pub premises: Vec<InfruleLine>,
    pub conclusion: InfruleLine,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfruleLine {
    pub expression: Expr,
    pub label: Option<String>,
    pub location: Location,
}
