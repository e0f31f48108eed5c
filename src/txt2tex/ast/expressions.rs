//! Expression nodes
//!
//! One enum covers logic, sets, relations, functions, sequences and arithmetic. Operators
//! that only differ in spelling share a variant (`land` and `and` are both
//! `BinaryOperator::And`), so consumers never look at source text to tell them apart.

use super::Location;
use crate::txt2tex::token::TokenKind;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Expr {
    Identifier {
        name: String,
        location: Location,
    },
    Number {
        value: String,
        location: Location,
    },
    BinaryOp {
        op: BinaryOperator,
        left: Box<Expr>,
        right: Box<Expr>,
        /// The source wrapped exactly this operation in parentheses
        explicit_parens: bool,
        location: Location,
    },
    UnaryOp {
        op: UnaryOperator,
        operand: Box<Expr>,
        location: Location,
    },
    /// `forall`, `exists`, `exists1` and `mu`. One binding group per node; `;` separated
    /// groups are nested quantifiers.
    Quantifier {
        kind: QuantifierKind,
        variables: Vec<String>,
        /// Variables were written as one parenthesized tuple `(a, b)`
        tuple_pattern: bool,
        domain: Option<Box<Expr>>,
        body: Box<Expr>,
        /// `mu x : T | P . E` image expression
        expression: Option<Box<Expr>>,
        location: Location,
    },
    Lambda {
        variables: Vec<String>,
        tuple_pattern: bool,
        domain: Option<Box<Expr>>,
        body: Box<Expr>,
        location: Location,
    },
    SetLiteral {
        elements: Vec<Expr>,
        location: Location,
    },
    /// `{ x : T | P }`, `{ x : T | P . E }`, `{ x : T . E }`
    SetComprehension {
        bindings: Vec<Binding>,
        predicate: Option<Box<Expr>>,
        expression: Option<Box<Expr>>,
        location: Location,
    },
    SequenceLiteral {
        elements: Vec<Expr>,
        location: Location,
    },
    BagLiteral {
        elements: Vec<Expr>,
        location: Location,
    },
    Tuple {
        elements: Vec<Expr>,
        location: Location,
    },
    /// `e.1`, `e.name`
    TupleProjection {
        base: Box<Expr>,
        field: String,
        location: Location,
    },
    /// `f(a, b)` and juxtaposition `f x`
    FunctionApp {
        function: Box<Expr>,
        args: Vec<Expr>,
        location: Location,
    },
    FunctionType {
        arrow: ArrowKind,
        domain: Box<Expr>,
        range: Box<Expr>,
        location: Location,
    },
    /// `R(| S |)`
    RelationalImage {
        relation: Box<Expr>,
        set: Box<Expr>,
        location: Location,
    },
    /// `T[X, Y]`
    GenericInstantiation {
        base: Box<Expr>,
        parameters: Vec<Expr>,
        location: Location,
    },
    /// `a..b`
    Range {
        start: Box<Expr>,
        end: Box<Expr>,
        location: Location,
    },
    Conditional {
        condition: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Box<Expr>,
        location: Location,
    },
    /// `x^2`
    Superscript {
        base: Box<Expr>,
        exponent: Box<Expr>,
        location: Location,
    },
}

impl Expr {
    pub fn location(&self) -> Location {
        match self {
            Expr::Identifier { location, .. }
            | Expr::Number { location, .. }
            | Expr::BinaryOp { location, .. }
            | Expr::UnaryOp { location, .. }
            | Expr::Quantifier { location, .. }
            | Expr::Lambda { location, .. }
            | Expr::SetLiteral { location, .. }
            | Expr::SetComprehension { location, .. }
            | Expr::SequenceLiteral { location, .. }
            | Expr::BagLiteral { location, .. }
            | Expr::Tuple { location, .. }
            | Expr::TupleProjection { location, .. }
            | Expr::FunctionApp { location, .. }
            | Expr::FunctionType { location, .. }
            | Expr::RelationalImage { location, .. }
            | Expr::GenericInstantiation { location, .. }
            | Expr::Range { location, .. }
            | Expr::Conditional { location, .. }
            | Expr::Superscript { location, .. } => *location,
        }
    }

    /// Variant name, as used by the tag format and assertion messages
    pub fn node_name(&self) -> &'static str {
        match self {
            Expr::Identifier { .. } => "Identifier",
            Expr::Number { .. } => "Number",
            Expr::BinaryOp { .. } => "BinaryOp",
            Expr::UnaryOp { .. } => "UnaryOp",
            Expr::Quantifier { .. } => "Quantifier",
            Expr::Lambda { .. } => "Lambda",
            Expr::SetLiteral { .. } => "SetLiteral",
            Expr::SetComprehension { .. } => "SetComprehension",
            Expr::SequenceLiteral { .. } => "SequenceLiteral",
            Expr::BagLiteral { .. } => "BagLiteral",
            Expr::Tuple { .. } => "Tuple",
            Expr::TupleProjection { .. } => "TupleProjection",
            Expr::FunctionApp { .. } => "FunctionApp",
            Expr::FunctionType { .. } => "FunctionType",
            Expr::RelationalImage { .. } => "RelationalImage",
            Expr::GenericInstantiation { .. } => "GenericInstantiation",
            Expr::Range { .. } => "Range",
            Expr::Conditional { .. } => "Conditional",
            Expr::Superscript { .. } => "Superscript",
        }
    }
}

/// One `vars : Domain` group of a set comprehension
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Binding {
    pub variables: Vec<String>,
    pub domain: Option<Expr>,
    pub location: Location,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum QuantifierKind {
    Forall,
    Exists,
    Exists1,
    Mu,
}

impl QuantifierKind {
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Forall => Some(Self::Forall),
            TokenKind::Exists => Some(Self::Exists),
            TokenKind::Exists1 => Some(Self::Exists1),
            TokenKind::Mu => Some(Self::Mu),
            _ => None,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Forall => "forall",
            Self::Exists => "exists",
            Self::Exists1 => "exists1",
            Self::Mu => "mu",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BinaryOperator {
    Iff,
    Implies,
    Or,
    And,
    Equals,
    NotEquals,
    Elem,
    NotIn,
    LessThan,
    LessEq,
    GreaterThan,
    GreaterEq,
    Subset,
    ProperSubset,
    Relation,
    Maplet,
    Union,
    Intersect,
    Override,
    BagUnion,
    DomRes,
    RanRes,
    DomSub,
    RanSub,
    Filter,
    Plus,
    Minus,
    Setminus,
    Concat,
    Times,
    Div,
    Mod,
    Compose,
    Cross,
}

impl BinaryOperator {
    /// Operator for an infix token kind. `;` maps to `Compose`; whether it is allowed in
    /// the current context is the parser's decision.
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        let op = match kind {
            TokenKind::Iff => Self::Iff,
            TokenKind::Implies => Self::Implies,
            TokenKind::Or => Self::Or,
            TokenKind::And => Self::And,
            TokenKind::Equals => Self::Equals,
            TokenKind::NotEquals => Self::NotEquals,
            TokenKind::Elem => Self::Elem,
            TokenKind::NotIn => Self::NotIn,
            TokenKind::LessThan => Self::LessThan,
            TokenKind::LessEq => Self::LessEq,
            TokenKind::GreaterThan => Self::GreaterThan,
            TokenKind::GreaterEq => Self::GreaterEq,
            TokenKind::Subset => Self::Subset,
            TokenKind::ProperSubset => Self::ProperSubset,
            TokenKind::Relation => Self::Relation,
            TokenKind::Maplet => Self::Maplet,
            TokenKind::Union => Self::Union,
            TokenKind::Intersect => Self::Intersect,
            TokenKind::Override => Self::Override,
            TokenKind::BagUnion => Self::BagUnion,
            TokenKind::DomRes => Self::DomRes,
            TokenKind::RanRes => Self::RanRes,
            TokenKind::DomSub => Self::DomSub,
            TokenKind::RanSub => Self::RanSub,
            TokenKind::Filter => Self::Filter,
            TokenKind::Plus => Self::Plus,
            TokenKind::Minus => Self::Minus,
            TokenKind::Setminus => Self::Setminus,
            TokenKind::Cat => Self::Concat,
            TokenKind::Star => Self::Times,
            TokenKind::Div => Self::Div,
            TokenKind::Mod => Self::Mod,
            TokenKind::Compose | TokenKind::Semicolon => Self::Compose,
            TokenKind::Cross => Self::Cross,
            _ => return None,
        };
        Some(op)
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Iff => "⇔",
            Self::Implies => "⇒",
            Self::Or => "∨",
            Self::And => "∧",
            Self::Equals => "=",
            Self::NotEquals => "≠",
            Self::Elem => "∈",
            Self::NotIn => "∉",
            Self::LessThan => "<",
            Self::LessEq => "≤",
            Self::GreaterThan => ">",
            Self::GreaterEq => "≥",
            Self::Subset => "⊆",
            Self::ProperSubset => "⊂",
            Self::Relation => "↔",
            Self::Maplet => "↦",
            Self::Union => "∪",
            Self::Intersect => "∩",
            Self::Override => "⊕",
            Self::BagUnion => "⊎",
            Self::DomRes => "◁",
            Self::RanRes => "▷",
            Self::DomSub => "⩤",
            Self::RanSub => "⩥",
            Self::Filter => "↾",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Setminus => "∖",
            Self::Concat => "⌢",
            Self::Times => "*",
            Self::Div => "div",
            Self::Mod => "mod",
            Self::Compose => "⨾",
            Self::Cross => "×",
        }
    }

    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            Self::Equals
                | Self::NotEquals
                | Self::Elem
                | Self::NotIn
                | Self::LessThan
                | Self::LessEq
                | Self::GreaterThan
                | Self::GreaterEq
                | Self::Subset
                | Self::ProperSubset
        )
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum UnaryOperator {
    Not,
    Negate,
    Cardinality,
    PowerSet,
    PowerSet1,
    FiniteSet,
    FiniteSet1,
    Dom,
    Ran,
    Inv,
    Id,
    BigUnion,
    BigIntersect,
    Seq,
    Seq1,
    ISeq,
    Bag,
    /// Postfix `~`
    Inverse,
    /// Postfix `+`
    TransitiveClosure,
    /// Postfix `*`
    ReflexiveClosure,
}

impl UnaryOperator {
    /// Prefix operator for a token kind
    pub fn prefix(kind: TokenKind) -> Option<Self> {
        let op = match kind {
            TokenKind::Not => Self::Not,
            TokenKind::Minus => Self::Negate,
            TokenKind::Hash => Self::Cardinality,
            TokenKind::Power => Self::PowerSet,
            TokenKind::Power1 => Self::PowerSet1,
            TokenKind::Finset => Self::FiniteSet,
            TokenKind::Finset1 => Self::FiniteSet1,
            TokenKind::Dom => Self::Dom,
            TokenKind::Ran => Self::Ran,
            TokenKind::Inv => Self::Inv,
            TokenKind::Id => Self::Id,
            TokenKind::BigUnion => Self::BigUnion,
            TokenKind::BigIntersect => Self::BigIntersect,
            TokenKind::Seq => Self::Seq,
            TokenKind::Seq1 => Self::Seq1,
            TokenKind::ISeq => Self::ISeq,
            TokenKind::Bag => Self::Bag,
            _ => return None,
        };
        Some(op)
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Not => "¬",
            Self::Negate => "-",
            Self::Cardinality => "#",
            Self::PowerSet => "ℙ",
            Self::PowerSet1 => "ℙ₁",
            Self::FiniteSet => "𝔽",
            Self::FiniteSet1 => "𝔽₁",
            Self::Dom => "dom",
            Self::Ran => "ran",
            Self::Inv => "inv",
            Self::Id => "id",
            Self::BigUnion => "⋃",
            Self::BigIntersect => "⋂",
            Self::Seq => "seq",
            Self::Seq1 => "seq₁",
            Self::ISeq => "iseq",
            Self::Bag => "bag",
            Self::Inverse => "∼",
            Self::TransitiveClosure => "⁺",
            Self::ReflexiveClosure => "*",
        }
    }

    pub fn is_postfix(&self) -> bool {
        matches!(
            self,
            Self::Inverse | Self::TransitiveClosure | Self::ReflexiveClosure
        )
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// The function arrows of Z
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ArrowKind {
    TotalFunction,
    PartialFunction,
    TotalInjection,
    PartialInjection,
    TotalSurjection,
    PartialSurjection,
    Bijection,
    FiniteFunction,
    PartialBijection,
}

impl ArrowKind {
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        let arrow = match kind {
            TokenKind::TotalFn => Self::TotalFunction,
            TokenKind::PartialFn => Self::PartialFunction,
            TokenKind::TotalInj => Self::TotalInjection,
            TokenKind::PartialInj => Self::PartialInjection,
            TokenKind::TotalSurj => Self::TotalSurjection,
            TokenKind::PartialSurj => Self::PartialSurjection,
            TokenKind::Bijection => Self::Bijection,
            TokenKind::FiniteFn => Self::FiniteFunction,
            TokenKind::PartialBijection => Self::PartialBijection,
            _ => return None,
        };
        Some(arrow)
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::TotalFunction => "→",
            Self::PartialFunction => "⇸",
            Self::TotalInjection => "↣",
            Self::PartialInjection => "⤔",
            Self::TotalSurjection => "↠",
            Self::PartialSurjection => "⤀",
            Self::Bijection => "⤖",
            Self::FiniteFunction => "⇻",
            Self::PartialBijection => "⤕",
        }
    }
}

impl fmt::Display for ArrowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
