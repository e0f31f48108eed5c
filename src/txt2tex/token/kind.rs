//! Token kinds for the txt2tex notation
//!
//! This enum is also the raw lexer: the logos derive compiles every `#[token]` and
//! `#[regex]` below into a single DFA. Logos always prefers the longest match at the current
//! position, which is what keeps `>->>` from splitting into `>->` + `>`, `|->` from splitting
//! into `|` + `->`, `<<|` from splitting into `<` + `<|`, and so on. ASCII and Unicode
//! spellings of one operator map to one variant so the parser never sees the difference.
//!
//! Variants without attributes are synthetic. The lexing transformations derive them from
//! context (see [crate::txt2tex::lexing::transformations]).

use logos::Logos;
use serde::Serialize;
use std::fmt;

/// All possible token kinds in the txt2tex notation
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[logos(skip r"[ \t\r\f]+")]
pub enum TokenKind {
    // ---------------------------------------------------------------------
    // Document structure
    // ---------------------------------------------------------------------
    #[token("===")]
    SectionMarker,
    #[token("**")]
    SolutionMarker,
    /// `(a)` at the start of a line
    PartLabel,
    #[token("TEXT:")]
    TextKeyword,
    #[token("PURETEXT:")]
    PureTextKeyword,
    #[token("LATEX:")]
    LatexKeyword,
    #[token("PROOF:")]
    ProofKeyword,
    #[token("EQUIV:")]
    EquivKeyword,
    #[token("ARGUE:")]
    ArgueKeyword,
    #[token("INFRULE:")]
    InfruleKeyword,
    #[token("TRUTH TABLE:")]
    #[token("TRUTH-TABLE:")]
    TruthTableKeyword,
    #[token("PAGEBREAK:")]
    PageBreakKeyword,
    #[token("CONTENTS:")]
    ContentsKeyword,
    /// Raw text captured after TEXT:/PURETEXT:/LATEX: and inside section/solution titles
    Text,
    #[regex(r"---+")]
    InfruleSeparator,

    // ---------------------------------------------------------------------
    // Z keywords
    // ---------------------------------------------------------------------
    #[token("given")]
    Given,
    #[token("axdef")]
    Axdef,
    #[token("schema")]
    Schema,
    #[token("gendef")]
    Gendef,
    #[token("zed")]
    Zed,
    #[token("syntax")]
    Syntax,
    #[token("where")]
    Where,
    #[token("end")]
    End,

    // ---------------------------------------------------------------------
    // Conditionals and proof cases
    // ---------------------------------------------------------------------
    #[token("if")]
    If,
    #[token("then")]
    Then,
    #[token("else")]
    Else,
    #[token("otherwise")]
    Otherwise,
    #[token("case")]
    Case,

    // ---------------------------------------------------------------------
    // Logic
    // ---------------------------------------------------------------------
    #[token("and")]
    #[token("land")]
    #[token("∧")]
    And,
    #[token("or")]
    #[token("lor")]
    #[token("∨")]
    Or,
    #[token("not")]
    #[token("lnot")]
    #[token("¬")]
    Not,
    #[token("=>")]
    #[token("⇒")]
    Implies,
    #[token("<=>")]
    #[token("⇔")]
    Iff,

    // ---------------------------------------------------------------------
    // Quantifiers and binders
    // ---------------------------------------------------------------------
    #[token("forall")]
    #[token("∀")]
    Forall,
    #[token("exists")]
    #[token("∃")]
    Exists,
    #[token("exists1")]
    #[token("∃1")]
    Exists1,
    #[token("mu")]
    #[token("μ")]
    Mu,
    #[token("lambda")]
    #[token("λ")]
    Lambda,

    // ---------------------------------------------------------------------
    // Sets
    // ---------------------------------------------------------------------
    #[token("elem")]
    #[token("in")]
    #[token("∈")]
    Elem,
    #[token("notin")]
    #[token("∉")]
    NotIn,
    #[token("subset")]
    #[token("subseteq")]
    #[token("⊆")]
    Subset,
    #[token("psubset")]
    #[token("⊂")]
    ProperSubset,
    #[token("union")]
    #[token("∪")]
    Union,
    #[token("intersect")]
    #[token("∩")]
    Intersect,
    #[token("\\")]
    #[token("setminus")]
    #[token("∖")]
    Setminus,
    #[token("#")]
    Hash,
    #[token("cross")]
    #[token("×")]
    Cross,
    #[token("P", priority = 3)]
    #[token("ℙ")]
    Power,
    #[token("P1")]
    #[token("ℙ1")]
    Power1,
    #[token("F", priority = 3)]
    #[token("𝔽")]
    Finset,
    #[token("F1")]
    #[token("𝔽1")]
    Finset1,
    #[token("bigcup")]
    #[token("⋃")]
    BigUnion,
    #[token("bigcap")]
    #[token("⋂")]
    BigIntersect,

    // ---------------------------------------------------------------------
    // Relations
    // ---------------------------------------------------------------------
    #[token("|->")]
    #[token("↦")]
    Maplet,
    #[token("<->")]
    #[token("↔")]
    Relation,
    #[token("<|")]
    #[token("◁")]
    DomRes,
    #[token("|>")]
    #[token("▷")]
    RanRes,
    #[token("<<|")]
    #[token("⩤")]
    DomSub,
    #[token("|>>")]
    #[token("⩥")]
    RanSub,
    #[token("o9")]
    #[token("comp")]
    #[token("⨾")]
    Compose,
    #[token("~")]
    #[token("∼")]
    Tilde,
    #[token("++")]
    #[token("⊕")]
    Override,
    #[token("dom")]
    Dom,
    #[token("ran")]
    Ran,
    #[token("inv")]
    Inv,
    #[token("id")]
    Id,

    // ---------------------------------------------------------------------
    // Sequences and bags
    // ---------------------------------------------------------------------
    #[token("⟨")]
    LAngle,
    #[token("⟩")]
    RAngle,
    #[token("seq")]
    Seq,
    #[token("seq1")]
    Seq1,
    #[token("iseq")]
    ISeq,
    /// Concatenation: `⌢`, or `^` preceded by whitespace
    #[token("⌢")]
    Cat,
    /// Exponent: `^` glued to its base
    #[token("^")]
    Caret,
    #[token("filter")]
    #[token("↾")]
    Filter,
    #[token("[[")]
    #[token("⟦")]
    BagOpen,
    #[token("]]")]
    #[token("⟧")]
    BagClose,
    #[token("bag")]
    Bag,
    #[token("bag_union")]
    #[token("⊎")]
    BagUnion,

    // ---------------------------------------------------------------------
    // Function arrows
    // ---------------------------------------------------------------------
    #[token("->")]
    #[token("→")]
    TotalFn,
    #[token("+->")]
    #[token("⇸")]
    PartialFn,
    #[token(">->")]
    #[token("↣")]
    TotalInj,
    #[token(">+>")]
    #[token("⤔")]
    PartialInj,
    #[token("-->>")]
    #[token("↠")]
    TotalSurj,
    #[token("+->>")]
    #[token("⤀")]
    PartialSurj,
    #[token(">->>")]
    #[token("⤖")]
    Bijection,
    #[token("77->")]
    #[token("⇻")]
    FiniteFn,
    #[token(">7->")]
    #[token("⤕")]
    PartialBijection,

    // ---------------------------------------------------------------------
    // Comparison and arithmetic
    // ---------------------------------------------------------------------
    #[token("=")]
    Equals,
    #[token("!=")]
    #[token("≠")]
    NotEquals,
    #[token("<")]
    LessThan,
    #[token("<=")]
    #[token("≤")]
    LessEq,
    #[token(">")]
    GreaterThan,
    #[token(">=")]
    #[token("≥")]
    GreaterEq,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("div")]
    Div,
    #[token("mod")]
    Mod,
    #[token("..")]
    DotDot,
    #[token(".")]
    Dot,
    #[token("...")]
    Ellipsis,

    // ---------------------------------------------------------------------
    // Z structure
    // ---------------------------------------------------------------------
    #[token("::=")]
    FreeTypeDef,
    #[token("==")]
    Abbrev,
    /// Sibling premise marker in proof trees
    #[token("::")]
    DoubleColon,

    // ---------------------------------------------------------------------
    // Grouping and punctuation
    // ---------------------------------------------------------------------
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("(|")]
    #[token("⦇")]
    LImage,
    #[token("|)")]
    #[token("⦈")]
    RImage,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,
    #[token("|")]
    Pipe,

    // ---------------------------------------------------------------------
    // Atoms
    // ---------------------------------------------------------------------
    #[regex(r"[A-Za-z][A-Za-z0-9_]*'*")]
    #[regex(r"[0-9]+_[A-Za-z0-9_]*'*")]
    Identifier,
    #[regex(r"[0-9]+")]
    Number,

    // ---------------------------------------------------------------------
    // Layout
    // ---------------------------------------------------------------------
    #[token("\n")]
    Newline,
    /// `\` with nothing but whitespace after it on its line. Lexed as `Setminus` and
    /// reclassified by base tokenization, since the DFA can't back off a failed
    /// `\`-spaces-newline match to the one-character operator.
    Continuation,
    /// Leading whitespace of a line inside a PROOF: block
    Indent,
    Eof,
}

impl TokenKind {
    /// Kinds that can end an operand (used for `<` and postfix disambiguation)
    pub fn is_operand_end(&self) -> bool {
        matches!(
            self,
            TokenKind::Identifier
                | TokenKind::Number
                | TokenKind::RParen
                | TokenKind::RBrace
                | TokenKind::RBracket
                | TokenKind::RAngle
                | TokenKind::BagClose
                | TokenKind::RImage
                | TokenKind::Tilde
        )
    }

    /// Kinds that can begin an atomic operand
    pub fn is_atom_start(&self) -> bool {
        matches!(
            self,
            TokenKind::Identifier
                | TokenKind::Number
                | TokenKind::LParen
                | TokenKind::LBrace
                | TokenKind::LAngle
                | TokenKind::BagOpen
        )
    }

    /// Kinds that can begin any expression, including prefix operators and binders
    pub fn is_expression_start(&self) -> bool {
        self.is_atom_start()
            || self.is_prefix_function()
            || matches!(
                self,
                TokenKind::Not
                    | TokenKind::Minus
                    | TokenKind::Hash
                    | TokenKind::Forall
                    | TokenKind::Exists
                    | TokenKind::Exists1
                    | TokenKind::Mu
                    | TokenKind::Lambda
                    | TokenKind::If
            )
    }

    /// Keyword spellings of prefix set and relation constructors (`P X`, `dom R`, `seq X`)
    pub fn is_prefix_function(&self) -> bool {
        matches!(
            self,
            TokenKind::Power
                | TokenKind::Power1
                | TokenKind::Finset
                | TokenKind::Finset1
                | TokenKind::Dom
                | TokenKind::Ran
                | TokenKind::Inv
                | TokenKind::Id
                | TokenKind::BigUnion
                | TokenKind::BigIntersect
                | TokenKind::Seq
                | TokenKind::Seq1
                | TokenKind::ISeq
                | TokenKind::Bag
        )
    }

    /// Single letter kinds that read as plain names when not used as constructors
    pub fn is_name_like(&self) -> bool {
        matches!(
            self,
            TokenKind::Identifier
                | TokenKind::Power
                | TokenKind::Power1
                | TokenKind::Finset
                | TokenKind::Finset1
        )
    }

    pub fn is_function_arrow(&self) -> bool {
        matches!(
            self,
            TokenKind::TotalFn
                | TokenKind::PartialFn
                | TokenKind::TotalInj
                | TokenKind::PartialInj
                | TokenKind::TotalSurj
                | TokenKind::PartialSurj
                | TokenKind::Bijection
                | TokenKind::FiniteFn
                | TokenKind::PartialBijection
        )
    }

    /// Kinds that only make sense between two operands
    pub fn is_infix_operator(&self) -> bool {
        self.is_function_arrow()
            || matches!(
                self,
                TokenKind::And
                    | TokenKind::Or
                    | TokenKind::Implies
                    | TokenKind::Iff
                    | TokenKind::Elem
                    | TokenKind::NotIn
                    | TokenKind::Subset
                    | TokenKind::ProperSubset
                    | TokenKind::Union
                    | TokenKind::Intersect
                    | TokenKind::Setminus
                    | TokenKind::Cross
                    | TokenKind::Maplet
                    | TokenKind::Relation
                    | TokenKind::DomRes
                    | TokenKind::RanRes
                    | TokenKind::DomSub
                    | TokenKind::RanSub
                    | TokenKind::Compose
                    | TokenKind::Override
                    | TokenKind::Cat
                    | TokenKind::Filter
                    | TokenKind::BagUnion
                    | TokenKind::Equals
                    | TokenKind::NotEquals
                    | TokenKind::LessThan
                    | TokenKind::LessEq
                    | TokenKind::GreaterThan
                    | TokenKind::GreaterEq
                    | TokenKind::Plus
                    | TokenKind::Star
                    | TokenKind::Div
                    | TokenKind::Mod
                    | TokenKind::DotDot
            )
    }

    /// Block keywords that open a line-oriented construct (`TEXT:`, `PROOF:`, ...)
    pub fn is_block_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::TextKeyword
                | TokenKind::PureTextKeyword
                | TokenKind::LatexKeyword
                | TokenKind::ProofKeyword
                | TokenKind::EquivKeyword
                | TokenKind::ArgueKeyword
                | TokenKind::InfruleKeyword
                | TokenKind::TruthTableKeyword
                | TokenKind::PageBreakKeyword
                | TokenKind::ContentsKeyword
        )
    }

    /// Block keywords whose remaining text is captured raw by the lexer
    pub fn captures_raw_text(&self) -> bool {
        matches!(
            self,
            TokenKind::TextKeyword | TokenKind::PureTextKeyword | TokenKind::LatexKeyword
        )
    }

    /// Markers that close a section, solution or part body
    pub fn is_structural_marker(&self) -> bool {
        matches!(
            self,
            TokenKind::SectionMarker | TokenKind::SolutionMarker | TokenKind::PartLabel
        )
    }

    /// Token kinds that end the current line of input
    pub fn is_line_end(&self) -> bool {
        matches!(self, TokenKind::Newline | TokenKind::Eof)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::SectionMarker => "SECTION_MARKER",
            TokenKind::SolutionMarker => "SOLUTION_MARKER",
            TokenKind::PartLabel => "PART_LABEL",
            TokenKind::TextKeyword => "TEXT",
            TokenKind::PureTextKeyword => "PURETEXT",
            TokenKind::LatexKeyword => "LATEX",
            TokenKind::ProofKeyword => "PROOF",
            TokenKind::EquivKeyword => "EQUIV",
            TokenKind::ArgueKeyword => "ARGUE",
            TokenKind::InfruleKeyword => "INFRULE",
            TokenKind::TruthTableKeyword => "TRUTH_TABLE",
            TokenKind::PageBreakKeyword => "PAGEBREAK",
            TokenKind::ContentsKeyword => "CONTENTS",
            TokenKind::Text => "TEXT_CONTENT",
            TokenKind::InfruleSeparator => "INFRULE_SEPARATOR",
            TokenKind::Given => "GIVEN",
            TokenKind::Axdef => "AXDEF",
            TokenKind::Schema => "SCHEMA",
            TokenKind::Gendef => "GENDEF",
            TokenKind::Zed => "ZED",
            TokenKind::Syntax => "SYNTAX",
            TokenKind::Where => "WHERE",
            TokenKind::End => "END",
            TokenKind::If => "IF",
            TokenKind::Then => "THEN",
            TokenKind::Else => "ELSE",
            TokenKind::Otherwise => "OTHERWISE",
            TokenKind::Case => "CASE",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Not => "NOT",
            TokenKind::Implies => "IMPLIES",
            TokenKind::Iff => "IFF",
            TokenKind::Forall => "FORALL",
            TokenKind::Exists => "EXISTS",
            TokenKind::Exists1 => "EXISTS1",
            TokenKind::Mu => "MU",
            TokenKind::Lambda => "LAMBDA",
            TokenKind::Elem => "IN",
            TokenKind::NotIn => "NOTIN",
            TokenKind::Subset => "SUBSET",
            TokenKind::ProperSubset => "PSUBSET",
            TokenKind::Union => "UNION",
            TokenKind::Intersect => "INTERSECT",
            TokenKind::Setminus => "SETMINUS",
            TokenKind::Hash => "HASH",
            TokenKind::Cross => "CROSS",
            TokenKind::Power => "POWER",
            TokenKind::Power1 => "POWER1",
            TokenKind::Finset => "FINSET",
            TokenKind::Finset1 => "FINSET1",
            TokenKind::BigUnion => "BIGCUP",
            TokenKind::BigIntersect => "BIGCAP",
            TokenKind::Maplet => "MAPLET",
            TokenKind::Relation => "RELATION",
            TokenKind::DomRes => "DRES",
            TokenKind::RanRes => "RRES",
            TokenKind::DomSub => "NDRES",
            TokenKind::RanSub => "NRRES",
            TokenKind::Compose => "COMP",
            TokenKind::Tilde => "TILDE",
            TokenKind::Override => "OVERRIDE",
            TokenKind::Dom => "DOM",
            TokenKind::Ran => "RAN",
            TokenKind::Inv => "INV",
            TokenKind::Id => "ID",
            TokenKind::LAngle => "LANGLE",
            TokenKind::RAngle => "RANGLE",
            TokenKind::Seq => "SEQ",
            TokenKind::Seq1 => "SEQ1",
            TokenKind::ISeq => "ISEQ",
            TokenKind::Cat => "CAT",
            TokenKind::Caret => "CARET",
            TokenKind::Filter => "FILTER",
            TokenKind::BagOpen => "LBAG",
            TokenKind::BagClose => "RBAG",
            TokenKind::Bag => "BAG",
            TokenKind::BagUnion => "BAG_UNION",
            TokenKind::TotalFn => "TFUN",
            TokenKind::PartialFn => "PFUN",
            TokenKind::TotalInj => "TINJ",
            TokenKind::PartialInj => "PINJ",
            TokenKind::TotalSurj => "TSURJ",
            TokenKind::PartialSurj => "PSURJ",
            TokenKind::Bijection => "BIJECTION",
            TokenKind::FiniteFn => "FFUN",
            TokenKind::PartialBijection => "PBIJECTION",
            TokenKind::Equals => "EQUALS",
            TokenKind::NotEquals => "NOT_EQUAL",
            TokenKind::LessThan => "LESS_THAN",
            TokenKind::LessEq => "LESS_EQUAL",
            TokenKind::GreaterThan => "GREATER_THAN",
            TokenKind::GreaterEq => "GREATER_EQUAL",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "STAR",
            TokenKind::Div => "DIV",
            TokenKind::Mod => "MOD",
            TokenKind::DotDot => "RANGE",
            TokenKind::Dot => "PERIOD",
            TokenKind::Ellipsis => "ELLIPSIS",
            TokenKind::FreeTypeDef => "FREE_TYPE",
            TokenKind::Abbrev => "ABBREV",
            TokenKind::DoubleColon => "DOUBLE_COLON",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::LBracket => "LBRACKET",
            TokenKind::RBracket => "RBRACKET",
            TokenKind::LImage => "LIMG",
            TokenKind::RImage => "RIMG",
            TokenKind::Comma => "COMMA",
            TokenKind::Colon => "COLON",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Pipe => "PIPE",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Continuation => "CONTINUATION",
            TokenKind::Indent => "INDENT",
            TokenKind::Eof => "EOF",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Result<TokenKind, ()>> {
        TokenKind::lexer(source).collect()
    }

    #[test]
    fn test_longest_match_arrows() {
        assert_eq!(kinds(">->>"), vec![Ok(TokenKind::Bijection)]);
        assert_eq!(kinds(">->"), vec![Ok(TokenKind::TotalInj)]);
        assert_eq!(kinds(">7->"), vec![Ok(TokenKind::PartialBijection)]);
        assert_eq!(kinds("77->"), vec![Ok(TokenKind::FiniteFn)]);
        assert_eq!(kinds("+->>"), vec![Ok(TokenKind::PartialSurj)]);
        assert_eq!(kinds("+->"), vec![Ok(TokenKind::PartialFn)]);
        assert_eq!(kinds("-->>"), vec![Ok(TokenKind::TotalSurj)]);
    }

    #[test]
    fn test_longest_match_relations() {
        assert_eq!(kinds("|->"), vec![Ok(TokenKind::Maplet)]);
        assert_eq!(kinds("<<|"), vec![Ok(TokenKind::DomSub)]);
        assert_eq!(kinds("<|"), vec![Ok(TokenKind::DomRes)]);
        assert_eq!(kinds("|>>"), vec![Ok(TokenKind::RanSub)]);
        assert_eq!(kinds("<=>"), vec![Ok(TokenKind::Iff)]);
        assert_eq!(kinds("<->"), vec![Ok(TokenKind::Relation)]);
    }

    #[test]
    fn test_keywords_beat_identifiers() {
        assert_eq!(kinds("land"), vec![Ok(TokenKind::And)]);
        assert_eq!(kinds("landing"), vec![Ok(TokenKind::Identifier)]);
        assert_eq!(kinds("P"), vec![Ok(TokenKind::Power)]);
        assert_eq!(kinds("F"), vec![Ok(TokenKind::Finset)]);
        assert_eq!(kinds("Px"), vec![Ok(TokenKind::Identifier)]);
        assert_eq!(kinds("P1"), vec![Ok(TokenKind::Power1)]);
        assert_eq!(kinds("P2"), vec![Ok(TokenKind::Identifier)]);
    }

    #[test]
    fn test_digit_leading_identifier() {
        assert_eq!(kinds("479_courses"), vec![Ok(TokenKind::Identifier)]);
        assert_eq!(kinds("479"), vec![Ok(TokenKind::Number)]);
    }

    #[test]
    fn test_range_after_number() {
        assert_eq!(
            kinds("1..n"),
            vec![
                Ok(TokenKind::Number),
                Ok(TokenKind::DotDot),
                Ok(TokenKind::Identifier)
            ]
        );
    }

    #[test]
    fn test_backslash_lexes_as_setminus() {
        assert_eq!(
            kinds("\\  \n"),
            vec![Ok(TokenKind::Setminus), Ok(TokenKind::Newline)]
        );
        assert_eq!(
            kinds("A \\ B"),
            vec![
                Ok(TokenKind::Identifier),
                Ok(TokenKind::Setminus),
                Ok(TokenKind::Identifier)
            ]
        );
    }

    #[test]
    fn test_unicode_aliases() {
        assert_eq!(kinds("×"), vec![Ok(TokenKind::Cross)]);
        assert_eq!(kinds("⊎"), vec![Ok(TokenKind::BagUnion)]);
        assert_eq!(kinds("↾"), vec![Ok(TokenKind::Filter)]);
        assert_eq!(kinds("⌢"), vec![Ok(TokenKind::Cat)]);
        assert_eq!(kinds("⟨"), vec![Ok(TokenKind::LAngle)]);
    }

    #[test]
    fn test_predicates() {
        assert!(TokenKind::Bijection.is_function_arrow());
        assert!(!TokenKind::Relation.is_function_arrow());
        assert!(TokenKind::Relation.is_infix_operator());
        assert!(TokenKind::RParen.is_operand_end());
        assert!(!TokenKind::Comma.is_operand_end());
        assert!(TokenKind::Power.is_name_like());
        assert!(TokenKind::TextKeyword.captures_raw_text());
        assert!(!TokenKind::ProofKeyword.captures_raw_text());
    }
}
