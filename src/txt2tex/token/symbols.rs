//! Operator display symbols
//!
//! Every operator kind has one canonical Unicode symbol. The same table drives operator
//! substitution in free text (justifications inside EQUIV/ARGUE/PROOF brackets): the text is
//! re-lexed with the logos DFA from [TokenKind], so `|->` is always seen before `->` and
//! `<<|` before `<|`, exactly as in expression context.
//!
//! Alphabetic spellings are only substituted when they cannot be an English word (`land`,
//! `elem`, `o9`, ...). `and elimination` stays prose, `p land q` becomes `p ∧ q`.

use super::kind::TokenKind;
use logos::Logos;

/// Alphabetic operator spellings that are replaced in free text
const SUBSTITUTED_WORDS: &[&str] = &[
    "land", "lor", "lnot", "elem", "notin", "o9", "cross", "psubset", "bigcup", "bigcap",
    "bag_union", "exists1",
];

impl TokenKind {
    /// Canonical display symbol of an operator kind, `None` for everything else
    pub fn symbol(&self) -> Option<&'static str> {
        let symbol = match self {
            TokenKind::And => "∧",
            TokenKind::Or => "∨",
            TokenKind::Not => "¬",
            TokenKind::Implies => "⇒",
            TokenKind::Iff => "⇔",
            TokenKind::Forall => "∀",
            TokenKind::Exists => "∃",
            TokenKind::Exists1 => "∃₁",
            TokenKind::Mu => "μ",
            TokenKind::Lambda => "λ",
            TokenKind::Elem => "∈",
            TokenKind::NotIn => "∉",
            TokenKind::Subset => "⊆",
            TokenKind::ProperSubset => "⊂",
            TokenKind::Union => "∪",
            TokenKind::Intersect => "∩",
            TokenKind::Setminus => "∖",
            TokenKind::Hash => "#",
            TokenKind::Cross => "×",
            TokenKind::Power => "ℙ",
            TokenKind::Power1 => "ℙ₁",
            TokenKind::Finset => "𝔽",
            TokenKind::Finset1 => "𝔽₁",
            TokenKind::BigUnion => "⋃",
            TokenKind::BigIntersect => "⋂",
            TokenKind::Maplet => "↦",
            TokenKind::Relation => "↔",
            TokenKind::DomRes => "◁",
            TokenKind::RanRes => "▷",
            TokenKind::DomSub => "⩤",
            TokenKind::RanSub => "⩥",
            TokenKind::Compose => "⨾",
            TokenKind::Tilde => "∼",
            TokenKind::Override => "⊕",
            TokenKind::LAngle => "⟨",
            TokenKind::RAngle => "⟩",
            TokenKind::Cat => "⌢",
            TokenKind::Caret => "^",
            TokenKind::Filter => "↾",
            TokenKind::BagOpen => "⟦",
            TokenKind::BagClose => "⟧",
            TokenKind::BagUnion => "⊎",
            TokenKind::TotalFn => "→",
            TokenKind::PartialFn => "⇸",
            TokenKind::TotalInj => "↣",
            TokenKind::PartialInj => "⤔",
            TokenKind::TotalSurj => "↠",
            TokenKind::PartialSurj => "⤀",
            TokenKind::Bijection => "⤖",
            TokenKind::FiniteFn => "⇻",
            TokenKind::PartialBijection => "⤕",
            TokenKind::Equals => "=",
            TokenKind::NotEquals => "≠",
            TokenKind::LessThan => "<",
            TokenKind::LessEq => "≤",
            TokenKind::GreaterThan => ">",
            TokenKind::GreaterEq => "≥",
            TokenKind::Plus => "+",
            TokenKind::Minus => "−",
            TokenKind::Star => "*",
            TokenKind::DotDot => "..",
            TokenKind::FreeTypeDef => "::=",
            TokenKind::Abbrev => "==",
            TokenKind::LImage => "⦇",
            TokenKind::RImage => "⦈",
            _ => return None,
        };
        Some(symbol)
    }
}

/// Whether `spelling` of an operator should be replaced by its symbol in free text
fn substitutes(kind: TokenKind, spelling: &str) -> bool {
    match kind {
        TokenKind::Minus | TokenKind::Caret | TokenKind::Hash => false,
        _ if spelling.chars().all(|c| c.is_alphanumeric() || c == '_') => {
            SUBSTITUTED_WORDS.contains(&spelling)
        }
        _ => true,
    }
}

/// Replace operator spellings in `text` with their display symbols
///
/// Whitespace and unrecognized characters pass through untouched, so the result differs
/// from the input only where an operator was found.
pub fn substitute_operators(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut lexer = TokenKind::lexer(text);
    let mut cursor = 0;

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        out.push_str(&text[cursor..span.start]);
        let slice = lexer.slice();
        match result {
            Ok(kind) => match kind.symbol() {
                Some(symbol) if substitutes(kind, slice) => out.push_str(symbol),
                _ => out.push_str(slice),
            },
            Err(()) => out.push_str(slice),
        }
        cursor = span.end;
    }
    out.push_str(&text[cursor..]);
    out
}
