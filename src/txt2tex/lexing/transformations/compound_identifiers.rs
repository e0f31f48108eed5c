//! Compound identifier transformation
//!
//! An abbreviation may name a closure: `R+ == R o9 R+`. Only in front of `==` does the
//! trailing `+`, `*` or `~` belong to the name; everywhere else it is a postfix operator.

use crate::txt2tex::lexing::error::LexerError;
use crate::txt2tex::lexing::position::SourceLocation;
use crate::txt2tex::lexing::transformations::Transformation;
use crate::txt2tex::lexing::LocatedTokens;
use crate::txt2tex::token::TokenKind;

pub struct CompoundIdentifiers;

impl Transformation for CompoundIdentifiers {
    fn name(&self) -> &str {
        "compound_identifiers"
    }

    fn description(&self) -> &str {
        "Merge an identifier with an adjacent +, * or ~ when the pair is followed by =="
    }

    fn transform(
        &self,
        _location: &SourceLocation,
        tokens: LocatedTokens,
    ) -> Result<LocatedTokens, LexerError> {
        Ok(merge_compound_identifiers(tokens))
    }
}

fn is_closure_suffix(kind: TokenKind) -> bool {
    matches!(kind, TokenKind::Plus | TokenKind::Star | TokenKind::Tilde)
}

pub fn merge_compound_identifiers(tokens: LocatedTokens) -> LocatedTokens {
    let mut result = Vec::with_capacity(tokens.len());
    let mut i = 0;

    while i < tokens.len() {
        let (kind, range) = &tokens[i];
        if *kind == TokenKind::Identifier && i + 2 < tokens.len() {
            let (suffix, suffix_range) = &tokens[i + 1];
            let (next, _) = &tokens[i + 2];
            if is_closure_suffix(*suffix)
                && suffix_range.start == range.end
                && *next == TokenKind::Abbrev
            {
                result.push((TokenKind::Identifier, range.start..suffix_range.end));
                i += 2;
                continue;
            }
        }
        result.push(tokens[i].clone());
        i += 1;
    }

    result
}
