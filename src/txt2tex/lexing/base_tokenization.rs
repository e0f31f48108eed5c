//! Base tokenization for txt2tex source
//!
//! Raw tokenization with the logos DFA from [TokenKind]. This is where source strings become
//! located token streams; everything after this works on the stream.
//!
//! Three constructs can't be expressed as DFA tokens, because they depend on what sits on
//! the rest of the line rather than on the next few characters. The driver handles them by
//! looking at the raw line and bumping the logos cursor past what it consumed:
//!
//!     Raw text:       after TEXT:, PURETEXT: and LATEX: the rest of the line and every
//!                     following non-blank, non-structural line becomes one `Text` token.
//!     Titles:         `=== Title ===` and `** Solution 1 **` at the start of a line. The
//!                     title is captured as `Text` up to the closing marker on the same line,
//!                     so words in it are never lexed (or mistaken for prose keywords).
//!     Proof indents:  inside a PROOF: block each non-blank line gets an `Indent` token
//!                     covering its leading whitespace. The block ends at a blank line or a
//!                     structural line. Indentation is not tracked anywhere else.
//!
//! A `\` followed only by whitespace up to the newline is a line continuation. The DFA
//! lexes it as `Setminus`; the driver swallows the rest of the line and emits
//! `Continuation` instead.

use super::error::LexerError;
use super::position::SourceLocation;
use super::LocatedTokens;
use crate::txt2tex::token::TokenKind;
use logos::Logos;
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

/// Lines that start a new document construct: block keywords, section and solution
/// markers, part labels
static STRUCTURAL_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[ \t]*(?:(?:TEXT|PURETEXT|LATEX|PROOF|EQUIV|ARGUE|INFRULE|TRUTH[ -]TABLE|PAGEBREAK|CONTENTS):|===|\*\*|\([a-z]\)(?:[ \t]|$))",
    )
    .expect("structural line pattern is valid")
});

pub fn is_structural_line(line: &str) -> bool {
    STRUCTURAL_LINE.is_match(line)
}

/// Tokenize source into kinds with byte ranges
pub fn tokenize(location: &SourceLocation) -> Result<LocatedTokens, LexerError> {
    let source = location.source();
    let mut lexer = TokenKind::lexer(source);
    let mut tokens = Vec::new();
    let mut in_proof = false;

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let kind = match result {
            Ok(kind) => kind,
            Err(()) => {
                let ch = lexer.slice().chars().next().unwrap_or('?');
                return Err(LexerError::at_offset(
                    format!("Unexpected character '{}'", ch),
                    location,
                    span.start,
                ));
            }
        };

        match kind {
            kind if kind.captures_raw_text() => {
                tokens.push((kind, span.clone()));
                let (text, consumed) = capture_raw_text(location, span.end);
                tokens.push((TokenKind::Text, text));
                lexer.bump(consumed);
            }
            TokenKind::SectionMarker | TokenKind::SolutionMarker
                if location.is_line_start(span.start) =>
            {
                tokens.push((kind, span.clone()));
                let consumed = capture_title(location, kind, span.end, &mut tokens);
                lexer.bump(consumed);
            }
            TokenKind::SolutionMarker => {
                // `**` inside a line is two stars (`R**`)
                tokens.push((TokenKind::Star, span.start..span.start + 1));
                tokens.push((TokenKind::Star, span.start + 1..span.end));
            }
            TokenKind::ProofKeyword => {
                tokens.push((kind, span));
                in_proof = true;
            }
            TokenKind::Setminus if lexer.slice() == "\\" => {
                match continuation_end(source, span.end) {
                    Some(end) => {
                        tokens.push((TokenKind::Continuation, span.start..end));
                        lexer.bump(end - span.end);
                    }
                    None => tokens.push((kind, span)),
                }
            }
            TokenKind::Newline => {
                tokens.push((kind, span.clone()));
                if in_proof {
                    match proof_indent(location, span.end) {
                        Some(indent) => tokens.push((TokenKind::Indent, indent)),
                        None => in_proof = false,
                    }
                }
            }
            _ => tokens.push((kind, span)),
        }
    }

    Ok(tokens)
}

/// Capture raw text starting at `start`: the rest of this line plus following lines up to
/// a blank or structural line. Returns the trimmed text range and the bytes consumed.
fn capture_raw_text(location: &SourceLocation, start: usize) -> (Range<usize>, usize) {
    let source = location.source();
    let mut end = location.line_range(start).end;

    while end < source.len() {
        let next = location.line_range(end + 1);
        let line = &source[next.clone()];
        if line.trim().is_empty() || is_structural_line(line) {
            break;
        }
        end = next.end;
    }

    (trim_range(source, start..end), end - start)
}

/// Capture a section or solution title up to the closing marker on the same line
fn capture_title(
    location: &SourceLocation,
    marker: TokenKind,
    start: usize,
    tokens: &mut LocatedTokens,
) -> usize {
    let source = location.source();
    let line_end = location.line_range(start).end;
    let closing = if marker == TokenKind::SectionMarker {
        "==="
    } else {
        "**"
    };

    match source[start..line_end].find(closing) {
        Some(idx) => {
            let close_start = start + idx;
            tokens.push((TokenKind::Text, trim_range(source, start..close_start)));
            tokens.push((marker, close_start..close_start + closing.len()));
            idx + closing.len()
        }
        None => {
            tokens.push((TokenKind::Text, trim_range(source, start..line_end)));
            line_end - start
        }
    }
}

/// Leading whitespace of the proof line starting at `line_start`, or `None` when the
/// line ends the proof block
fn proof_indent(location: &SourceLocation, line_start: usize) -> Option<Range<usize>> {
    let source = location.source();
    if line_start >= source.len() {
        return None;
    }
    let line = &source[location.line_range(line_start)];
    if line.trim().is_empty() || is_structural_line(line) {
        return None;
    }
    let width = line.len() - line.trim_start_matches([' ', '\t']).len();
    Some(line_start..line_start + width)
}

/// End of a line continuation whose `\\` ends at `start`: blanks then a newline
fn continuation_end(source: &str, start: usize) -> Option<usize> {
    let rest = &source[start..];
    let blanks = rest.len() - rest.trim_start_matches([' ', '\t']).len();
    let after = &rest[blanks..];
    let newline = if after.starts_with("\r\n") {
        2
    } else if after.starts_with('\n') {
        1
    } else {
        return None;
    };
    Some(start + blanks + newline)
}

fn trim_range(source: &str, range: Range<usize>) -> Range<usize> {
    let raw = &source[range.clone()];
    let start = range.start + (raw.len() - raw.trim_start().len());
    let end = range.end - (raw.len() - raw.trim_end().len());
    start..end.max(start)
}
