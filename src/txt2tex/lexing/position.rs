//! Source location utilities for converting byte offsets to line/column positions
//!
//! The lexing pipeline works on byte ranges (that is what logos hands out). Tokens and
//! errors report 1-based lines and 1-based columns counted in characters, so `→` is one
//! column wide even though it is three bytes.

use std::ops::Range;

/// Fast conversion from byte offsets to line/column positions
pub struct SourceLocation<'a> {
    source: &'a str,
    /// Byte offsets where each line starts
    line_starts: Vec<usize>,
}

impl<'a> SourceLocation<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut line_starts = vec![0];

        for (byte_pos, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(byte_pos + 1);
            }
        }

        Self {
            source,
            line_starts,
        }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Zero-based index of the line containing `byte_offset`
    pub fn line_index(&self, byte_offset: usize) -> usize {
        self.line_starts
            .binary_search(&byte_offset)
            .unwrap_or_else(|i| i - 1)
    }

    /// 1-based (line, column) of a byte offset
    pub fn position(&self, byte_offset: usize) -> (u32, u32) {
        let offset = byte_offset.min(self.source.len());
        let line = self.line_index(offset);
        let start = self.line_starts[line];
        let column = self.source[start..offset].chars().count();
        (line as u32 + 1, column as u32 + 1)
    }

    /// Byte range of the line containing `byte_offset`, without its newline
    pub fn line_range(&self, byte_offset: usize) -> Range<usize> {
        let line = self.line_index(byte_offset.min(self.source.len()));
        let start = self.line_starts[line];
        let end = self
            .line_starts
            .get(line + 1)
            .map(|next| next - 1)
            .unwrap_or(self.source.len());
        start..end
    }

    /// True when only spaces and tabs precede `byte_offset` on its line
    pub fn is_line_start(&self, byte_offset: usize) -> bool {
        let start = self.line_range(byte_offset).start;
        self.source[start..byte_offset]
            .chars()
            .all(|c| c == ' ' || c == '\t')
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
