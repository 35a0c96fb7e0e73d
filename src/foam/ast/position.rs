//! Source location utilities for converting byte offsets to line/column positions
//!
//! Lines and columns are 1-based, the way editors and compilers report them.
//! Columns count bytes.

use std::fmt;

/// Represents a position in source code (line and column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Provides fast conversion from byte offsets to line/column positions
pub struct SourceLocation {
    /// Byte offsets where each line starts
    line_starts: Vec<usize>,
}

impl SourceLocation {
    /// Create a new SourceLocation from source code
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];

        for (byte_pos, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(byte_pos + 1);
            }
        }

        Self { line_starts }
    }

    /// Convert a byte offset to a line/column position
    pub fn byte_to_position(&self, byte_offset: usize) -> Position {
        let index = self.line_index(byte_offset);
        let column = byte_offset - self.line_starts[index];

        Position::new(index + 1, column + 1)
    }

    /// Line number holding the given byte offset
    pub fn line_of(&self, byte_offset: usize) -> usize {
        self.line_index(byte_offset) + 1
    }

    /// Get the total number of lines in the source
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    fn line_index(&self, byte_offset: usize) -> usize {
        self.line_starts
            .binary_search(&byte_offset)
            .unwrap_or_else(|i| i - 1)
    }
}
