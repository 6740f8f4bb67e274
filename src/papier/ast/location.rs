//! Source location utilities for converting byte offsets to line/column positions

use serde::Serialize;
use std::fmt;

/// Byte range into the parsed source.
pub type ByteRange = std::ops::Range<usize>;

/// A point in the source: 0-based line and byte column, plus the absolute byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Position {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }
}

/// Displays 1-based, the way editors and compilers report positions.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// Provides fast conversion from byte offsets to line/column positions
pub struct SourceLocation {
    /// Byte offsets where each line starts
    line_starts: Vec<usize>,
    len: usize,
}

impl SourceLocation {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            source
                .char_indices()
                .filter(|&(_, ch)| ch == '\n')
                .map(|(byte_pos, _)| byte_pos + 1),
        );

        Self {
            line_starts,
            len: source.len(),
        }
    }

    /// Convert a byte offset to a position. Offsets past the end clamp to end of input.
    pub fn byte_to_position(&self, byte_offset: usize) -> Position {
        let offset = byte_offset.min(self.len);
        let line = self
            .line_starts
            .binary_search(&offset)
            .unwrap_or_else(|i| i - 1);

        Position::new(line, offset - self.line_starts[line], offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_to_position_single_line() {
        let loc = SourceLocation::new("Hello");
        assert_eq!(loc.byte_to_position(0), Position::new(0, 0, 0));
        assert_eq!(loc.byte_to_position(4), Position::new(0, 4, 4));
    }

    #[test]
    fn test_byte_to_position_multiline() {
        let loc = SourceLocation::new("Hello\nworld\ntest");

        assert_eq!(loc.byte_to_position(5), Position::new(0, 5, 5));
        assert_eq!(loc.byte_to_position(6), Position::new(1, 0, 6));
        assert_eq!(loc.byte_to_position(10), Position::new(1, 4, 10));
        assert_eq!(loc.byte_to_position(12), Position::new(2, 0, 12));
    }

    #[test]
    fn test_end_of_input_after_trailing_newline() {
        let loc = SourceLocation::new("a\nb\n");
        assert_eq!(loc.byte_to_position(4), Position::new(2, 0, 4));
        assert_eq!(loc.byte_to_position(99), Position::new(2, 0, 4));
    }

    #[test]
    fn test_display_is_one_based() {
        assert_eq!(Position::new(0, 0, 0).to_string(), "1:1");
        assert_eq!(Position::new(2, 7, 30).to_string(), "3:8");
    }
}
