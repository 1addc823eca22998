//! Source span and position types for locating code regions.

use serde::{Deserialize, Serialize};

/// A line and column position within a source file.
///
/// Lines are one-based to match parser-reported locations; columns are
/// zero-based byte offsets within the line.
///
/// # Example
///
/// ```
/// use jsstyle_core::Position;
///
/// let pos = Position::new(3, 4);
/// assert_eq!(pos.line(), 3);
/// assert_eq!(pos.line_index(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    /// One-based line number.
    pub line: usize,
    /// Zero-based byte column within the line.
    pub column: usize,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Returns the one-based line number.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Returns the zero-based byte column.
    #[must_use]
    pub const fn column(&self) -> usize {
        self.column
    }

    /// Returns the zero-based index of this line in a line array.
    #[must_use]
    pub const fn line_index(&self) -> usize {
        self.line.saturating_sub(1)
    }
}

/// A half-open region of source text.
///
/// `start` is inclusive and `end` is exclusive, so the final character of
/// the region sits at column `end.column - 1` on line `end.line`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Inclusive start position.
    pub start: Position,
    /// Exclusive end position.
    pub end: Position,
}

impl Span {
    /// Creates a span from its start and end positions.
    #[must_use]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Returns the inclusive start position.
    #[must_use]
    pub const fn start(&self) -> Position {
        self.start
    }

    /// Returns the exclusive end position.
    #[must_use]
    pub const fn end(&self) -> Position {
        self.end
    }

    /// Returns whether the span starts and ends on different lines.
    #[must_use]
    pub const fn is_multiline(&self) -> bool {
        self.start.line != self.end.line
    }

    /// Returns a span stretched to end at `end`.
    #[must_use]
    pub const fn extended_to(self, end: Position) -> Self {
        Self {
            start: self.start,
            end,
        }
    }
}
