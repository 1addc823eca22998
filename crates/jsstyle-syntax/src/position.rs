//! Shared position conversion helpers.
//!
//! Tree-sitter rows are zero-based; the source model uses one-based lines
//! with zero-based byte columns.

use jsstyle_core::{Position, Span};

/// Converts a Tree-sitter point to a source model position.
pub(crate) const fn point_to_position(point: tree_sitter::Point) -> Position {
    Position::new(point.row.saturating_add(1), point.column)
}

/// Returns the span covered by a node.
pub(crate) fn node_span(node: tree_sitter::Node<'_>) -> Span {
    Span::new(
        point_to_position(node.start_position()),
        point_to_position(node.end_position()),
    )
}

/// Converts a Tree-sitter point to a one-based `(line, column)` pair for
/// error reporting.
pub(crate) const fn point_to_one_based(point: tree_sitter::Point) -> (usize, usize) {
    (point.row.saturating_add(1), point.column.saturating_add(1))
}
