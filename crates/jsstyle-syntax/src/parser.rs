//! Tree-sitter parsing wrapper for JavaScript sources.
//!
//! [`JsParser`] wraps the raw Tree-sitter parser; [`ParseResult`] exposes the
//! syntax errors Tree-sitter recovered from and converts a clean tree into a
//! [`SourceModel`].

use std::ops::Range;

use jsstyle_core::SourceModel;
use tracing::debug;

use crate::error::SyntaxError;
use crate::language::tree_sitter_language;
use crate::lower::Lowerer;
use crate::position::point_to_one_based;
use crate::tokens::collect_tokens;

const CONTEXT_LIMIT: usize = 50;

/// Result of parsing JavaScript source.
///
/// Tree-sitter is error-tolerant, so a parse result may contain both a valid
/// tree and error nodes. Only error-free results become source models.
#[derive(Debug)]
pub struct ParseResult {
    tree: tree_sitter::Tree,
    source: String,
}

impl ParseResult {
    /// Returns the parsed syntax tree.
    #[must_use]
    pub const fn tree(&self) -> &tree_sitter::Tree {
        &self.tree
    }

    /// Returns the source code that was parsed.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns whether the tree contains ERROR or MISSING nodes.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        has_error_nodes(self.tree.root_node())
    }

    /// Collects all syntax errors in document order.
    #[must_use]
    pub fn errors(&self) -> Vec<SyntaxErrorInfo> {
        let mut errors = Vec::new();
        collect_error_nodes(self.tree.root_node(), &self.source, &mut errors);
        errors
    }

    /// Lowers the tree into a source model labelled with `filename`.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError::InvalidSource`] describing the first syntax
    /// error when the tree is not clean.
    pub fn into_source_model(self, filename: impl Into<String>) -> Result<SourceModel, SyntaxError> {
        let label = filename.into();
        if let Some(first) = self.errors().into_iter().next() {
            debug!(
                target: "jsstyle::syntax",
                filename = %label,
                line = first.line,
                column = first.column,
                "rejecting source with syntax errors"
            );
            return Err(SyntaxError::InvalidSource {
                filename: label,
                line: first.line,
                column: first.column,
                message: first.message,
                context: first.context,
            });
        }

        let root = self.tree.root_node();
        let program = Lowerer::new(&self.source).program(root);
        let tokens = collect_tokens(root, &self.source);
        debug!(
            target: "jsstyle::syntax",
            filename = %label,
            statements = program.body().len(),
            tokens = tokens.len(),
            "built source model"
        );
        Ok(SourceModel::new(self.source, program, tokens).with_filename(label))
    }
}

/// Information about a syntax error found during parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxErrorInfo {
    /// Byte range of the error in the source.
    pub byte_range: Range<usize>,
    /// Line number (one-based) where the error starts.
    pub line: usize,
    /// Column number (one-based) where the error starts.
    pub column: usize,
    /// A snippet of the problematic source text.
    pub context: String,
    /// Human-readable description of the error.
    pub message: String,
}

impl SyntaxErrorInfo {
    fn from_node(node: tree_sitter::Node<'_>, source: &str) -> Self {
        let byte_range = node.byte_range();
        let context = source
            .get(byte_range.clone())
            .map(|snippet| {
                if snippet.len() > CONTEXT_LIMIT {
                    let truncated: String = snippet.chars().take(CONTEXT_LIMIT - 3).collect();
                    format!("{truncated}...")
                } else {
                    snippet.to_owned()
                }
            })
            .unwrap_or_default();

        let message = if node.is_missing() {
            format!("missing {}", node.kind())
        } else {
            "syntax error".to_owned()
        };

        let (line, column) = point_to_one_based(node.start_position());

        Self {
            byte_range,
            line,
            column,
            context,
            message,
        }
    }
}

/// Tree-sitter parser configured with the JavaScript grammar.
///
/// A parser is cheap to reuse but not `Sync`; create one per worker thread.
pub struct JsParser {
    inner: tree_sitter::Parser,
}

impl JsParser {
    /// Creates a parser with the JavaScript grammar loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if the grammar is incompatible with the linked
    /// Tree-sitter runtime.
    pub fn new() -> Result<Self, SyntaxError> {
        let mut inner = tree_sitter::Parser::new();
        inner
            .set_language(&tree_sitter_language())
            .map_err(|e| SyntaxError::parser_init(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Parses source code and returns the raw result.
    ///
    /// # Errors
    ///
    /// Returns an error if Tree-sitter fails to produce a tree.
    pub fn parse(&mut self, source: &str) -> Result<ParseResult, SyntaxError> {
        let tree = self
            .inner
            .parse(source, None)
            .ok_or_else(|| SyntaxError::parse("<input>", "parsing failed"))?;
        Ok(ParseResult {
            tree,
            source: source.to_owned(),
        })
    }

    /// Parses `source` and lowers it into a source model.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or the source has syntax errors.
    pub fn parse_model(
        &mut self,
        source: &str,
        filename: impl Into<String>,
    ) -> Result<SourceModel, SyntaxError> {
        let label = filename.into();
        let tree = self
            .inner
            .parse(source, None)
            .ok_or_else(|| SyntaxError::parse(label.as_str(), "parsing failed"))?;
        ParseResult {
            tree,
            source: source.to_owned(),
        }
        .into_source_model(label)
    }
}

/// Parses `source` with a fresh parser and lowers it into a source model.
///
/// # Errors
///
/// Returns an error if the parser cannot be created, parsing fails, or the
/// source has syntax errors.
pub fn parse_source(source: &str, filename: impl Into<String>) -> Result<SourceModel, SyntaxError> {
    JsParser::new()?.parse_model(source, filename)
}

fn has_error_nodes(node: tree_sitter::Node<'_>) -> bool {
    if node.is_error() || node.is_missing() {
        return true;
    }
    if !node.has_error() {
        return false;
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if has_error_nodes(child) {
            return true;
        }
    }

    false
}

fn collect_error_nodes(
    node: tree_sitter::Node<'_>,
    source: &str,
    errors: &mut Vec<SyntaxErrorInfo>,
) {
    if node.is_error() || node.is_missing() {
        errors.push(SyntaxErrorInfo::from_node(node, source));
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_error_nodes(child, source, errors);
    }
}
