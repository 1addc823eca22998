//! Immutable per-file source model shared by all checkers.

use crate::token::Token;
use crate::tree::Program;

/// Filename used in diagnostics when the caller supplies none.
pub const DEFAULT_FILENAME: &str = "no_filename";

/// One file's text, lines, syntax tree and tokens.
///
/// The model is assembled once and exposes no mutators, so every checker
/// observes the same text, tree and tokens for the duration of a lint pass.
///
/// # Example
///
/// ```
/// use jsstyle_core::{Program, SourceModel};
///
/// let model = SourceModel::new("let a = 1;\nlet b = 2;", Program::default(), Vec::new())
///     .with_filename("app.js");
/// assert_eq!(model.lines().len(), 2);
/// assert_eq!(model.line(1), Some("let b = 2;"));
/// assert_eq!(model.filename(), "app.js");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceModel {
    text: String,
    lines: Vec<String>,
    program: Program,
    tokens: Vec<Token>,
    filename: String,
}

impl SourceModel {
    /// Builds a source model from text plus the tree and tokens derived
    /// from that same text.
    #[must_use]
    pub fn new(text: impl Into<String>, program: Program, tokens: Vec<Token>) -> Self {
        let contents: String = text.into();
        let lines = contents.split('\n').map(str::to_owned).collect();
        Self {
            text: contents,
            lines,
            program,
            tokens,
            filename: DEFAULT_FILENAME.to_owned(),
        }
    }

    /// Sets the filename used to label diagnostics.
    #[must_use]
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    /// Returns the raw file contents.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the text split on newlines.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns the line at a zero-based index.
    #[must_use]
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Returns the root of the syntax tree.
    #[must_use]
    pub const fn program(&self) -> &Program {
        &self.program
    }

    /// Returns the token stream.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Returns the filename label.
    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Returns the byte at a one-based line and zero-based column.
    #[must_use]
    pub fn byte_at(&self, line: usize, column: usize) -> Option<u8> {
        self.line(line.checked_sub(1)?)?.as_bytes().get(column).copied()
    }
}
