//! Error types for the JavaScript front end.

use thiserror::Error;

/// Errors raised while turning source text into a source model.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SyntaxError {
    /// Failed to initialise the Tree-sitter parser with the grammar.
    #[error("failed to initialise JavaScript parser: {message}")]
    ParserInitError {
        /// Description of the failure.
        message: String,
    },

    /// Tree-sitter did not produce a tree at all.
    #[error("failed to parse: {message}")]
    ParseError {
        /// Filename label of the source.
        filename: String,
        /// Description of the failure.
        message: String,
    },

    /// The source parsed with error recovery and cannot be linted.
    #[error("syntax error at line {line}, column {column}: {message} near `{context}`")]
    InvalidSource {
        /// Filename label of the source.
        filename: String,
        /// One-based line of the first error.
        line: usize,
        /// One-based column of the first error.
        column: usize,
        /// Description of the first error.
        message: String,
        /// Source snippet around the first error.
        context: String,
    },
}

impl SyntaxError {
    /// Creates a parser initialisation error.
    #[must_use]
    pub fn parser_init(message: impl Into<String>) -> Self {
        Self::ParserInitError {
            message: message.into(),
        }
    }

    /// Creates a parse error.
    #[must_use]
    pub fn parse(filename: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ParseError {
            filename: filename.into(),
            message: message.into(),
        }
    }
}
