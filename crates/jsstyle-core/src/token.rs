//! Lexical tokens covering a whole source file.

use serde::{Deserialize, Serialize};

use crate::span::Span;

/// Lexical category of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Operators and punctuation such as `==`, `=>` or `{`.
    Punctuator,
    /// Reserved words such as `let`, `typeof` or `this`.
    Keyword,
    /// Identifiers and property names.
    Identifier,
    /// Numeric literals.
    Numeric,
    /// Text inside a string literal.
    String,
    /// Literal text inside a template string.
    Template,
    /// Regular expression body or flags.
    RegularExpression,
    /// Line, block and hashbang comments.
    Comment,
}

impl TokenKind {
    /// Returns whether a token of this kind can match a configured operator.
    ///
    /// Literal contents and comments never do, so an operator written inside
    /// a string is not subject to spacing rules.
    #[must_use]
    pub const fn is_operator_like(self) -> bool {
        matches!(self, Self::Punctuator | Self::Keyword)
    }
}

/// A single lexical unit with its literal text and location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Literal source text of the token.
    pub value: String,
    /// Lexical category.
    pub kind: TokenKind,
    /// Location of the token.
    pub span: Span,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(value: impl Into<String>, kind: TokenKind, span: Span) -> Self {
        Self {
            value: value.into(),
            kind,
            span,
        }
    }

    /// Returns the literal text of the token.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}
