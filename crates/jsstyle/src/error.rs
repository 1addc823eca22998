//! Errors raised while building a linter.

use thiserror::Error;

use crate::checks::NameKind;

/// Errors raised while compiling the configuration into checkers.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LintError {
    /// A naming pattern is not a valid regular expression.
    #[error("invalid {kind} naming pattern '{pattern}': {source}")]
    InvalidPattern {
        /// Declaration kind the pattern applies to.
        kind: NameKind,
        /// Pattern as configured.
        pattern: String,
        /// Regex compilation failure.
        #[source]
        source: Box<regex::Error>,
    },
}

impl LintError {
    /// Creates an invalid pattern error.
    #[must_use]
    pub fn invalid_pattern(kind: NameKind, pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidPattern {
            kind,
            pattern: pattern.into(),
            source: Box::new(source),
        }
    }
}
