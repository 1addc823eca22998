//! Positioned diagnostics produced by the checkers.
//!
//! A [`Diagnostic`] records which checker produced it, a message, the
//! filename label and a line number. Line numbers are not unified across
//! checkers: tree-based checkers report the parser's one-based line while
//! line-array checkers report a zero-based index, and [`LineBase`] records
//! which one a diagnostic carries.

use std::fmt;

use serde::Serialize;

/// Nominal classification of a diagnostic.
///
/// Both severities are handled identically by the engine; the distinction
/// only changes the rendered prefix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// A style warning. Every built-in checker emits warnings.
    #[default]
    Warning,
    /// An error.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => f.write_str("Warning"),
            Self::Error => f.write_str("Error"),
        }
    }
}

/// How the `line` of a [`Diagnostic`] should be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineBase {
    /// The parser's one-based line number.
    OneBased,
    /// A zero-based index into the source line array.
    ZeroBased,
}

impl LineBase {
    /// Converts a line in this base to a one-based line number.
    #[must_use]
    pub const fn to_one_based(self, line: usize) -> usize {
        match self {
            Self::OneBased => line,
            Self::ZeroBased => line.saturating_add(1),
        }
    }
}

/// Identifies one of the built-in checkers.
///
/// The string forms match the keys of the `checkers` configuration section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckId {
    /// Statement termination.
    MissingSemicolons,
    /// Blank-line density.
    EmptyLines,
    /// Whitespace around operators.
    SpacesStyle,
    /// Identifier naming conventions.
    CorrectNaming,
}

impl CheckId {
    /// Returns every checker in invocation order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::MissingSemicolons,
            Self::EmptyLines,
            Self::SpacesStyle,
            Self::CorrectNaming,
        ]
    }

    /// Returns the configuration key for this checker.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingSemicolons => "missing_semicolons",
            Self::EmptyLines => "empty_lines",
            Self::SpacesStyle => "spaces_style",
            Self::CorrectNaming => "correct_naming",
        }
    }

    /// Returns the line base used by diagnostics from this checker.
    #[must_use]
    pub const fn line_base(self) -> LineBase {
        match self {
            Self::MissingSemicolons | Self::CorrectNaming => LineBase::OneBased,
            Self::EmptyLines | Self::SpacesStyle => LineBase::ZeroBased,
        }
    }
}

impl fmt::Display for CheckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A positioned, human-readable report of a rule violation.
///
/// Renders as `"<Severity>: <filename> line <line>: <message>"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Diagnostic {
    severity: Severity,
    check: CheckId,
    message: String,
    filename: String,
    line: usize,
    line_base: LineBase,
}

impl Diagnostic {
    /// Creates a diagnostic.
    #[must_use]
    pub fn new(
        severity: Severity,
        check: CheckId,
        message: impl Into<String>,
        filename: impl Into<String>,
        line: usize,
        line_base: LineBase,
    ) -> Self {
        Self {
            severity,
            check,
            message: message.into(),
            filename: filename.into(),
            line,
            line_base,
        }
    }

    /// Creates a warning.
    #[must_use]
    pub fn warning(
        check: CheckId,
        message: impl Into<String>,
        filename: impl Into<String>,
        line: usize,
        line_base: LineBase,
    ) -> Self {
        Self::new(Severity::Warning, check, message, filename, line, line_base)
    }

    /// Returns the severity.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the checker that produced this diagnostic.
    #[must_use]
    pub const fn check(&self) -> CheckId {
        self.check
    }

    /// Returns the message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the filename label.
    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Returns the line as reported by the checker; see [`Self::line_base`].
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Returns how [`Self::line`] should be read.
    #[must_use]
    pub const fn line_base(&self) -> LineBase {
        self.line_base
    }

    /// Returns the line converted to a one-based number.
    #[must_use]
    pub const fn one_based_line(&self) -> usize {
        self.line_base.to_one_based(self.line)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} line {}: {}",
            self.severity, self.filename, self.line, self.message
        )
    }
}
