//! Serde model of the configuration file.

use jsstyle_core::CheckId;
use serde::{Deserialize, Serialize};

use crate::defaults::{DEFAULT_MAX_CODE_LINES, default_max_code_lines};

/// Complete linter configuration.
///
/// Every key is optional: missing checker flags disable the checker, a
/// missing threshold means [`DEFAULT_MAX_CODE_LINES`], missing operator
/// lists are empty and a missing naming pattern disables that check.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LintConfig {
    /// Which checkers run.
    pub checkers: CheckerToggles,
    /// Longest run of code lines allowed without a blank line. Zero disables
    /// the density check.
    #[serde(
        rename = "max-code-line-without-empty-lines",
        default = "default_max_code_lines"
    )]
    pub max_code_lines: usize,
    /// Operators that need or must not have surrounding spaces.
    #[serde(rename = "spaces-style")]
    pub spaces_style: SpacesStyle,
    /// Regular expressions identifiers must fully match.
    #[serde(rename = "naming-patterns")]
    pub naming_patterns: NamingPatterns,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            checkers: CheckerToggles::default(),
            max_code_lines: DEFAULT_MAX_CODE_LINES,
            spaces_style: SpacesStyle::default(),
            naming_patterns: NamingPatterns::default(),
        }
    }
}

impl LintConfig {
    /// Returns the configuration used when no file is found: every checker
    /// enabled with conventional JavaScript patterns and operator lists.
    #[must_use]
    pub fn recommended() -> Self {
        Self {
            checkers: CheckerToggles::all_enabled(),
            max_code_lines: DEFAULT_MAX_CODE_LINES,
            spaces_style: SpacesStyle {
                before: owned(&["+", "-"]),
                no_before: owned(&["==", "!="]),
                after: owned(&["=", ":"]),
                no_after: owned(&[","]),
            },
            naming_patterns: NamingPatterns {
                variable: Some("^[a-z][a-zA-Z0-9]*$".to_owned()),
                constant: Some("^[A-Z_]+$".to_owned()),
                function: Some("^[a-z][a-zA-Z0-9]*$".to_owned()),
                class: Some("^[A-Z][a-zA-Z0-9]*$".to_owned()),
            },
        }
    }

    /// Returns whether the given checker should run.
    #[must_use]
    pub const fn is_enabled(&self, check: CheckId) -> bool {
        self.checkers.is_enabled(check)
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_owned()).collect()
}

/// Per-checker switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CheckerToggles {
    /// Enables every checker regardless of the individual flags.
    pub all: bool,
    /// Enables statement termination checks.
    pub missing_semicolons: bool,
    /// Enables blank-line checks.
    pub empty_lines: bool,
    /// Enables operator spacing checks.
    pub spaces_style: bool,
    /// Enables naming convention checks.
    pub correct_naming: bool,
}

impl CheckerToggles {
    /// Returns toggles with `all` set.
    #[must_use]
    pub const fn all_enabled() -> Self {
        Self {
            all: true,
            missing_semicolons: true,
            empty_lines: true,
            spaces_style: true,
            correct_naming: true,
        }
    }

    /// Returns whether the given checker should run.
    #[must_use]
    pub const fn is_enabled(&self, check: CheckId) -> bool {
        self.all
            || match check {
                CheckId::MissingSemicolons => self.missing_semicolons,
                CheckId::EmptyLines => self.empty_lines,
                CheckId::SpacesStyle => self.spaces_style,
                CheckId::CorrectNaming => self.correct_naming,
            }
    }
}

/// Operator lists for the spacing checker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SpacesStyle {
    /// Operators that must be preceded by a space.
    pub before: Vec<String>,
    /// Operators that must not be preceded by a space.
    #[serde(rename = "no-before")]
    pub no_before: Vec<String>,
    /// Operators that must be followed by a space.
    pub after: Vec<String>,
    /// Operators that must not be followed by a space.
    #[serde(rename = "no-after")]
    pub no_after: Vec<String>,
}

impl SpacesStyle {
    /// Returns whether no operator is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.before.is_empty()
            && self.no_before.is_empty()
            && self.after.is_empty()
            && self.no_after.is_empty()
    }
}

/// Naming patterns, one per declaration kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct NamingPatterns {
    /// Pattern for `let` and `var` names.
    #[serde(rename = "js-variable-pattern")]
    pub variable: Option<String>,
    /// Pattern for `const` names.
    #[serde(rename = "js-const-variable-pattern")]
    pub constant: Option<String>,
    /// Pattern for function declaration names.
    #[serde(rename = "js-function-pattern")]
    pub function: Option<String>,
    /// Pattern for class declaration names.
    #[serde(rename = "js-class-pattern")]
    pub class: Option<String>,
}
