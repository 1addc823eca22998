//! Composition of the enabled checkers.

use std::fmt;

use jsstyle_config::LintConfig;
use jsstyle_core::{CheckId, Diagnostic, SourceModel};
use tracing::debug;

use crate::checks::{Checker, EmptyLineChecker, NamingChecker, SemicolonChecker, SpacingChecker};
use crate::error::LintError;

/// Runs the enabled checkers over source models.
///
/// Checkers run in [`CheckId::all`] order and their diagnostics are
/// concatenated. A linter holds only compiled configuration, so one instance
/// can serve many files and threads.
pub struct Linter {
    checkers: Vec<Box<dyn Checker>>,
}

impl Linter {
    /// Compiles `config` into the enabled checkers.
    ///
    /// # Errors
    ///
    /// Returns an error when a naming pattern of an enabled naming checker
    /// is not a valid regular expression.
    pub fn new(config: &LintConfig) -> Result<Self, LintError> {
        let mut checkers: Vec<Box<dyn Checker>> = Vec::new();
        for check in CheckId::all().iter().copied() {
            if !config.is_enabled(check) {
                continue;
            }
            checkers.push(build_checker(check, config)?);
        }
        let linter = Self { checkers };
        debug!(
            target: "jsstyle::lint",
            enabled = ?linter.enabled().collect::<Vec<_>>(),
            "linter ready"
        );
        Ok(linter)
    }

    /// Builds a linter from explicit checkers, run in the given order.
    #[must_use]
    pub fn with_checkers(checkers: Vec<Box<dyn Checker>>) -> Self {
        Self { checkers }
    }

    /// Returns the enabled checkers in invocation order.
    pub fn enabled(&self) -> impl Iterator<Item = CheckId> + '_ {
        self.checkers.iter().map(|checker| checker.id())
    }

    /// Lints one source model.
    #[must_use]
    pub fn lint(&self, source: &SourceModel) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for checker in &self.checkers {
            let found = checker.check(source);
            debug!(
                target: "jsstyle::lint",
                file = source.filename(),
                check = %checker.id(),
                count = found.len(),
                "checker finished"
            );
            diagnostics.extend(found);
        }
        diagnostics
    }
}

impl fmt::Debug for Linter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Linter")
            .field("enabled", &self.enabled().collect::<Vec<_>>())
            .finish()
    }
}

fn build_checker(check: CheckId, config: &LintConfig) -> Result<Box<dyn Checker>, LintError> {
    Ok(match check {
        CheckId::MissingSemicolons => Box::new(SemicolonChecker::new()),
        CheckId::EmptyLines => Box::new(EmptyLineChecker::new(config.max_code_lines)),
        CheckId::SpacesStyle => Box::new(SpacingChecker::new(&config.spaces_style)),
        CheckId::CorrectNaming => Box::new(NamingChecker::new(&config.naming_patterns)?),
    })
}

/// Lints one source model with a one-shot linter built from `config`.
///
/// # Errors
///
/// Returns an error when the configuration does not compile; see
/// [`Linter::new`].
pub fn lint(source: &SourceModel, config: &LintConfig) -> Result<Vec<Diagnostic>, LintError> {
    Ok(Linter::new(config)?.lint(source))
}
