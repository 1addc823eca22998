//! Statement termination.

use jsstyle_core::{CheckId, Diagnostic, SourceModel, Statement};
use tracing::trace;

use super::Checker;
use super::walk::walk_statements;

const MISSING_SEMICOLON: &str = "Missing semicolon";

/// Flags leaf statements whose last character is not `;`.
///
/// Statements with a body (functions, classes, blocks, control flow) are
/// descended into rather than checked themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SemicolonChecker;

impl SemicolonChecker {
    /// Creates the checker.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns whether a leaf statement is missing its semicolon, or `None`
    /// when its terminal byte cannot be located.
    fn is_unterminated(source: &SourceModel, statement: &Statement) -> Option<bool> {
        let end = statement.span.end;
        let column = end.column.checked_sub(1)?;
        let terminal = source.byte_at(end.line, column)?;
        Some(terminal != b';')
    }
}

impl Checker for SemicolonChecker {
    fn id(&self) -> CheckId {
        CheckId::MissingSemicolons
    }

    fn check(&self, source: &SourceModel) -> Vec<Diagnostic> {
        let check = self.id();
        let mut diagnostics = Vec::new();
        walk_statements(source.program().body(), &mut |statement: &Statement| {
            if statement.nested_body().is_some() {
                return;
            }
            match Self::is_unterminated(source, statement) {
                Some(true) => diagnostics.push(Diagnostic::warning(
                    check,
                    MISSING_SEMICOLON,
                    source.filename(),
                    statement.span.start.line,
                    check.line_base(),
                )),
                Some(false) => {}
                None => trace!(
                    target: "jsstyle::lint",
                    kind = statement.kind.type_name(),
                    line = statement.span.end.line,
                    "statement end outside source text"
                ),
            }
        });
        diagnostics
    }
}
