//! Naming conventions for declarations.
//!
//! Patterns are compiled once, anchored so a name must match in full.
//! `var` declarations are additionally reported on their own, whatever
//! their names.

use std::fmt;

use jsstyle_config::NamingPatterns;
use jsstyle_core::{
    CheckId, DeclarationKind, Diagnostic, Identifier, SourceModel, Statement, StatementKind,
};
use regex::Regex;

use super::Checker;
use super::walk::walk_statements;
use crate::error::LintError;

const VAR_MESSAGE: &str = "shouldn't use Var";

/// Declaration kinds with a configurable naming pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameKind {
    /// `let` and `var` bindings.
    Variable,
    /// `const` bindings.
    Constant,
    /// Function declarations.
    Function,
    /// Class declarations.
    Class,
}

impl NameKind {
    /// Returns the label used in diagnostic messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Variable => "variable",
            Self::Constant => "const",
            Self::Function => "function",
            Self::Class => "class",
        }
    }
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug)]
struct NamePattern {
    configured: String,
    regex: Regex,
}

impl NamePattern {
    fn compile(kind: NameKind, configured: &str) -> Result<Self, LintError> {
        let regex = Regex::new(&format!("^(?:{configured})$"))
            .map_err(|err| LintError::invalid_pattern(kind, configured, err))?;
        Ok(Self {
            configured: configured.to_owned(),
            regex,
        })
    }
}

/// Checks declaration names against the configured patterns.
#[derive(Debug, Default)]
pub struct NamingChecker {
    variable: Option<NamePattern>,
    constant: Option<NamePattern>,
    function: Option<NamePattern>,
    class: Option<NamePattern>,
}

impl NamingChecker {
    /// Compiles the configured patterns. Missing patterns disable the
    /// matching sub-check.
    ///
    /// # Errors
    ///
    /// Returns [`LintError::InvalidPattern`] for the first pattern that is
    /// not a valid regular expression.
    pub fn new(patterns: &NamingPatterns) -> Result<Self, LintError> {
        let compile = |kind: NameKind, configured: Option<&str>| {
            configured
                .map(|pattern| NamePattern::compile(kind, pattern))
                .transpose()
        };
        Ok(Self {
            variable: compile(NameKind::Variable, patterns.variable.as_deref())?,
            constant: compile(NameKind::Constant, patterns.constant.as_deref())?,
            function: compile(NameKind::Function, patterns.function.as_deref())?,
            class: compile(NameKind::Class, patterns.class.as_deref())?,
        })
    }

    const fn pattern(&self, kind: NameKind) -> Option<&NamePattern> {
        match kind {
            NameKind::Variable => self.variable.as_ref(),
            NameKind::Constant => self.constant.as_ref(),
            NameKind::Function => self.function.as_ref(),
            NameKind::Class => self.class.as_ref(),
        }
    }

    fn check_name(
        &self,
        kind: NameKind,
        id: &Identifier,
        line: usize,
        emit: &mut impl FnMut(usize, String),
    ) {
        let Some(pattern) = self.pattern(kind) else {
            return;
        };
        if !pattern.regex.is_match(&id.name) {
            emit(
                line,
                format!(
                    "{} name {} not in pattern {}",
                    kind.label(),
                    id.name,
                    pattern.configured
                ),
            );
        }
    }

    fn check_statement(&self, statement: &Statement, emit: &mut impl FnMut(usize, String)) {
        let line = statement.span.start.line;
        match &statement.kind {
            StatementKind::Variable(declaration) => {
                if declaration.kind == DeclarationKind::Var {
                    emit(line, VAR_MESSAGE.to_owned());
                }
                let kind = match declaration.kind {
                    DeclarationKind::Const => NameKind::Constant,
                    DeclarationKind::Let | DeclarationKind::Var => NameKind::Variable,
                };
                for declarator in &declaration.declarators {
                    self.check_name(kind, &declarator.id, line, emit);
                }
            }
            StatementKind::Function(function) => {
                if let Some(id) = &function.id {
                    self.check_name(NameKind::Function, id, line, emit);
                }
            }
            StatementKind::Class(class) => {
                if let Some(id) = &class.id {
                    self.check_name(NameKind::Class, id, line, emit);
                }
            }
            _ => {}
        }
    }
}

impl Checker for NamingChecker {
    fn id(&self) -> CheckId {
        CheckId::CorrectNaming
    }

    fn check(&self, source: &SourceModel) -> Vec<Diagnostic> {
        let check = self.id();
        let mut diagnostics = Vec::new();
        let mut emit = |line: usize, message: String| {
            diagnostics.push(Diagnostic::warning(
                check,
                message,
                source.filename(),
                line,
                check.line_base(),
            ));
        };
        walk_statements(source.program().body(), &mut |statement: &Statement| {
            self.check_statement(statement, &mut emit);
        });
        diagnostics
    }
}
