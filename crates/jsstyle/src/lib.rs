//! Style checking engine for JavaScript sources.
//!
//! The engine evaluates four independent checkers against an immutable
//! [`SourceModel`](jsstyle_core::SourceModel):
//!
//! - [`SemicolonChecker`]: statements must end with `;`
//! - [`EmptyLineChecker`]: no doubled blank lines, no long runs of code
//! - [`SpacingChecker`]: whitespace around configured operators
//! - [`NamingChecker`]: declaration names must match configured patterns
//!
//! [`Linter`] composes the checkers enabled by a
//! [`LintConfig`](jsstyle_config::LintConfig), runs them in that fixed
//! order and concatenates their diagnostics.
//!
//! # Example
//!
//! ```
//! use jsstyle::Linter;
//! use jsstyle_config::LintConfig;
//!
//! let linter = Linter::new(&LintConfig::recommended())?;
//! let model = jsstyle_syntax::parse_source("let a = 1", "a.js")?;
//! let rendered: Vec<String> = linter.lint(&model).iter().map(ToString::to_string).collect();
//! assert_eq!(rendered, ["Warning: a.js line 1: Missing semicolon"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod checks;
mod error;
mod linter;

pub use checks::{
    Checker, EmptyLineChecker, NameKind, NamingChecker, SemicolonChecker, SpacingChecker,
    SpacingRule, SpacingSide,
};
pub use error::LintError;
pub use linter::{Linter, lint};

#[cfg(test)]
mod tests;
