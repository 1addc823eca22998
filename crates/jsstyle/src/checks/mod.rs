//! The built-in checkers.
//!
//! Each checker is a pure function of a [`SourceModel`]: it holds only
//! compiled configuration and never mutates the model, so one instance can
//! be shared across threads and run any number of times.

mod empty_lines;
mod naming;
mod semicolons;
mod spacing;
mod walk;

use jsstyle_core::{CheckId, Diagnostic, SourceModel};

pub use empty_lines::EmptyLineChecker;
pub use naming::{NameKind, NamingChecker};
pub use semicolons::SemicolonChecker;
pub use spacing::{SpacingChecker, SpacingRule, SpacingSide};

/// A single style check over one source model.
pub trait Checker: Send + Sync {
    /// Returns which checker this is.
    fn id(&self) -> CheckId;

    /// Returns the diagnostics for `source`, in scan order.
    fn check(&self, source: &SourceModel) -> Vec<Diagnostic>;
}
