//! Core data model for the jsstyle JavaScript style checker.
//!
//! This crate holds the types every checker reads and produces: the
//! immutable [`SourceModel`] wrapping one file, the lowered statement tree,
//! the token stream, and the [`Diagnostic`] value returned to callers. It
//! performs no parsing of its own; `jsstyle-syntax` builds source models
//! from text and tests may assemble them by hand.
//!
//! # Core types
//!
//! - [`SourceModel`] — text, line array, [`Program`], tokens and filename
//! - [`Position`] and [`Span`] — one-based lines, zero-based byte columns
//! - [`Statement`] and [`StatementKind`] — the closed statement variant set
//! - [`Token`] and [`TokenKind`] — lexical units with spans
//! - [`Diagnostic`], [`Severity`], [`LineBase`], [`CheckId`]
//!
//! # Example
//!
//! ```
//! use jsstyle_core::{CheckId, Diagnostic, LineBase};
//!
//! let warning = Diagnostic::warning(
//!     CheckId::MissingSemicolons,
//!     "Missing semicolon",
//!     "app.js",
//!     1,
//!     LineBase::OneBased,
//! );
//! assert_eq!(warning.to_string(), "Warning: app.js line 1: Missing semicolon");
//! ```

mod diagnostic;
mod source;
mod span;
mod token;
mod tree;

pub use diagnostic::{CheckId, Diagnostic, LineBase, Severity};
pub use source::{DEFAULT_FILENAME, SourceModel};
pub use span::{Position, Span};
pub use token::{Token, TokenKind};
pub use tree::{
    ClassDeclaration, ControlKeyword, ControlStatement, DeclarationKind, Declarator,
    FunctionDeclaration, Identifier, MethodDefinition, Program, Statement,
    StatementKind, VariableDeclaration,
};

#[cfg(test)]
mod tests;
