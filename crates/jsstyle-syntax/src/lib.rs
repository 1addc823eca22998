//! Tree-sitter powered JavaScript front end for jsstyle.
//!
//! This crate turns raw JavaScript text into the immutable
//! [`SourceModel`](jsstyle_core::SourceModel) the checkers operate on:
//!
//! - **Parsing** via [`JsParser`], a thin wrapper over the Tree-sitter
//!   JavaScript grammar (JSX included) with structured syntax errors
//! - **Lowering** of the concrete syntax tree into the closed statement enum
//!   of `jsstyle-core`
//! - **Tokenising** every leaf of the tree into a positioned token stream
//!
//! Malformed sources are rejected with [`SyntaxError::InvalidSource`], so
//! the checkers never see a partial tree.
//!
//! # Example
//!
//! ```
//! use jsstyle_syntax::parse_source;
//!
//! let model = parse_source("let answer = 42;", "answer.js")?;
//! assert_eq!(model.program().body().len(), 1);
//! assert_eq!(model.filename(), "answer.js");
//! # Ok::<(), jsstyle_syntax::SyntaxError>(())
//! ```

mod error;
mod language;
mod lower;
mod parser;
mod position;
mod tokens;

pub use error::SyntaxError;
pub use language::{JAVASCRIPT_EXTENSIONS, is_javascript_extension, is_javascript_path};
pub use parser::{JsParser, ParseResult, SyntaxErrorInfo, parse_source};

#[cfg(test)]
mod tests;
