//! Crate-level tests for jsstyle-syntax.
