//! Crate-level tests for the linting engine.

mod behaviour;
mod linter_tests;
