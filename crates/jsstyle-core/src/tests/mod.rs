//! Unit tests for `jsstyle_core` types.

mod diagnostic_tests;
