//! Behaviour-driven step definitions for linting scenarios.

mod scenarios;

use std::cell::RefCell;
use std::str::FromStr;

use jsstyle_config::LintConfig;
use jsstyle_core::Diagnostic;
use rstest::fixture;
use rstest_bdd_macros::{given, then, when};

use crate::Linter;

// =============================================================================
// Step parameters
// =============================================================================

/// A quoted string from a feature file, with `\n` escapes expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
struct QuotedString(String);

impl FromStr for QuotedString {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim_matches('"').replace("\\n", "\n")))
    }
}

impl QuotedString {
    fn as_str(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// Test World
// =============================================================================

/// State shared across steps.
#[derive(Default)]
struct TestWorld {
    /// Configuration assembled by the given steps.
    config: LintConfig,
    /// Diagnostics from the last lint run.
    diagnostics: Vec<Diagnostic>,
}

#[fixture]
fn world() -> RefCell<TestWorld> {
    RefCell::new(TestWorld::default())
}

// =============================================================================
// Given Steps
// =============================================================================

#[given("the recommended configuration")]
fn given_recommended(world: &RefCell<TestWorld>) {
    world.borrow_mut().config = LintConfig::recommended();
}

#[given("the {checker} checker is enabled")]
fn given_checker_enabled(world: &RefCell<TestWorld>, checker: QuotedString) {
    let mut w = world.borrow_mut();
    let toggles = &mut w.config.checkers;
    match checker.as_str() {
        "missing_semicolons" => toggles.missing_semicolons = true,
        "empty_lines" => toggles.empty_lines = true,
        "spaces_style" => toggles.spaces_style = true,
        "correct_naming" => toggles.correct_naming = true,
        other => panic!("unknown checker: {other}"),
    }
}

#[given("the constant pattern {pattern}")]
fn given_constant_pattern(world: &RefCell<TestWorld>, pattern: QuotedString) {
    world.borrow_mut().config.naming_patterns.constant = Some(pattern.as_str().to_owned());
}

#[given("the variable pattern {pattern}")]
fn given_variable_pattern(world: &RefCell<TestWorld>, pattern: QuotedString) {
    world.borrow_mut().config.naming_patterns.variable = Some(pattern.as_str().to_owned());
}

#[given("the empty line threshold is {threshold}")]
fn given_threshold(world: &RefCell<TestWorld>, threshold: usize) {
    world.borrow_mut().config.max_code_lines = threshold;
}

#[given("the {side} spacing operators {operators}")]
fn given_spacing_operators(world: &RefCell<TestWorld>, side: QuotedString, operators: QuotedString) {
    let mut w = world.borrow_mut();
    let style = &mut w.config.spaces_style;
    let list = match side.as_str() {
        "before" => &mut style.before,
        "no-before" => &mut style.no_before,
        "after" => &mut style.after,
        "no-after" => &mut style.no_after,
        other => panic!("unknown spacing side: {other}"),
    };
    list.extend(operators.as_str().split_whitespace().map(str::to_owned));
}

// =============================================================================
// When Steps
// =============================================================================

#[when("the source {source} is linted")]
fn when_source_linted(world: &RefCell<TestWorld>, source: QuotedString) {
    let mut w = world.borrow_mut();
    let linter = Linter::new(&w.config).expect("configuration should compile");
    let model = jsstyle_syntax::parse_source(source.as_str(), jsstyle_core::DEFAULT_FILENAME)
        .expect("source should parse");
    w.diagnostics = linter.lint(&model);
}

// =============================================================================
// Then Steps
// =============================================================================

#[then("the diagnostic count is {count}")]
fn then_count(world: &RefCell<TestWorld>, count: usize) {
    let w = world.borrow();
    assert_eq!(
        w.diagnostics.len(),
        count,
        "diagnostics: {:?}",
        w.diagnostics
    );
}

#[then("diagnostic {index} reads {rendered}")]
fn then_diagnostic_reads(world: &RefCell<TestWorld>, index: usize, rendered: QuotedString) {
    let w = world.borrow();
    let diagnostic = w
        .diagnostics
        .get(index.saturating_sub(1))
        .expect("diagnostic should exist");
    assert_eq!(diagnostic.to_string(), rendered.as_str());
}

#[then("every diagnostic says {message}")]
fn then_every_message(world: &RefCell<TestWorld>, message: QuotedString) {
    let w = world.borrow();
    assert!(!w.diagnostics.is_empty(), "expected diagnostics");
    for diagnostic in &w.diagnostics {
        assert_eq!(diagnostic.message(), message.as_str());
    }
}
