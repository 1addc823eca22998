//! Scenario bindings for the linting feature file.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::scenario;

use super::TestWorld;

/// Fixture providing the shared BDD world.
#[fixture]
fn world() -> RefCell<TestWorld> {
    super::world()
}

#[scenario(
    path = "tests/features/linting.feature",
    name = "Missing semicolon is reported on its line"
)]
fn missing_semicolon_reported(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/linting.feature",
    name = "Terminated statements pass"
)]
fn terminated_statements_pass(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/linting.feature",
    name = "Var declarations are always discouraged"
)]
fn var_always_discouraged(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/linting.feature",
    name = "Constants must match the constant pattern"
)]
fn constants_match_pattern(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/linting.feature",
    name = "Variable patterns must match the whole name"
)]
fn variable_pattern_full_match(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/linting.feature",
    name = "Doubled blank lines are reported"
)]
fn doubled_blank_lines(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/linting.feature",
    name = "Long runs of code are reported"
)]
fn long_code_runs(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/linting.feature",
    name = "Operators need surrounding spaces"
)]
fn operators_need_spaces(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/linting.feature",
    name = "Comparison is not mistaken for assignment"
)]
fn comparison_not_assignment(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/linting.feature",
    name = "Clean code passes the recommended configuration"
)]
fn clean_code_recommended(world: RefCell<TestWorld>) {
    drop(world);
}
