//! Tests for checker composition.

use jsstyle_config::{CheckerToggles, LintConfig, NamingPatterns};
use jsstyle_core::{CheckId, Diagnostic, SourceModel};
use rstest::{fixture, rstest};

use crate::{Checker, LintError, Linter, NameKind, lint};

fn model(source: &str) -> SourceModel {
    jsstyle_syntax::parse_source(source, "sample.js").expect("fixture should parse")
}

#[fixture]
fn recommended() -> LintConfig {
    LintConfig::recommended()
}

#[rstest]
fn all_flag_enables_checkers_in_fixed_order(recommended: LintConfig) {
    let linter = Linter::new(&recommended).expect("linter");
    let enabled: Vec<_> = linter.enabled().collect();
    assert_eq!(enabled, CheckId::all());
}

#[test]
fn default_configuration_enables_nothing() {
    let linter = Linter::new(&LintConfig::default()).expect("linter");
    assert_eq!(linter.enabled().count(), 0);
    assert!(linter.lint(&model("var X=1")).is_empty());
}

#[rstest]
#[case(CheckerToggles { missing_semicolons: true, ..CheckerToggles::default() }, CheckId::MissingSemicolons)]
#[case(CheckerToggles { empty_lines: true, ..CheckerToggles::default() }, CheckId::EmptyLines)]
#[case(CheckerToggles { spaces_style: true, ..CheckerToggles::default() }, CheckId::SpacesStyle)]
#[case(CheckerToggles { correct_naming: true, ..CheckerToggles::default() }, CheckId::CorrectNaming)]
fn single_flag_enables_single_checker(#[case] checkers: CheckerToggles, #[case] expected: CheckId) {
    let config = LintConfig {
        checkers,
        ..LintConfig::recommended()
    };
    let linter = Linter::new(&config).expect("linter");
    assert_eq!(linter.enabled().collect::<Vec<_>>(), [expected]);
}

#[rstest]
fn diagnostics_are_grouped_by_checker(recommended: LintConfig) {
    let source = model("var total=1\n\n\nclass widget {}\n");
    let checks: Vec<_> = Linter::new(&recommended)
        .expect("linter")
        .lint(&source)
        .iter()
        .map(Diagnostic::check)
        .collect();
    let mut sorted = checks.clone();
    sorted.sort();
    assert_eq!(checks, sorted);
    assert!(checks.contains(&CheckId::MissingSemicolons));
    assert!(checks.contains(&CheckId::EmptyLines));
    assert!(checks.contains(&CheckId::SpacesStyle));
    assert!(checks.contains(&CheckId::CorrectNaming));
}

#[rstest]
fn linting_is_repeatable(recommended: LintConfig) {
    let linter = Linter::new(&recommended).expect("linter");
    let source = model("var a=1\nlet B = a+1\n\n\n");
    assert_eq!(linter.lint(&source), linter.lint(&source));
}

#[test]
fn invalid_pattern_fails_before_linting() {
    let config = LintConfig {
        checkers: CheckerToggles::all_enabled(),
        naming_patterns: NamingPatterns {
            function: Some("[".to_owned()),
            ..NamingPatterns::default()
        },
        ..LintConfig::default()
    };
    let err = Linter::new(&config).expect_err("pattern is malformed");
    assert!(matches!(
        err,
        LintError::InvalidPattern {
            kind: NameKind::Function,
            ..
        }
    ));
    assert!(err.to_string().contains("invalid function naming pattern '['"));
}

#[test]
fn invalid_pattern_is_ignored_when_naming_is_disabled() {
    let config = LintConfig {
        checkers: CheckerToggles {
            missing_semicolons: true,
            ..CheckerToggles::default()
        },
        naming_patterns: NamingPatterns {
            class: Some("(".to_owned()),
            ..NamingPatterns::default()
        },
        ..LintConfig::default()
    };
    assert!(Linter::new(&config).is_ok());
}

#[rstest]
fn one_shot_lint_matches_linter(recommended: LintConfig) {
    let source = model("let a = 1\n");
    let expected = Linter::new(&recommended).expect("linter").lint(&source);
    assert_eq!(lint(&source, &recommended).expect("lint"), expected);
}

struct AlwaysWarn;

impl Checker for AlwaysWarn {
    fn id(&self) -> CheckId {
        CheckId::EmptyLines
    }

    fn check(&self, source: &SourceModel) -> Vec<Diagnostic> {
        vec![Diagnostic::warning(
            self.id(),
            "custom",
            source.filename(),
            0,
            self.id().line_base(),
        )]
    }
}

#[test]
fn explicit_checkers_run_in_given_order() {
    let linter = Linter::with_checkers(vec![Box::new(AlwaysWarn), Box::new(AlwaysWarn)]);
    let found = linter.lint(&model("a();"));
    assert_eq!(found.len(), 2);
    assert_eq!(
        found.first().map(ToString::to_string).as_deref(),
        Some("Warning: sample.js line 0: custom")
    );
}

#[test]
fn linter_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Linter>();
}
