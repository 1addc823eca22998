//! Tests for diagnostic rendering and line bases.

use rstest::rstest;

use crate::{CheckId, Diagnostic, LineBase, Severity};

#[rstest]
#[case::warning(Severity::Warning, "Warning: no_filename line 1: Missing semicolon")]
#[case::error(Severity::Error, "Error: no_filename line 1: Missing semicolon")]
fn diagnostic_renders_with_severity_prefix(#[case] severity: Severity, #[case] expected: &str) {
    let diagnostic = Diagnostic::new(
        severity,
        CheckId::MissingSemicolons,
        "Missing semicolon",
        "no_filename",
        1,
        LineBase::OneBased,
    );
    assert_eq!(diagnostic.to_string(), expected);
}

#[test]
fn zero_based_line_renders_raw_index() {
    let diagnostic = Diagnostic::warning(
        CheckId::EmptyLines,
        "Extra empty line",
        "app.js",
        0,
        LineBase::ZeroBased,
    );
    assert_eq!(diagnostic.to_string(), "Warning: app.js line 0: Extra empty line");
    assert_eq!(diagnostic.one_based_line(), 1);
}

#[rstest]
#[case(CheckId::MissingSemicolons, LineBase::OneBased)]
#[case(CheckId::CorrectNaming, LineBase::OneBased)]
#[case(CheckId::EmptyLines, LineBase::ZeroBased)]
#[case(CheckId::SpacesStyle, LineBase::ZeroBased)]
fn each_checker_declares_its_line_base(#[case] check: CheckId, #[case] expected: LineBase) {
    assert_eq!(check.line_base(), expected);
}

#[test]
fn check_ids_follow_invocation_order() {
    let names: Vec<&str> = CheckId::all().iter().map(|id| id.as_str()).collect();
    assert_eq!(
        names,
        ["missing_semicolons", "empty_lines", "spaces_style", "correct_naming"]
    );
}

#[test]
fn diagnostic_serialises_check_and_line_base() {
    let diagnostic = Diagnostic::warning(
        CheckId::SpacesStyle,
        "Remove space before ==",
        "app.js",
        0,
        LineBase::ZeroBased,
    );
    let json = serde_json::to_string(&diagnostic).expect("serialise");
    assert!(json.contains("\"check\":\"spaces_style\""), "{json}");
    assert!(json.contains("\"line_base\":\"zero_based\""), "{json}");
    assert!(json.contains("\"severity\":\"warning\""), "{json}");
}
