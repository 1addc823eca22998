//! Unit tests for the CLI runtime driven through [`run`].

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use rstest::{fixture, rstest};
use tempfile::TempDir;

use super::*;

const SEMICOLONS_ONLY: &str = r#"{ "checkers": { "missing_semicolons": true } }"#;

struct Outcome {
    exit: ExitCode,
    stdout: String,
    stderr: String,
}

#[fixture]
fn workspace() -> TempDir {
    TempDir::new().expect("temp dir")
}

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

fn invoke(args: &[&OsStr]) -> Outcome {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let argv = std::iter::once(OsString::from("jsstyle"))
        .chain(args.iter().map(|arg| (*arg).to_os_string()));
    let exit = run(argv, &mut stdout, &mut stderr, false);
    Outcome {
        exit,
        stdout: String::from_utf8(stdout).expect("utf8 stdout"),
        stderr: String::from_utf8(stderr).expect("utf8 stderr"),
    }
}

fn lint_human(config: &Path, paths: &[&Path]) -> Outcome {
    let mut args: Vec<&OsStr> = vec![
        OsStr::new("--output"),
        OsStr::new("human"),
        OsStr::new("--config"),
        config.as_os_str(),
    ];
    args.extend(paths.iter().map(|path| path.as_os_str()));
    invoke(&args)
}

#[test]
fn help_is_written_to_stdout() {
    let outcome = invoke(&[OsStr::new("--help")]);
    assert_eq!(outcome.exit, ExitCode::SUCCESS);
    assert!(outcome.stdout.contains("Usage"));
    assert!(outcome.stderr.is_empty());
}

#[rstest]
#[case(&["--output", "xml"])]
#[case(&["--no-such-flag"])]
fn usage_errors_exit_with_two(#[case] args: &[&str]) {
    let os_args: Vec<&OsStr> = args.iter().map(OsStr::new).collect();
    let outcome = invoke(&os_args);
    assert_eq!(outcome.exit, ExitCode::from(2));
    assert!(!outcome.stderr.is_empty());
}

#[rstest]
fn clean_file_reports_no_errors(workspace: TempDir) {
    let config = write(workspace.path(), "jsstyle.json", SEMICOLONS_ONLY);
    let file = write(workspace.path(), "ok.js", "let a = 1;\n");
    let outcome = lint_human(&config, &[&file]);
    assert_eq!(outcome.exit, ExitCode::SUCCESS);
    assert_eq!(outcome.stdout, "No linting errors found!\n");
}

#[rstest]
fn diagnostics_fail_the_run(workspace: TempDir) {
    let config = write(workspace.path(), "jsstyle.json", SEMICOLONS_ONLY);
    let file = write(workspace.path(), "app.js", "let a = 1\n");
    let outcome = lint_human(&config, &[&file]);
    assert_eq!(outcome.exit, ExitCode::FAILURE);
    assert_eq!(
        outcome.stdout,
        format!("Warning: {} line 1: Missing semicolon\n", file.display())
    );
}

#[rstest]
fn parse_failures_are_reported_and_skipped(workspace: TempDir) {
    let config = write(workspace.path(), "jsstyle.json", SEMICOLONS_ONLY);
    let broken = write(workspace.path(), "broken.js", "let = ;\n");
    let fine = write(workspace.path(), "fine.js", "run();\n");
    let outcome = lint_human(&config, &[&broken, &fine]);
    assert_eq!(outcome.exit, ExitCode::FAILURE);
    assert!(
        outcome
            .stderr
            .starts_with(&format!("Parsing error: {}: syntax error at line 1", broken.display()))
    );
    assert_eq!(outcome.stderr.matches("broken.js").count(), 1);
    assert!(outcome.stdout.is_empty());
}

#[rstest]
fn invalid_naming_pattern_is_a_configuration_error(workspace: TempDir) {
    let config = write(
        workspace.path(),
        "jsstyle.yaml",
        "checkers:\n  correct_naming: true\nnaming-patterns:\n  js-class-pattern: \"([A-Z]\"\n",
    );
    let file = write(workspace.path(), "app.js", "class A {}\n");
    let outcome = lint_human(&config, &[&file]);
    assert_eq!(outcome.exit, ExitCode::from(2));
    assert!(outcome.stderr.contains("invalid class naming pattern"));
}

#[rstest]
fn missing_paths_are_usage_errors(workspace: TempDir) {
    let config = write(workspace.path(), "jsstyle.json", SEMICOLONS_ONLY);
    let missing = workspace.path().join("absent");
    let outcome = lint_human(&config, &[&missing]);
    assert_eq!(outcome.exit, ExitCode::from(2));
    assert!(outcome.stderr.contains("does not exist"));
}

#[rstest]
fn unsupported_config_extension_is_rejected(workspace: TempDir) {
    let config = write(workspace.path(), "jsstyle.toml", "");
    let file = write(workspace.path(), "app.js", "a();\n");
    let outcome = lint_human(&config, &[&file]);
    assert_eq!(outcome.exit, ExitCode::from(2));
    assert!(outcome.stderr.contains("unsupported configuration format"));
}
