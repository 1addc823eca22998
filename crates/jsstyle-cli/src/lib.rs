//! Command-line runtime for the jsstyle linter.
//!
//! [`run`] parses arguments, installs logging, resolves the configuration,
//! collects the files to lint and renders the results. Files are parsed and
//! linted in parallel; results are reported in sorted path order. The IO
//! streams are parameters so tests can capture them.

use std::env;
use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use jsstyle::Linter;
use jsstyle_config::{LintConfig, discover_config, load_config};
use jsstyle_core::Diagnostic;
use jsstyle_syntax::{JsParser, SyntaxError};
use rayon::prelude::*;
use tracing::{debug, info};

mod cli;
mod discovery;
mod errors;
mod output;
mod telemetry;

use cli::Cli;
use errors::{AppError, FileError};
pub use output::{OutputFormat, ResolvedOutputFormat};
use output::{FileReport, Summary};

/// Runs the CLI using the provided arguments and IO handles.
///
/// Returns `0` for a clean run, `1` when any diagnostic or unreadable file
/// was reported and `2` for usage or configuration errors.
#[must_use]
pub fn run<I, W, E>(args: I, stdout: &mut W, stderr: &mut E, stdout_is_terminal: bool) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
{
    let result = Cli::try_parse_from(args)
        .map_err(AppError::CliUsage)
        .and_then(|cli| execute(&cli, stdout, stderr, stdout_is_terminal));

    match result {
        Ok(summary) => summary.exit_code(),
        Err(AppError::CliUsage(error)) if !error.use_stderr() => {
            drop(write!(stdout, "{error}"));
            ExitCode::SUCCESS
        }
        Err(error) => {
            drop(writeln!(stderr, "{error}"));
            error.exit_code()
        }
    }
}

fn execute<W: Write, E: Write>(
    cli: &Cli,
    stdout: &mut W,
    stderr: &mut E,
    stdout_is_terminal: bool,
) -> Result<Summary, AppError> {
    telemetry::initialise(&cli.log_filter, cli.log_format)?;
    let config = resolve_config(cli.config.as_deref())?;
    let linter = Linter::new(&config)?;
    let files = discovery::collect_files(&cli.paths)?;
    info!(target: "jsstyle::cli", files = files.len(), "linting");

    let reports = lint_files(&linter, &files);
    let summary = output::render(cli.output.resolve(stdout_is_terminal), &reports, stdout, stderr)?;
    info!(
        target: "jsstyle::cli",
        diagnostics = summary.diagnostics,
        failures = summary.failures,
        "lint finished"
    );
    Ok(summary)
}

/// Uses the explicit file, then a file discovered in the working directory,
/// then the recommended settings.
fn resolve_config(explicit: Option<&Path>) -> Result<LintConfig, AppError> {
    if let Some(path) = explicit {
        debug!(target: "jsstyle::cli", path = %path.display(), "loading configuration");
        return Ok(load_config(path)?);
    }
    let cwd = env::current_dir().map_err(AppError::WorkingDirectory)?;
    let Some(found) = discover_config(&cwd) else {
        debug!(target: "jsstyle::cli", "no configuration file; using recommended settings");
        return Ok(LintConfig::recommended());
    };
    debug!(target: "jsstyle::cli", path = %found.display(), "loading discovered configuration");
    Ok(load_config(&found)?)
}

fn lint_files(linter: &Linter, files: &[PathBuf]) -> Vec<FileReport> {
    files
        .par_iter()
        .map_init(JsParser::new, |state, path| {
            let label = path.display().to_string();
            let outcome = lint_file(linter, state, path, &label);
            if let Err(error) = &outcome {
                debug!(target: "jsstyle::cli", file = %label, %error, "file skipped");
            }
            FileReport { label, outcome }
        })
        .collect()
}

fn lint_file(
    linter: &Linter,
    state: &mut Result<JsParser, SyntaxError>,
    path: &Path,
    label: &str,
) -> Result<Vec<Diagnostic>, FileError> {
    let parser = state
        .as_mut()
        .map_err(|error| SyntaxError::parser_init(error.to_string()))?;
    let text = fs::read_to_string(path)?;
    let model = parser.parse_model(&text, label)?;
    Ok(linter.lint(&model))
}

#[cfg(test)]
mod tests;
