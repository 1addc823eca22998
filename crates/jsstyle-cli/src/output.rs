//! Rendering of lint results.
//!
//! Diagnostics go to stdout, either one rendered line each or as a JSON
//! array of `{file, diagnostics}` objects. Files that could not be linted
//! are reported on stderr in both modes.

use std::io::Write;
use std::process::ExitCode;

use clap::ValueEnum;
use jsstyle_core::Diagnostic;
use serde::Serialize;

use crate::errors::{AppError, FileError};

/// Printed by the human renderer when a run finds nothing.
pub(crate) const CLEAN_MESSAGE: &str = "No linting errors found!";

/// Output format selection for lint results.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Selects `human` for terminal output and `json` for redirected output.
    #[default]
    Auto,
    /// Always render one diagnostic per line.
    Human,
    /// Always emit a JSON document.
    Json,
}

/// Output format after resolving `auto` based on TTY detection.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResolvedOutputFormat {
    /// One rendered diagnostic per line.
    Human,
    /// A JSON array grouped by file.
    Json,
}

impl OutputFormat {
    /// Resolves the output format based on whether stdout is a terminal.
    #[must_use]
    pub const fn resolve(self, stdout_is_terminal: bool) -> ResolvedOutputFormat {
        match self {
            Self::Auto => {
                if stdout_is_terminal {
                    ResolvedOutputFormat::Human
                } else {
                    ResolvedOutputFormat::Json
                }
            }
            Self::Human => ResolvedOutputFormat::Human,
            Self::Json => ResolvedOutputFormat::Json,
        }
    }
}

/// The outcome of linting one file.
#[derive(Debug)]
pub(crate) struct FileReport {
    pub(crate) label: String,
    pub(crate) outcome: Result<Vec<Diagnostic>, FileError>,
}

/// Totals over a rendered run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Summary {
    pub(crate) diagnostics: usize,
    pub(crate) failures: usize,
}

impl Summary {
    fn of(reports: &[FileReport]) -> Self {
        reports
            .iter()
            .fold(Self::default(), |summary, report| match &report.outcome {
                Ok(found) => Self {
                    diagnostics: summary.diagnostics + found.len(),
                    ..summary
                },
                Err(_) => Self {
                    failures: summary.failures + 1,
                    ..summary
                },
            })
    }

    pub(crate) const fn is_clean(self) -> bool {
        self.diagnostics == 0 && self.failures == 0
    }

    pub(crate) const fn exit_code(self) -> ExitCode {
        if self.is_clean() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

#[derive(Serialize)]
struct FileEntry<'a> {
    file: &'a str,
    diagnostics: &'a [Diagnostic],
}

/// Writes `reports` in `format` and returns the run totals.
pub(crate) fn render<W: Write, E: Write>(
    format: ResolvedOutputFormat,
    reports: &[FileReport],
    stdout: &mut W,
    stderr: &mut E,
) -> Result<Summary, AppError> {
    let summary = Summary::of(reports);
    report_failures(reports, stderr)?;
    match format {
        ResolvedOutputFormat::Human => render_human(reports, summary, stdout)?,
        ResolvedOutputFormat::Json => render_json(reports, stdout)?,
    }
    Ok(summary)
}

fn report_failures<E: Write>(reports: &[FileReport], stderr: &mut E) -> Result<(), AppError> {
    for report in reports {
        if let Err(error) = &report.outcome {
            writeln!(stderr, "{}: {}: {error}", error.label(), report.label)?;
        }
    }
    Ok(())
}

fn render_human<W: Write>(
    reports: &[FileReport],
    summary: Summary,
    stdout: &mut W,
) -> Result<(), AppError> {
    for diagnostic in reports
        .iter()
        .filter_map(|report| report.outcome.as_ref().ok())
        .flatten()
    {
        writeln!(stdout, "{diagnostic}")?;
    }
    if summary.is_clean() {
        writeln!(stdout, "{CLEAN_MESSAGE}")?;
    }
    Ok(())
}

fn render_json<W: Write>(reports: &[FileReport], stdout: &mut W) -> Result<(), AppError> {
    let entries: Vec<FileEntry<'_>> = reports
        .iter()
        .filter_map(|report| {
            let diagnostics = report.outcome.as_ref().ok()?;
            Some(FileEntry {
                file: &report.label,
                diagnostics,
            })
        })
        .collect();
    serde_json::to_writer_pretty(&mut *stdout, &entries).map_err(AppError::Serialise)?;
    writeln!(stdout)?;
    Ok(())
}
