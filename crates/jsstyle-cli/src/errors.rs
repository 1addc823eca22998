//! Error types for the CLI runtime.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use jsstyle::LintError;
use jsstyle_config::ConfigError;
use jsstyle_syntax::SyntaxError;
use thiserror::Error;

use crate::telemetry::TelemetryError;

/// Exit status for usage and configuration errors.
const USAGE_EXIT: u8 = 2;

/// Failures that stop a run before or while reporting.
#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("{0}")]
    CliUsage(clap::Error),
    #[error("failed to initialise logging: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("failed to determine the working directory: {0}")]
    WorkingDirectory(io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Lint(#[from] LintError),
    #[error("path '{}' does not exist", path.display())]
    MissingPath { path: PathBuf },
    #[error("failed to serialise diagnostics: {0}")]
    Serialise(serde_json::Error),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl AppError {
    /// Maps the error onto the process exit status.
    pub(crate) fn exit_code(&self) -> ExitCode {
        match self {
            Self::Output(_) | Self::Serialise(_) => ExitCode::FAILURE,
            Self::CliUsage(_)
            | Self::Telemetry(_)
            | Self::WorkingDirectory(_)
            | Self::Config(_)
            | Self::Lint(_)
            | Self::MissingPath { .. } => ExitCode::from(USAGE_EXIT),
        }
    }
}

/// Why a single file could not be linted. The run continues with other files.
#[derive(Debug, Error)]
pub(crate) enum FileError {
    #[error("failed to read file: {0}")]
    Read(#[from] io::Error),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

impl FileError {
    /// Returns the prefix used when reporting the failure.
    pub(crate) const fn label(&self) -> &'static str {
        match self {
            Self::Read(_) => "Reading error",
            Self::Syntax(_) => "Parsing error",
        }
    }
}
