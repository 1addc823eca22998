//! Command-line argument definitions for the `jsstyle` binary.

use std::path::PathBuf;

use clap::Parser;
use jsstyle_config::{DEFAULT_LOG_FILTER, LogFormat};

use crate::output::OutputFormat;

/// Command-line interface for the JavaScript style linter.
#[derive(Parser, Debug)]
#[command(
    name = "jsstyle",
    version,
    about = "Checks JavaScript sources against configurable style conventions."
)]
pub(crate) struct Cli {
    /// Files or directories to lint. Directories are searched recursively.
    #[arg(value_name = "PATH", default_value = ".")]
    pub(crate) paths: Vec<PathBuf>,
    /// Configuration file (`.yaml`, `.yml` or `.json`). Without it,
    /// `jsstyle.yaml`, `jsstyle.yml` or `jsstyle.json` in the working
    /// directory is used, falling back to the recommended settings.
    #[arg(long, value_name = "FILE")]
    pub(crate) config: Option<PathBuf>,
    /// Controls how diagnostics are rendered.
    #[arg(long, value_enum, default_value_t = OutputFormat::Auto)]
    pub(crate) output: OutputFormat,
    /// Tracing filter directive for log output on stderr.
    #[arg(long, value_name = "FILTER", default_value = DEFAULT_LOG_FILTER)]
    pub(crate) log_filter: String,
    /// Log record format: `compact` or `json`.
    #[arg(long, value_name = "FORMAT", default_value_t = LogFormat::Compact)]
    pub(crate) log_format: LogFormat,
}
