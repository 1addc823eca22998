//! Configuration for the jsstyle linter.
//!
//! [`LintConfig`] mirrors the on-disk configuration file: which checkers run,
//! the blank-line threshold, the operator spacing lists and the naming
//! patterns. Files are YAML (`.yaml`/`.yml`) or JSON (`.json`); every key is
//! optional and falls back to the defaults documented on each field.
//!
//! The crate also carries the logging settings shared with the binary.

mod defaults;
mod error;
mod loader;
mod logging;
mod model;

pub use defaults::{
    DEFAULT_LOG_FILTER, DEFAULT_MAX_CODE_LINES, default_log_filter, default_log_format,
    default_max_code_lines,
};
pub use error::ConfigError;
pub use loader::{CONFIG_FILE_NAMES, ConfigFormat, discover_config, load_config, parse_config};
pub use logging::{LogFormat, LogFormatParseError};
pub use model::{CheckerToggles, LintConfig, NamingPatterns, SpacesStyle};
