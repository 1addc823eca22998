use crate::logging::LogFormat;

/// Default log filter expression used by the binary.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Default number of consecutive code lines allowed without a blank line.
pub const DEFAULT_MAX_CODE_LINES: usize = 9;

/// Default log filter expression used by the binary.
#[must_use]
pub const fn default_log_filter() -> &'static str {
    DEFAULT_LOG_FILTER
}

/// Default logging format for the binary.
#[must_use]
pub const fn default_log_format() -> LogFormat {
    LogFormat::Compact
}

/// Default blank-line threshold, used by serde when the key is absent.
#[must_use]
pub const fn default_max_code_lines() -> usize {
    DEFAULT_MAX_CODE_LINES
}
