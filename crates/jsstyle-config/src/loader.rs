//! Locating and decoding configuration files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::model::LintConfig;

/// File names probed by [`discover_config`], in priority order.
pub const CONFIG_FILE_NAMES: &[&str] = &["jsstyle.yaml", "jsstyle.yml", "jsstyle.json"];

/// Supported configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// YAML, decoded with `serde-saphyr`.
    Yaml,
    /// JSON, decoded with `serde_json`.
    Json,
}

impl ConfigFormat {
    /// Selects the format from a path's extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") {
            Some(Self::Yaml)
        } else if ext.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else {
            None
        }
    }
}

/// Returns the first configuration file present in `dir`.
#[must_use]
pub fn discover_config(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.is_file())
}

/// Reads and decodes the configuration file at `path`.
///
/// # Errors
///
/// Returns an error when the extension is not supported, the file cannot be
/// read, or its contents do not decode.
pub fn load_config(path: &Path) -> Result<LintConfig, ConfigError> {
    let format = ConfigFormat::from_path(path).ok_or_else(|| ConfigError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&contents, format, path)
}

/// Decodes configuration text; `origin` labels errors.
///
/// A document holding only whitespace or comments yields the defaults.
///
/// # Errors
///
/// Returns an error when the text does not decode in the given format.
pub fn parse_config(
    contents: &str,
    format: ConfigFormat,
    origin: &Path,
) -> Result<LintConfig, ConfigError> {
    if is_blank_document(contents, format) {
        return Ok(LintConfig::default());
    }

    match format {
        ConfigFormat::Yaml => {
            serde_saphyr::from_str(contents).map_err(|err| ConfigError::Yaml {
                path: origin.to_path_buf(),
                message: err.to_string(),
            })
        }
        ConfigFormat::Json => serde_json::from_str(contents).map_err(|source| ConfigError::Json {
            path: origin.to_path_buf(),
            source,
        }),
    }
}

fn is_blank_document(contents: &str, format: ConfigFormat) -> bool {
    match format {
        ConfigFormat::Yaml => contents.lines().all(|line| {
            let trimmed = line.trim();
            trimmed.is_empty() || trimmed.starts_with('#') || trimmed == "---"
        }),
        ConfigFormat::Json => contents.trim().is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("jsstyle.yaml", Some(ConfigFormat::Yaml))]
    #[case("conf/lint.YML", Some(ConfigFormat::Yaml))]
    #[case("jsstyle.json", Some(ConfigFormat::Json))]
    #[case("jsstyle.toml", None)]
    #[case("jsstyle", None)]
    fn format_follows_extension(#[case] path: &str, #[case] expected: Option<ConfigFormat>) {
        assert_eq!(ConfigFormat::from_path(Path::new(path)), expected);
    }

    #[rstest]
    #[case("", ConfigFormat::Yaml)]
    #[case("# nothing here\n---\n", ConfigFormat::Yaml)]
    #[case("  \n", ConfigFormat::Json)]
    fn blank_documents_yield_defaults(#[case] contents: &str, #[case] format: ConfigFormat) {
        let config = parse_config(contents, format, Path::new("blank")).expect("parse");
        assert_eq!(config, LintConfig::default());
    }

    #[test]
    fn json_errors_name_the_file() {
        let err = parse_config("{ not json", ConfigFormat::Json, Path::new("bad.json"))
            .expect_err("should fail");
        assert!(matches!(err, ConfigError::Json { .. }));
        assert_eq!(err.path(), Path::new("bad.json"));
    }
}
