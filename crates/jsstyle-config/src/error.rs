//! Errors raised while loading configuration files.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading or decoding a configuration file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read configuration '{path}': {source}")]
    Read {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid YAML for the configuration schema.
    #[error("invalid YAML configuration '{path}': {message}")]
    Yaml {
        /// Path of the configuration file.
        path: PathBuf,
        /// Decoder message.
        message: String,
    },

    /// The file is not valid JSON for the configuration schema.
    #[error("invalid JSON configuration '{path}': {source}")]
    Json {
        /// Path of the configuration file.
        path: PathBuf,
        /// Decoder failure.
        #[source]
        source: serde_json::Error,
    },

    /// The file extension names no supported format.
    #[error("unsupported configuration format '{path}': expected .yaml, .yml or .json")]
    UnsupportedFormat {
        /// Path of the configuration file.
        path: PathBuf,
    },
}

impl ConfigError {
    /// Returns the path of the file that failed to load.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Read { path, .. }
            | Self::Yaml { path, .. }
            | Self::Json { path, .. }
            | Self::UnsupportedFormat { path } => path,
        }
    }
}
