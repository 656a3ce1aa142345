//! Error types.

use std::path::PathBuf;

/// Failures loading or validating a `GameConfig`.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config text is not valid JSON for `GameConfig`
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds a value the controller cannot run with
    #[error("invalid config value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}
