//! Error types

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading user settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file exists but could not be read.
    #[error("failed to read settings from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The settings file is not valid JSON for [`Settings`](crate::Settings).
    #[error("failed to parse settings from {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The settings parsed but hold unusable values.
    #[error("invalid settings: {0}")]
    Invalid(String),
}
