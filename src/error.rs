/*
 * Error Module
 *
 * Errors raised by the application shell while loading settings overrides.
 * The simulation itself has no fallible operations.
 */

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or building a settings override.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file could not be read.
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings document is not valid JSON for an override.
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    /// A numeric setting was addressed by a name that does not exist.
    #[error("unknown setting `{0}`")]
    UnknownSetting(String),
}
