//! Typed error variants for the assfc-config crate.
//!
//! Every variant is fatal for the invocation: the caller reports it and exits
//! before any font work starts.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while locating or reading the persisted settings.
///
/// # Example
///
/// ```rust,no_run
/// use assfc_config::ConfigError;
///
/// fn describe(e: &ConfigError) -> &'static str {
///     match e {
///         ConfigError::ExecutableDir(_) => "cannot locate program directory",
///         ConfigError::Io { .. } => "cannot read config.json",
///         ConfigError::Parse { .. } => "config.json is not valid settings JSON",
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The directory holding the running executable could not be determined.
    #[error("cannot determine program directory: {0}")]
    ExecutableDir(#[source] std::io::Error),

    /// The settings file exists but could not be read (or does not exist).
    #[error("cannot read settings file '{}': {source}", path.display())]
    Io {
        /// Path of the settings file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not a JSON object matching the settings fields.
    #[error("malformed settings file '{}': {source}", path.display())]
    Parse {
        /// Path of the settings file.
        path: PathBuf,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },
}
