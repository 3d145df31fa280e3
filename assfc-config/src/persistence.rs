//! Persisted settings: `config.json` next to the running executable.

use crate::{ConfigError, SettingsLayer};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the persisted settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Location of the persisted settings file for the running executable.
pub fn persisted_settings_path() -> Result<PathBuf, ConfigError> {
    let exe = std::env::current_exe().map_err(ConfigError::ExecutableDir)?;
    let dir = exe.parent().ok_or_else(|| {
        ConfigError::ExecutableDir(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("executable path {:?} has no parent directory", exe),
        ))
    })?;
    Ok(dir.join(CONFIG_FILE_NAME))
}

impl SettingsLayer {
    /// Read and decode a settings layer from a JSON file.
    ///
    /// A missing or unreadable file is an error, as is anything that is not
    /// a JSON object whose known keys have the expected types.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Decode a settings layer from JSON text.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TriState;
    use tempfile::TempDir;

    #[test]
    fn test_subset_of_keys() {
        let layer = SettingsLayer::from_json(r#"{"include_system_fonts": false}"#).unwrap();
        assert_eq!(layer.include_system_fonts, TriState::Off);
        assert_eq!(layer.font_dirs, None);
        assert_eq!(layer.verbose, TriState::Unset);
    }

    #[test]
    fn test_explicit_null_is_unset() {
        let layer =
            SettingsLayer::from_json(r#"{"font_dirs": null, "verbose": null, "log_file": null}"#)
                .unwrap();
        assert_eq!(layer, SettingsLayer::default());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let layer =
            SettingsLayer::from_json(r#"{"script": "x.ass", "rebuild_cache": true}"#).unwrap();
        assert_eq!(layer, SettingsLayer::default());
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        assert!(SettingsLayer::from_json(r#"{"font_dirs": "/usr/share/fonts"}"#).is_err());
        assert!(SettingsLayer::from_json("[1, 2]").is_err());
    }

    #[test]
    fn test_load_from_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = SettingsLayer::load_from(&temp_dir.path().join(CONFIG_FILE_NAME)).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_from_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "{ \"font_dirs\": [").unwrap();
        let err = SettingsLayer::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("malformed settings file"));
    }
}
