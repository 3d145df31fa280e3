//! Built-in baseline settings.

use std::path::PathBuf;

/// The lowest-precedence settings layer.
///
/// Unlike [`SettingsLayer`](crate::SettingsLayer), every tri-state option here
/// is a plain `bool`, so resolution can never end up unspecified. Build it
/// once at startup and pass it by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    pub font_dirs: Vec<PathBuf>,
    pub include_system_fonts: bool,
    pub verbose: bool,
    pub exclude_unused_fonts: bool,
    pub exclude_comments: bool,
    pub log_file: Option<PathBuf>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            font_dirs: Vec::new(),
            include_system_fonts: true,
            verbose: false,
            exclude_unused_fonts: false,
            exclude_comments: false,
            log_file: None,
        }
    }
}
