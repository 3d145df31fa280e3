//! Settings layers and the resolved settings record.

use crate::TriState;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One partially specified layer of settings.
///
/// The persisted `config.json` deserializes straight into this type; any
/// subset of keys is allowed and unknown keys are ignored. The invocation
/// layer uses the same type, built from command-line flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsLayer {
    /// Font directories in search-priority order
    pub font_dirs: Option<Vec<PathBuf>>,
    /// Search the system font registry
    pub include_system_fonts: TriState,
    /// Debug-level logging
    pub verbose: TriState,
    /// Drop fonts that no visible text uses
    pub exclude_unused_fonts: TriState,
    /// Ignore `Comment:` event lines
    pub exclude_comments: TriState,
    /// Write log output here instead of stderr
    pub log_file: Option<PathBuf>,
    /// One-shot directories appended after `font_dirs`
    pub additional_font_dirs: Option<Vec<PathBuf>>,
    /// Pass-through for external consumers
    pub output_location: Option<PathBuf>,
}

/// The invocation layer: everything the user passed on this run.
///
/// `script` and `rebuild_cache` are always concrete here. The command-line
/// parser refuses to run without a script, and `--rebuild-cache` is a plain
/// switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub script: PathBuf,
    pub rebuild_cache: bool,
    pub layer: SettingsLayer,
}

impl Invocation {
    /// An invocation that specifies nothing beyond the script.
    pub fn new(script: impl Into<PathBuf>) -> Self {
        Self {
            script: script.into(),
            rebuild_cache: false,
            layer: SettingsLayer::default(),
        }
    }
}

/// The single resolved settings record consumed by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub font_dirs: Vec<PathBuf>,
    pub include_system_fonts: bool,
    pub verbose: bool,
    pub exclude_unused_fonts: bool,
    pub exclude_comments: bool,
    pub log_file: Option<PathBuf>,
    pub script: PathBuf,
    pub rebuild_cache: bool,
    /// Not read by the pipeline.
    pub output_location: Option<PathBuf>,
}
