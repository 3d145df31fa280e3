//! Font usage statistics for Advanced SubStation Alpha (ASS/SSA) scripts.
//!
//! Given a script, this crate works out which fonts its events are drawn
//! with, following style definitions and inline override tags (`\fn`, `\b`,
//! `\i`, `\r`, `\p`), and which characters each font has to render.
//!
//! The entry points are [`font_statistics`] for the full per-font usage and
//! [`required_fonts`] for just the set of [`FontDescriptor`]s.

pub mod error;
mod overrides;
pub mod parser;
pub mod types;

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

pub use error::ScriptParseError;
pub use parser::{Style, StyleTable, parse_statistics};
pub use types::{FontDescriptor, FontStatistics, FontUsage, WEIGHT_BOLD, WEIGHT_REGULAR};

/// Read a script file as UTF-8 text.
pub fn read_script(path: &Path) -> Result<String, ScriptParseError> {
    let bytes = fs::read(path).map_err(|source| ScriptParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|_| ScriptParseError::Encoding {
        path: path.to_path_buf(),
    })
}

/// Per-font usage for the script at `path`.
///
/// # Arguments
/// * `exclude_unused` - Drop fonts that end up drawing no characters
/// * `exclude_comments` - Skip `Comment:` event lines entirely
pub fn font_statistics(
    path: &Path,
    exclude_unused: bool,
    exclude_comments: bool,
) -> Result<FontStatistics, ScriptParseError> {
    let text = read_script(path)?;
    let mut stats = parse_statistics(&text, exclude_comments)?;
    if exclude_unused {
        stats.retain(|descriptor, usage| {
            if usage.is_unused() {
                log::debug!("Dropping unused font {}", descriptor);
                false
            } else {
                true
            }
        });
    }
    log::info!("Script {:?} uses {} fonts", path, stats.len());
    Ok(stats)
}

/// The set of fonts the script at `path` needs.
pub fn required_fonts(
    path: &Path,
    exclude_unused: bool,
    exclude_comments: bool,
) -> Result<BTreeSet<FontDescriptor>, ScriptParseError> {
    Ok(font_statistics(path, exclude_unused, exclude_comments)?
        .into_keys()
        .collect())
}
