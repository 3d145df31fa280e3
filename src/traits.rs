//! Capability traits for the pipeline's collaborators.
//!
//! The pipeline only talks to the script parser and the font lookup through
//! these traits, so tests can substitute implementations that return fixed
//! data and record call order instead of touching real scripts, fonts or the
//! scan cache.
//!
//! Production implementations live in [`crate::traits_impl`].

use assfc_fonts::Resolution;
use assfc_script::{FontDescriptor, ScriptParseError};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Works out which fonts a subtitle script needs.
pub trait FontExtractor {
    /// Return the fonts `script` requires.
    ///
    /// `exclude_unused` drops fonts that draw no glyphs; `exclude_comments`
    /// ignores commented-out event lines.
    fn extract(
        &self,
        script: &Path,
        exclude_unused: bool,
        exclude_comments: bool,
    ) -> Result<BTreeSet<FontDescriptor>, ScriptParseError>;
}

/// Builds font lookups and owns the persisted font-scan cache behind them.
pub trait FontBackend {
    type Lookup: FontLookup;

    /// Throw away the persisted scan cache so the next `open` rescans.
    fn discard_cache(&self) -> anyhow::Result<()>;

    /// Prepare a lookup over `font_dirs` (in priority order), plus the
    /// system registry when `include_system_fonts` is set.
    fn open(
        &self,
        font_dirs: &[PathBuf],
        include_system_fonts: bool,
    ) -> anyhow::Result<Self::Lookup>;
}

/// Maps font requirements to font files.
pub trait FontLookup {
    /// Batch lookup: split `requirements` into found and missing, and list
    /// the files of the found ones without duplicates.
    fn resolve(&self, requirements: &BTreeSet<FontDescriptor>) -> Resolution;
}
