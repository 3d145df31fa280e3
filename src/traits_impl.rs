//! Concrete implementations of the traits defined in [`crate::traits`].
//!
//! - [`FontExtractor`] on [`AssExtractor`], backed by `assfc-script`
//! - [`FontBackend`] on [`CachedFontBackend`], backed by `assfc-fonts` and
//!   its on-disk scan cache
//! - [`FontLookup`] on [`FontCollector`]

use crate::traits::{FontBackend, FontExtractor, FontLookup};
use assfc_fonts::{FontCache, FontCollector, Resolution};
use assfc_script::{FontDescriptor, ScriptParseError};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Reads ASS/SSA scripts from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssExtractor;

impl FontExtractor for AssExtractor {
    fn extract(
        &self,
        script: &Path,
        exclude_unused: bool,
        exclude_comments: bool,
    ) -> Result<BTreeSet<FontDescriptor>, ScriptParseError> {
        assfc_script::required_fonts(script, exclude_unused, exclude_comments)
    }
}

/// fontdb-backed lookups sharing one scan cache file.
#[derive(Debug, Clone)]
pub struct CachedFontBackend {
    cache_path: PathBuf,
}

impl CachedFontBackend {
    pub fn new(cache_path: impl Into<PathBuf>) -> Self {
        Self {
            cache_path: cache_path.into(),
        }
    }

    pub fn cache_path(&self) -> &Path {
        &self.cache_path
    }
}

impl Default for CachedFontBackend {
    fn default() -> Self {
        Self::new(FontCache::default_path())
    }
}

impl FontBackend for CachedFontBackend {
    type Lookup = FontCollector;

    fn discard_cache(&self) -> anyhow::Result<()> {
        FontCache::discard(&self.cache_path)
    }

    fn open(
        &self,
        font_dirs: &[PathBuf],
        include_system_fonts: bool,
    ) -> anyhow::Result<FontCollector> {
        FontCollector::open(&self.cache_path, font_dirs, include_system_fonts)
    }
}

impl FontLookup for FontCollector {
    fn resolve(&self, requirements: &BTreeSet<FontDescriptor>) -> Resolution {
        FontCollector::resolve(self, requirements)
    }
}
