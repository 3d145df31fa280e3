//! Persistent font-scan cache.
//!
//! Scanning a font directory means opening and parsing every file in it, so
//! the face records from each source are kept in a JSON file between runs.
//! A directory entry is reused while its [`TreeStamp`] is unchanged; the
//! system registry entry is reused until the cache is discarded.

use super::stamp::TreeStamp;
use super::types::FaceRecord;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Bumped whenever the on-disk layout changes; older files are ignored.
const CACHE_VERSION: u32 = 2;

/// Cache key for the system font registry.
pub const SYSTEM_SOURCE: &str = "<system>";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedSource {
    /// Directory tree stamp at scan time, `None` for the system registry
    pub stamp: Option<TreeStamp>,
    pub faces: Vec<FaceRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontCache {
    version: u32,
    sources: BTreeMap<String, CachedSource>,
    #[serde(skip)]
    dirty: bool,
}

impl Default for FontCache {
    fn default() -> Self {
        Self {
            version: CACHE_VERSION,
            sources: BTreeMap::new(),
            dirty: false,
        }
    }
}

impl FontCache {
    /// Default cache location: `<cache dir>/assfc/font_cache.json`.
    pub fn default_path() -> PathBuf {
        dirs::cache_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("assfc")
            .join("font_cache.json")
    }

    /// Load the cache at `path`.
    ///
    /// A missing, unreadable, corrupt or outdated file yields an empty cache;
    /// the scan is simply redone.
    pub fn load(path: &Path) -> Self {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No font cache at {:?}", path);
                return Self::default();
            }
            Err(e) => {
                log::warn!("Failed to read font cache {:?}: {}", path, e);
                return Self::default();
            }
        };
        match serde_json::from_str::<Self>(&contents) {
            Ok(cache) if cache.version == CACHE_VERSION => {
                log::debug!("Loaded font cache with {} sources", cache.sources.len());
                cache
            }
            Ok(cache) => {
                log::info!(
                    "Ignoring font cache version {} (expected {})",
                    cache.version,
                    CACHE_VERSION
                );
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring corrupt font cache {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Write the cache to `path` if anything changed since it was loaded.
    pub fn save(&mut self, path: &Path) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create cache directory {:?}", parent))?;
        }
        let json = serde_json::to_string(self)?;

        // Write to a temp file then rename so a crash never leaves half a cache
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, json)
            .with_context(|| format!("Failed to write font cache {:?}", temp_path))?;
        fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to replace font cache {:?}", path))?;
        self.dirty = false;
        Ok(())
    }

    /// Delete the cache file at `path`. A missing file is not an error.
    pub fn discard(path: &Path) -> Result<()> {
        match fs::remove_file(path) {
            Ok(()) => {
                log::info!("Discarded font cache {:?}", path);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("Failed to discard font cache {:?}", path)),
        }
    }

    /// Cached faces for `key`, if the entry was scanned at `stamp`.
    pub fn get(&self, key: &str, stamp: Option<TreeStamp>) -> Option<&[FaceRecord]> {
        self.sources
            .get(key)
            .filter(|entry| entry.stamp == stamp)
            .map(|entry| entry.faces.as_slice())
    }

    pub fn insert(&mut self, key: &str, stamp: Option<TreeStamp>, faces: Vec<FaceRecord>) {
        self.sources
            .insert(key.to_string(), CachedSource { stamp, faces });
        self.dirty = true;
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn stamp(newest: u64) -> Option<TreeStamp> {
        Some(TreeStamp {
            newest,
            ..Default::default()
        })
    }

    fn face(path: &str) -> FaceRecord {
        FaceRecord {
            path: PathBuf::from(path),
            index: 0,
            families: vec!["Test Sans".to_string()],
            post_script_name: "TestSans-Regular".to_string(),
            weight: 400,
            italic: false,
        }
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("font_cache.json");

        let mut cache = FontCache::default();
        cache.insert("/fonts", stamp(42), vec![face("/fonts/a.ttf")]);
        cache.save(&path).unwrap();

        let loaded = FontCache::load(&path);
        assert_eq!(loaded.get("/fonts", stamp(42)).unwrap(), &[face("/fonts/a.ttf")]);
        assert!(!temp_dir.path().join("nested/font_cache.json.tmp").exists());
    }

    #[test]
    fn test_stale_entry_is_ignored() {
        let mut cache = FontCache::default();
        cache.insert("/fonts", stamp(42), vec![face("/fonts/a.ttf")]);
        assert!(cache.get("/fonts", stamp(43)).is_none());
        assert!(cache.get("/other", stamp(42)).is_none());
    }

    #[test]
    fn test_corrupt_file_gives_empty_cache() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("font_cache.json");
        fs::write(&path, "not json").unwrap();
        assert!(FontCache::load(&path).is_empty());
    }

    #[test]
    fn test_outdated_version_gives_empty_cache() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("font_cache.json");
        fs::write(&path, r#"{"version": 0, "sources": {"/x": {"stamp": null, "faces": []}}}"#)
            .unwrap();
        assert!(FontCache::load(&path).is_empty());
    }

    #[test]
    fn test_unchanged_cache_is_not_rewritten() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("font_cache.json");
        FontCache::default().save(&path).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_discard() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("font_cache.json");
        FontCache::discard(&path).unwrap();

        let mut cache = FontCache::default();
        cache.insert(SYSTEM_SOURCE, None, Vec::new());
        cache.save(&path).unwrap();
        assert!(path.exists());
        FontCache::discard(&path).unwrap();
        assert!(!path.exists());
    }
}
