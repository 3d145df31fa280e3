//! Font lookup over an ordered list of font sources.
//!
//! This module provides:
//! - Face discovery in font directories and the system registry (via fontdb)
//! - A persistent scan cache so unchanged sources are not re-read
//! - Batch resolution of script font requirements to font files

mod cache;
mod matching;
mod scan;
mod stamp;
mod types;

use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use assfc_script::FontDescriptor;

pub use cache::{CachedSource, FontCache, SYSTEM_SOURCE};
pub use matching::best_match;
pub use stamp::{TreeStamp, tree_stamp};
pub use types::{FaceRecord, Resolution};

/// Resolves font requirements against a fixed set of faces.
///
/// Faces are kept in source priority order: each font directory in the
/// order given, then the system registry. Earlier sources win ties.
#[derive(Debug, Clone, Default)]
pub struct FontCollector {
    faces: Vec<FaceRecord>,
}

impl FontCollector {
    /// Collect faces from `font_dirs` and, optionally, the system registry.
    ///
    /// # Arguments
    /// * `cache_path` - Scan cache to read and update
    /// * `font_dirs` - Directories to search, in priority order
    /// * `include_system_fonts` - Also search the platform's installed fonts
    pub fn open(
        cache_path: &Path,
        font_dirs: &[PathBuf],
        include_system_fonts: bool,
    ) -> Result<Self> {
        let mut cache = FontCache::load(cache_path);
        let mut faces = Vec::new();
        let mut seen = HashSet::new();

        for dir in font_dirs {
            let dir = std::path::absolute(dir)
                .with_context(|| format!("Failed to resolve font directory {:?}", dir))?;
            let key = dir.to_string_lossy().into_owned();
            if !seen.insert(key.clone()) {
                continue;
            }
            if !dir.is_dir() {
                log::warn!("Font directory {:?} does not exist, skipping", dir);
                continue;
            }
            let stamp = tree_stamp(&dir);
            faces.extend(Self::source_faces(&mut cache, &key, stamp, || {
                scan::scan_dir(&dir)
            }));
        }

        if include_system_fonts {
            faces.extend(Self::source_faces(
                &mut cache,
                SYSTEM_SOURCE,
                None,
                scan::scan_system,
            ));
        }

        // The cache only saves work; failing to write it does not fail the lookup
        if let Err(e) = cache.save(cache_path) {
            log::warn!("{:#}", e);
        }

        log::info!("Font collector ready with {} faces", faces.len());
        Ok(Self { faces })
    }

    /// A collector over an explicit list of faces, in priority order.
    pub fn from_faces(faces: Vec<FaceRecord>) -> Self {
        Self { faces }
    }

    pub fn faces(&self) -> &[FaceRecord] {
        &self.faces
    }

    fn source_faces(
        cache: &mut FontCache,
        key: &str,
        stamp: Option<TreeStamp>,
        scan: impl FnOnce() -> Vec<FaceRecord>,
    ) -> Vec<FaceRecord> {
        if let Some(faces) = cache.get(key, stamp) {
            log::debug!("Using {} cached faces for {}", faces.len(), key);
            return faces.to_vec();
        }
        let faces = scan();
        cache.insert(key, stamp, faces.clone());
        faces
    }

    /// Look up every requirement.
    ///
    /// Each found requirement contributes the file of its best face to
    /// `paths`; a file shared by several requirements is listed once.
    pub fn resolve(&self, requirements: &BTreeSet<FontDescriptor>) -> Resolution {
        let mut resolution = Resolution::default();
        let mut seen_paths = HashSet::new();

        for wanted in requirements {
            match best_match(&self.faces, wanted) {
                Some(face) => {
                    log::debug!("{} -> {:?} (face {})", wanted, face.path, face.index);
                    if seen_paths.insert(face.path.clone()) {
                        resolution.paths.push(face.path.clone());
                    }
                    resolution.found.insert(wanted.clone());
                }
                None => {
                    log::debug!("{} -> not found", wanted);
                    resolution.not_found.insert(wanted.clone());
                }
            }
        }
        resolution
    }
}
