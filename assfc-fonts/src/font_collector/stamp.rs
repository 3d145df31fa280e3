//! Change detection for scanned font directories.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::time::UNIX_EPOCH;

/// Summary of a directory tree as the scanner would see it.
///
/// Covers every subdirectory and file below the root, following symlinks
/// the way fontdb does. Adding, removing, resizing or touching any of them
/// changes the stamp, so a cached scan of the tree can be checked without
/// parsing a single font.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStamp {
    /// Files and directories below the root
    pub entries: u64,
    /// Total size of all files in bytes
    pub bytes: u64,
    /// Newest modification time in the tree, root included, in nanoseconds
    pub newest: u64,
}

impl TreeStamp {
    fn add(&mut self, metadata: &fs::Metadata) {
        let modified = metadata
            .modified()
            .ok()
            .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
            .map(|d| u64::try_from(d.as_nanos()).unwrap_or(u64::MAX))
            .unwrap_or_default();
        self.newest = self.newest.max(modified);
        if metadata.is_file() {
            self.bytes = self.bytes.saturating_add(metadata.len());
        }
    }
}

/// Stamp the tree rooted at `dir`, or `None` if `dir` cannot be read.
pub fn tree_stamp(dir: &Path) -> Option<TreeStamp> {
    let root = fs::metadata(dir).ok()?;
    let mut stamp = TreeStamp::default();
    stamp.add(&root);

    let mut visited = HashSet::new();
    let mut pending = vec![dir.to_path_buf()];
    while let Some(current) = pending.pop() {
        // Symlink loops would otherwise walk forever
        let canonical = fs::canonicalize(&current).unwrap_or_else(|_| current.clone());
        if !visited.insert(canonical) {
            continue;
        }
        let Ok(entries) = fs::read_dir(&current) else {
            continue;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            let Ok(metadata) = fs::metadata(&path) else {
                continue;
            };
            stamp.entries += 1;
            stamp.add(&metadata);
            if metadata.is_dir() {
                pending.push(path);
            }
        }
    }
    Some(stamp)
}
