//! Face records and lookup results.

use assfc_script::FontDescriptor;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// One font face found on disk, reduced to what matching needs.
///
/// Records are what the scan cache stores, so they carry no font data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceRecord {
    /// Font file containing the face
    pub path: PathBuf,
    /// Face index within the file (non-zero only for collections)
    pub index: u32,
    /// Family names in every language the font declares
    pub families: Vec<String>,
    pub post_script_name: String,
    pub weight: u16,
    pub italic: bool,
}

impl FaceRecord {
    /// Build a record from a fontdb face. Faces loaded from memory have no
    /// path to report and are skipped.
    pub(crate) fn from_face_info(info: &fontdb::FaceInfo) -> Option<Self> {
        let path = match &info.source {
            fontdb::Source::File(path) => path.clone(),
            fontdb::Source::SharedFile(path, _) => path.clone(),
            fontdb::Source::Binary(_) => return None,
        };
        Some(Self {
            path,
            index: info.index,
            families: info.families.iter().map(|(name, _)| name.clone()).collect(),
            post_script_name: info.post_script_name.clone(),
            weight: info.weight.0,
            italic: info.style != fontdb::Style::Normal,
        })
    }

    /// Whether any family name or the PostScript name equals `family`,
    /// ignoring case. `family` must already be lowercase.
    pub fn answers_to(&self, family: &str) -> bool {
        self.families
            .iter()
            .chain(std::iter::once(&self.post_script_name))
            .any(|name| name.to_lowercase() == family)
    }
}

/// Outcome of a batch lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Requirements that matched a face
    pub found: BTreeSet<FontDescriptor>,
    /// Requirements that matched nothing on any searched source
    pub not_found: BTreeSet<FontDescriptor>,
    /// Files of the matched faces, deduplicated, in first-match order
    pub paths: Vec<PathBuf>,
}
