//! Face discovery through fontdb.

use super::types::FaceRecord;
use fontdb::Database;
use std::path::Path;

fn records(db: &Database) -> Vec<FaceRecord> {
    let mut faces: Vec<FaceRecord> = db.faces().filter_map(FaceRecord::from_face_info).collect();
    // fontdb reports faces in directory-walk order, which is not stable
    faces.sort_by(|a, b| (&a.path, a.index).cmp(&(&b.path, b.index)));
    faces
}

/// Scan `dir` recursively for font files.
pub(crate) fn scan_dir(dir: &Path) -> Vec<FaceRecord> {
    let mut db = Database::new();
    db.load_fonts_dir(dir);
    log::info!("Scanned {} faces in {:?}", db.len(), dir);
    records(&db)
}

/// Scan the platform's system font locations.
pub(crate) fn scan_system() -> Vec<FaceRecord> {
    let mut db = Database::new();
    db.load_system_fonts();
    log::info!("Scanned {} system faces", db.len());
    records(&db)
}
