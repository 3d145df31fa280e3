//! Picking the face that best serves a requested font.

use super::types::FaceRecord;
use assfc_script::FontDescriptor;

/// Find the best face for `wanted` among `faces`.
///
/// A face is a candidate when one of its names equals the requested family,
/// ignoring case. Candidates are ranked by:
/// 1. Matching italic flag
/// 2. Smallest weight difference
/// 3. Earliest position in `faces` (source priority order)
pub fn best_match<'a>(faces: &'a [FaceRecord], wanted: &FontDescriptor) -> Option<&'a FaceRecord> {
    let family = wanted.family.to_lowercase();
    faces
        .iter()
        .enumerate()
        .filter(|(_, face)| face.answers_to(&family))
        .min_by_key(|(position, face)| {
            (
                face.italic != wanted.italic,
                face.weight.abs_diff(wanted.weight),
                *position,
            )
        })
        .map(|(_, face)| face)
}
