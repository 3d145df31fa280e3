//! Font descriptors and usage statistics.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// CSS-style weight for regular text.
pub const WEIGHT_REGULAR: u16 = 400;
/// CSS-style weight for bold text.
pub const WEIGHT_BOLD: u16 = 700;

/// A font the script needs: family name plus the style it is used in.
///
/// Ordering is by family, then weight, then italic, so collections of
/// descriptors iterate deterministically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontDescriptor {
    pub family: String,
    pub weight: u16,
    pub italic: bool,
}

impl FontDescriptor {
    pub fn new(family: impl Into<String>, weight: u16, italic: bool) -> Self {
        Self {
            family: family.into(),
            weight,
            italic,
        }
    }

    pub fn regular(family: impl Into<String>) -> Self {
        Self::new(family, WEIGHT_REGULAR, false)
    }
}

impl fmt::Display for FontDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.family)?;
        match (self.weight, self.italic) {
            (WEIGHT_REGULAR, false) => Ok(()),
            (WEIGHT_REGULAR, true) => write!(f, " (italic)"),
            (WEIGHT_BOLD, false) => write!(f, " (bold)"),
            (WEIGHT_BOLD, true) => write!(f, " (bold italic)"),
            (weight, false) => write!(f, " (weight {weight})"),
            (weight, true) => write!(f, " (weight {weight}, italic)"),
        }
    }
}

/// How a single font is used across the script.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontUsage {
    /// Distinct characters rendered with this font
    pub glyphs: BTreeSet<char>,
    /// Times an event line starts in, or switches to, this font
    pub uses: usize,
}

impl FontUsage {
    pub fn is_unused(&self) -> bool {
        self.glyphs.is_empty()
    }
}

/// Per-font usage for a whole script.
pub type FontStatistics = BTreeMap<FontDescriptor, FontUsage>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(FontDescriptor::regular("Arial").to_string(), "Arial");
        assert_eq!(
            FontDescriptor::new("Arial", WEIGHT_BOLD, true).to_string(),
            "Arial (bold italic)"
        );
        assert_eq!(
            FontDescriptor::new("Arial", 900, false).to_string(),
            "Arial (weight 900)"
        );
    }

    #[test]
    fn test_ordering_is_family_first() {
        let mut set = BTreeSet::new();
        set.insert(FontDescriptor::new("B", WEIGHT_REGULAR, false));
        set.insert(FontDescriptor::new("A", WEIGHT_BOLD, true));
        set.insert(FontDescriptor::new("A", WEIGHT_REGULAR, false));
        let families: Vec<_> = set.iter().map(|d| (d.family.as_str(), d.weight)).collect();
        assert_eq!(families, vec![("A", 400), ("A", 700), ("B", 400)]);
    }
}
