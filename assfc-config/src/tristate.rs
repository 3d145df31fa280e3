//! Three-valued boolean used by partially specified settings layers.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A boolean setting that may also be left unspecified.
///
/// `Unset` means "this layer says nothing about the option", which is
/// different from an explicit `Off`. The layered resolver only falls through
/// to a lower layer on `Unset`.
///
/// In JSON, `true`/`false` map to `On`/`Off`; `null` or an absent key maps
/// to `Unset`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TriState {
    On,
    Off,
    #[default]
    Unset,
}

impl TriState {
    /// Build from a pair of mutually exclusive command-line switches.
    ///
    /// `on` wins if both are somehow set; the CLI parser rejects that case
    /// before it gets here.
    pub fn from_switches(on: bool, off: bool) -> Self {
        match (on, off) {
            (true, _) => TriState::On,
            (false, true) => TriState::Off,
            (false, false) => TriState::Unset,
        }
    }

    pub fn is_unset(self) -> bool {
        self == TriState::Unset
    }

    /// `Some(bool)` for a concrete value, `None` for `Unset`.
    pub fn value(self) -> Option<bool> {
        match self {
            TriState::On => Some(true),
            TriState::Off => Some(false),
            TriState::Unset => None,
        }
    }

    /// Returns `self` if concrete, otherwise `other`.
    pub fn or(self, other: TriState) -> TriState {
        if self.is_unset() { other } else { self }
    }

    /// Collapse to a concrete boolean, using `fallback` for `Unset`.
    pub fn unwrap_or(self, fallback: bool) -> bool {
        self.value().unwrap_or(fallback)
    }
}

impl From<bool> for TriState {
    fn from(value: bool) -> Self {
        if value { TriState::On } else { TriState::Off }
    }
}

impl From<Option<bool>> for TriState {
    fn from(value: Option<bool>) -> Self {
        value.map_or(TriState::Unset, TriState::from)
    }
}

impl Serialize for TriState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TriState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<bool>::deserialize(deserializer)?.into())
    }
}
