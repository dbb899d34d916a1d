use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A field of a partial update.
///
/// Keeps "not provided" apart from "provided as null": `Unset` leaves the
/// stored value alone, `Null` clears it, `Value` replaces it. Use with
/// `#[serde(default, skip_serializing_if = "Patch::is_unset")]` so an absent
/// key deserializes to `Unset` and is omitted again on output.
///
/// `Unset` serializes as `null` when the field is not skipped, which a
/// reader takes as `Null`. A struct that leaves out `skip_serializing_if`
/// turns "leave unchanged" into "clear" on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    Unset,
    Null,
    Value(T),
}

impl<T> Patch<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    pub fn is_set(&self) -> bool {
        !self.is_unset()
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_ref(&self) -> Patch<&T> {
        match self {
            Self::Unset => Patch::Unset,
            Self::Null => Patch::Null,
            Self::Value(v) => Patch::Value(v),
        }
    }

    /// `None` when unset, `Some(None)` when cleared, `Some(Some(v))` otherwise.
    pub fn into_option(self) -> Option<Option<T>> {
        match self {
            Self::Unset => None,
            Self::Null => Some(None),
            Self::Value(v) => Some(Some(v)),
        }
    }
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Self::Unset
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Self::Value)
    }
}

// `Unset` only disappears from output through `skip_serializing_if`.
impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(v) => serializer.serialize_some(v),
            Self::Unset | Self::Null => serializer.serialize_none(),
        }
    }
}

// Only reached when the key is present; absent keys fall back to `Default`.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Into::into)
    }
}
