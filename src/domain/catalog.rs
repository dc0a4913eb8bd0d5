//! Closed identifier vocabularies and their lenient wire representation.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A closed set of identifiers with stable wire names.
///
/// `as_str` implementations are exhaustive matches, so a new variant without a
/// wire name fails to compile.
pub trait Catalog: Copy + Eq + fmt::Debug + 'static {
    const ALL: &'static [Self];

    fn as_str(self) -> &'static str;

    fn lookup(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|entry| entry.as_str() == raw)
    }
}

/// An identifier read from configuration.
///
/// Values outside the catalog are kept verbatim instead of being rejected, so a
/// file written by another version still loads, renders and saves unchanged.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum CatalogId<K> {
    Known(K),
    Unknown(String),
}

impl<K: Catalog> CatalogId<K> {
    pub fn parse(raw: &str) -> Self {
        match K::lookup(raw) {
            Some(kind) => Self::Known(kind),
            None => Self::Unknown(raw.to_string()),
        }
    }

    pub fn known(&self) -> Option<K> {
        match self {
            Self::Known(kind) => Some(*kind),
            Self::Unknown(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(kind) => kind.as_str(),
            Self::Unknown(raw) => raw.as_str(),
        }
    }
}

impl<K: Catalog> From<K> for CatalogId<K> {
    fn from(kind: K) -> Self {
        Self::Known(kind)
    }
}

impl<K: Catalog> From<&str> for CatalogId<K> {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl<K: Catalog> fmt::Debug for CatalogId<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(kind) => write!(f, "{:?}", kind.as_str()),
            Self::Unknown(raw) => write!(f, "Unknown({raw:?})"),
        }
    }
}

impl<K: Catalog> fmt::Display for CatalogId<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<K: Catalog> Serialize for CatalogId<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de, K: Catalog> Deserialize<'de> for CatalogId<K> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}
