//! Protoblock display-name lookup.
//!
//! Protoblock names come from auxiliary manifests that sit next to a
//! workflow. The lookup is passed explicitly to snapshot construction; a
//! block built without one simply has no resolved name.

use std::collections::BTreeMap;

/// Resolves a protoblock `(id, version)` to its display name.
pub trait ProtoblockNames {
    fn resolve(&self, id: &str, version: i64) -> Option<&str>;
}

/// A resolver that knows no names.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoNames;

impl ProtoblockNames for NoNames {
    fn resolve(&self, _id: &str, _version: i64) -> Option<&str> {
        None
    }
}

/// Names keyed by `"{id}-{version}"`, the layout of a protoblocks directory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProtoblockCatalog {
    names: BTreeMap<String, String>,
}

impl ProtoblockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog key for a protoblock id and version.
    pub fn key(id: &str, version: i64) -> String {
        format!("{id}-{version}")
    }

    /// Record a name under a `"{id}-{version}"` key, replacing any previous one.
    pub fn insert(&mut self, key: impl Into<String>, name: impl Into<String>) {
        self.names.insert(key.into(), name.into());
    }

    /// Add every entry of `other` whose key is not already present.
    ///
    /// Entries already in `self` win.
    pub fn merge_missing(&mut self, other: ProtoblockCatalog) {
        for (key, name) in other.names {
            self.names.entry(key).or_insert(name);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.names.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }
}

impl ProtoblockNames for ProtoblockCatalog {
    fn resolve(&self, id: &str, version: i64) -> Option<&str> {
        self.get(&Self::key(id, version))
    }
}

impl FromIterator<(String, String)> for ProtoblockCatalog {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}
