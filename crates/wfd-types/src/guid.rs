use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a block, port, or link.
///
/// Two entities with the same `Guid` are the same entity, possibly edited,
/// regardless of any other field. Guids are opaque strings taken verbatim
/// from the workflow document.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Guid(String);

impl Guid {
    /// Wrap a raw identifier.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Guid({})", self.0)
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Guid {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Guid {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

/// Explicit identity-key extraction.
///
/// Entities do not implement `PartialEq`/`Hash` by identity; every set or
/// map of entities is keyed through this trait instead, so each call site
/// shows that it compares by identity rather than by value.
pub trait Keyed {
    /// The identity of this entity.
    fn key(&self) -> &Guid;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_raw_value() {
        let guid = Guid::new("a1b2");
        assert_eq!(guid.to_string(), "a1b2");
        assert_eq!(format!("{guid:?}"), "Guid(a1b2)");
    }

    #[test]
    fn ordering_is_lexicographic() {
        let mut guids = vec![Guid::from("b"), Guid::from("a"), Guid::from("c")];
        guids.sort();
        assert_eq!(guids, vec![Guid::from("a"), Guid::from("b"), Guid::from("c")]);
    }

    #[test]
    fn serde_transparent() {
        let guid: Guid = serde_json::from_str("\"x-1\"").unwrap();
        assert_eq!(guid.as_str(), "x-1");
        assert_eq!(serde_json::to_string(&guid).unwrap(), "\"x-1\"");
    }
}
