use crate::guid::{Guid, Keyed};
use crate::raw::RawPort;

/// A typed input or output of a block.
///
/// Identity is the [`Guid`]; every other field is descriptive and may
/// change between two versions of the same port.
#[derive(Clone, Debug)]
pub struct Port {
    pub guid: Guid,
    /// Data type name, e.g. `int` or `table`.
    pub kind: String,
    pub name: String,
    /// `P` flag: the port is a parameter.
    pub parameter: bool,
    /// `B` flag: the port is batched.
    pub batch: bool,
    /// `R` flag: history recording is enabled.
    pub history: bool,
}

impl Port {
    /// Build a port from its raw record. Absent flags read as `false`.
    pub fn from_raw(raw: &RawPort) -> Self {
        Self {
            guid: Guid::new(raw.guid.as_str()),
            kind: raw.kind.clone(),
            name: raw.name.clone(),
            parameter: raw.parameter.unwrap_or(false),
            batch: raw.batch.unwrap_or(false),
            history: raw
                .history
                .as_ref()
                .and_then(|h| h.enabled)
                .unwrap_or(false),
        }
    }

    /// Display title: `<name> (<type>)`.
    pub fn title(&self) -> String {
        format!("{} ({})", self.name, self.kind)
    }
}

impl Keyed for Port {
    fn key(&self) -> &Guid {
        &self.guid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flags_default_to_false() {
        let raw: RawPort =
            serde_json::from_value(json!({"type": "int", "guid": "p1", "name": "count"})).unwrap();
        let port = Port::from_raw(&raw);
        assert!(!port.parameter);
        assert!(!port.batch);
        assert!(!port.history);
    }

    #[test]
    fn flags_read_from_record() {
        let raw: RawPort = serde_json::from_value(json!({
            "type": "table", "guid": "p2", "name": "rows",
            "parameter": true, "batch": true, "history": {"enabled": true}
        }))
        .unwrap();
        let port = Port::from_raw(&raw);
        assert!(port.parameter && port.batch && port.history);
    }

    #[test]
    fn title_includes_type() {
        let raw: RawPort =
            serde_json::from_value(json!({"type": "str", "guid": "p1", "name": "label"})).unwrap();
        assert_eq!(Port::from_raw(&raw).title(), "label (str)");
    }
}
