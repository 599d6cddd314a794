use serde::{Deserialize, Serialize};

/// What to do with a record that violates a data-integrity rule
/// (unknown block type, link to a port no block owns).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntegrityPolicy {
    /// Fail the whole run with a named error.
    #[default]
    Abort,
    /// Log a warning and leave the offending record out.
    Skip,
}

impl IntegrityPolicy {
    pub fn is_skip(self) -> bool {
        matches!(self, Self::Skip)
    }
}
