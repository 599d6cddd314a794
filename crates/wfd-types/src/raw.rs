//! Raw records as they appear in a workflow document.
//!
//! These mirror the JSON layout one-to-one and are only used as input to
//! the entity constructors; nothing downstream of [`crate::Workflow`]
//! sees them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Localized text keyed by locale; the default locale is the empty string.
pub type LocalizedText = BTreeMap<String, String>;

/// A whole workflow document.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RawDocument {
    pub blocks: Vec<RawBlock>,
    #[serde(default)]
    pub links: Vec<RawLink>,
}

/// One entry of the document's `blocks` list.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RawBlock {
    pub guid: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub ui: Option<RawUi>,
    #[serde(default)]
    pub description: Option<LocalizedText>,
    #[serde(default)]
    pub description_default: Option<LocalizedText>,
    #[serde(default)]
    pub resources_customized: Option<RawResources>,
    #[serde(default)]
    pub idle_timeout_user: Option<u64>,
    #[serde(default)]
    pub ports: Vec<RawPort>,
    #[serde(default)]
    pub protoblock: Option<RawProtoblock>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RawUi {
    #[serde(default)]
    pub position: RawPosition,
}

/// Canvas coordinates; editors may write fractional values.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct RawPosition {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

/// `resources_customized`: `{"run": {"requests": {"memory", "cpu"}}}`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RawResources {
    #[serde(default)]
    pub run: RawRun,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RawRun {
    #[serde(default)]
    pub requests: RawRequests,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RawRequests {
    #[serde(default)]
    pub memory: Option<u64>,
    #[serde(default)]
    pub cpu: Option<u64>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RawProtoblock {
    pub id: String,
    pub version: i64,
}

/// One entry of a block's `ports` list.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RawPort {
    #[serde(rename = "type")]
    pub kind: String,
    pub guid: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub parameter: Option<bool>,
    #[serde(default)]
    pub batch: Option<bool>,
    #[serde(default)]
    pub history: Option<RawHistory>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RawHistory {
    #[serde(default)]
    pub enabled: Option<bool>,
}

/// One entry of the document's `links` list.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RawLink {
    pub guid: String,
    pub src: RawEndpoint,
    pub dst: RawEndpoint,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RawEndpoint {
    pub port: String,
}
