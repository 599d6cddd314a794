use std::collections::HashSet;
use std::fmt;

use serde::Serialize;
use tracing::warn;

use crate::error::{ModelError, ModelResult};
use crate::guid::{Guid, Keyed};
use crate::names::ProtoblockNames;
use crate::port::Port;
use crate::raw::{RawBlock, RawPosition};

/// Separator between titles in a block path.
pub const PATH_SEPARATOR: &str = " / ";

/// Resource and timeout settings of a block.
///
/// Plain value semantics: two settings are equal iff all fields are equal.
/// Zero means "not customized".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct BlockSettings {
    pub memory: u64,
    pub cpu: u64,
    pub timeout: u64,
}

impl BlockSettings {
    pub fn new(memory: u64, cpu: u64, timeout: u64) -> Self {
        Self {
            memory,
            cpu,
            timeout,
        }
    }

    /// Parenthesized summary that omits zero fields, e.g. `(CPU: 4)`.
    pub fn title(&self) -> String {
        let params: Vec<String> = [
            ("Memory", self.memory),
            ("CPU", self.cpu),
            ("Timeout", self.timeout),
        ]
        .into_iter()
        .filter(|(_, value)| *value != 0)
        .map(|(label, value)| format!("{label}: {value}"))
        .collect();
        format!("({})", params.join(", "))
    }

    fn from_raw(raw: &RawBlock) -> Self {
        let requests = raw
            .resources_customized
            .as_ref()
            .map(|r| &r.run.requests);
        Self {
            memory: requests.and_then(|r| r.memory).unwrap_or(0),
            cpu: requests.and_then(|r| r.cpu).unwrap_or(0),
            timeout: raw.idle_timeout_user.unwrap_or(0),
        }
    }
}

/// Canvas position of a block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl From<RawPosition> for Position {
    /// Coordinates are rounded to the nearest integer.
    fn from(raw: RawPosition) -> Self {
        Self::new(raw.x.round() as i64, raw.y.round() as i64)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Reference from a protoblock instance to the executable it runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProtoblockRef {
    pub id: String,
    pub version: i64,
    /// Display name from the protoblock manifest, when one was found.
    pub name: Option<String>,
}

/// The two kinds of block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BlockKind {
    /// Structural grouping of other blocks.
    Composite,
    /// An executable block backed by a protoblock.
    Protoblock(ProtoblockRef),
}

impl BlockKind {
    /// The document's `type` discriminator for this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Composite => "COMPOSITE",
            Self::Protoblock(_) => "BLOCK",
        }
    }
}

/// A node of the workflow graph.
///
/// Identity is the [`Guid`]; two blocks with the same guid in different
/// snapshots are the same block, whatever else changed.
#[derive(Clone, Debug)]
pub struct Block {
    pub guid: Guid,
    pub name: String,
    /// Enclosing block, `None` at the root level.
    pub parent: Option<Guid>,
    pub position: Position,
    pub description: Option<String>,
    pub settings: BlockSettings,
    pub ports: Vec<Port>,
    pub kind: BlockKind,
}

impl Block {
    /// Build a block from its raw record, dispatching on the `type` field.
    ///
    /// Protoblock names are looked up through `names`; a miss leaves the
    /// name unresolved.
    pub fn from_raw(raw: &RawBlock, names: &dyn ProtoblockNames) -> ModelResult<Self> {
        let guid = Guid::new(raw.guid.as_str());
        let kind = match raw.kind.as_str() {
            "COMPOSITE" => BlockKind::Composite,
            "BLOCK" => {
                let proto = raw
                    .protoblock
                    .as_ref()
                    .ok_or_else(|| ModelError::MissingProtoblock { guid: guid.clone() })?;
                BlockKind::Protoblock(ProtoblockRef {
                    id: proto.id.clone(),
                    version: proto.version,
                    name: names.resolve(&proto.id, proto.version).map(str::to_owned),
                })
            }
            other => {
                return Err(ModelError::UnknownBlockType {
                    guid,
                    kind: other.to_owned(),
                })
            }
        };

        Ok(Self {
            guid,
            name: raw.name.clone(),
            parent: raw.parent.as_deref().map(Guid::from),
            position: raw.ui.as_ref().map(|ui| ui.position).unwrap_or_default().into(),
            description: description_of(raw),
            settings: BlockSettings::from_raw(raw),
            ports: raw.ports.iter().map(Port::from_raw).collect(),
            kind,
        })
    }

    /// Display title: the name, plus the resolved protoblock name in
    /// parentheses when it differs from the name.
    pub fn title(&self) -> String {
        match &self.kind {
            BlockKind::Protoblock(ProtoblockRef {
                name: Some(resolved),
                ..
            }) if *resolved != self.name => format!("{} ({})", self.name, resolved),
            _ => self.name.clone(),
        }
    }

    /// Path from the root to this block, titles joined with `" / "`.
    ///
    /// Parents are looked up with `find`. A parent that cannot be found, or
    /// a chain that loops back on itself, ends the walk with a warning and
    /// the partial path collected so far.
    pub fn path_with<'a, F>(&'a self, mut find: F) -> String
    where
        F: FnMut(&Guid) -> Option<&'a Block>,
    {
        let mut titles = vec![self.title()];
        let mut seen: HashSet<&Guid> = HashSet::from([&self.guid]);
        let mut current = self;

        while let Some(parent) = current.parent.as_ref() {
            let Some(block) = find(parent) else {
                let err = ModelError::MissingParent {
                    guid: current.guid.clone(),
                    parent: parent.clone(),
                };
                warn!(error = %err, "parent chain ends early; using partial path");
                break;
            };
            if !seen.insert(&block.guid) {
                warn!(guid = %block.guid, "parent chain loops; using partial path");
                break;
            }
            titles.push(block.title());
            current = block;
        }

        titles.reverse();
        titles.join(PATH_SEPARATOR)
    }

    /// [`Self::path_with`] over a plain list of blocks.
    pub fn path_in<'a>(&'a self, blocks: &'a [Block]) -> String {
        self.path_with(|guid| blocks.iter().find(|b| &b.guid == guid))
    }

    pub fn is_protoblock(&self) -> bool {
        matches!(self.kind, BlockKind::Protoblock(_))
    }
}

impl Keyed for Block {
    fn key(&self) -> &Guid {
        &self.guid
    }
}

/// `description[""]`, falling back to `description_default[""]` when the
/// block carries no description of its own.
fn description_of(raw: &RawBlock) -> Option<String> {
    match (&raw.description, &raw.description_default) {
        (Some(text), _) => text.get("").cloned(),
        (None, Some(text)) => text.get("").cloned(),
        (None, None) => None,
    }
}
