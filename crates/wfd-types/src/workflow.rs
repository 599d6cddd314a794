//! Workflow snapshot: all blocks and links of one workflow version.

use std::collections::HashMap;

use serde_json::Value;
use tracing::{debug, warn};

use crate::block::Block;
use crate::error::{ModelError, ModelResult};
use crate::guid::Guid;
use crate::link::Link;
use crate::names::ProtoblockNames;
use crate::policy::IntegrityPolicy;
use crate::port::Port;
use crate::raw::RawDocument;

/// An immutable snapshot of one workflow version.
///
/// Blocks keep document order. Lookup indexes by block guid and by port
/// guid are built once at construction.
#[derive(Clone, Debug, Default)]
pub struct Workflow {
    blocks: Vec<Block>,
    links: Vec<Link>,
    block_index: HashMap<Guid, usize>,
    /// Port guid -> (block index, port index); the first owner wins.
    port_index: HashMap<Guid, (usize, usize)>,
}

impl Workflow {
    /// Build a snapshot from already-constructed entities.
    pub fn new(blocks: Vec<Block>, links: Vec<Link>) -> Self {
        let mut block_index = HashMap::with_capacity(blocks.len());
        let mut port_index = HashMap::new();
        for (bi, block) in blocks.iter().enumerate() {
            block_index.entry(block.guid.clone()).or_insert(bi);
            for (pi, port) in block.ports.iter().enumerate() {
                port_index.entry(port.guid.clone()).or_insert((bi, pi));
            }
        }
        Self {
            blocks,
            links,
            block_index,
            port_index,
        }
    }

    /// Build a snapshot from a parsed raw document.
    ///
    /// Blocks whose `type` is unrecognized fail the build under
    /// [`IntegrityPolicy::Abort`] and are dropped with a warning under
    /// [`IntegrityPolicy::Skip`].
    pub fn from_document(
        doc: &RawDocument,
        names: &dyn ProtoblockNames,
        policy: IntegrityPolicy,
    ) -> ModelResult<Self> {
        let mut blocks = Vec::with_capacity(doc.blocks.len());
        for raw in &doc.blocks {
            match Block::from_raw(raw, names) {
                Ok(block) => blocks.push(block),
                Err(err @ ModelError::UnknownBlockType { .. }) if policy.is_skip() => {
                    warn!(error = %err, "skipping block");
                }
                Err(err) => return Err(err),
            }
        }
        let links = doc.links.iter().map(Link::from_raw).collect();

        let workflow = Self::new(blocks, links);
        debug!(
            blocks = workflow.blocks.len(),
            links = workflow.links.len(),
            "workflow snapshot built"
        );
        Ok(workflow)
    }

    /// Build a snapshot from an untyped JSON document.
    ///
    /// A document without a `blocks` key fails with
    /// [`ModelError::MissingBlocks`].
    pub fn from_value(
        value: Value,
        names: &dyn ProtoblockNames,
        policy: IntegrityPolicy,
    ) -> ModelResult<Self> {
        if value.get("blocks").is_none() {
            return Err(ModelError::MissingBlocks);
        }
        let doc: RawDocument = serde_json::from_value(value)?;
        Self::from_document(&doc, names, policy)
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn block(&self, guid: &Guid) -> Option<&Block> {
        self.block_index.get(guid).map(|&i| &self.blocks[i])
    }

    /// The block that owns a port, together with the port.
    pub fn port_owner(&self, port: &Guid) -> Option<(&Block, &Port)> {
        self.port_index.get(port).map(|&(bi, pi)| {
            let block = &self.blocks[bi];
            (block, &block.ports[pi])
        })
    }

    /// Human-readable path of a block within this snapshot.
    pub fn block_path(&self, block: &Block) -> String {
        block.path_with(|guid| self.block(guid))
    }
}
