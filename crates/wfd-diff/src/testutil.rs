//! Fixture builders shared by the unit tests.

use wfd_types::raw::{
    RawEndpoint, RawHistory, RawPosition, RawProtoblock, RawRequests, RawResources, RawRun, RawUi,
};
use wfd_types::{Block, Link, NoNames, RawBlock, RawLink, RawPort, Workflow};

pub struct BlockBuilder {
    raw: RawBlock,
}

impl BlockBuilder {
    pub fn ports(mut self, ports: Vec<RawPort>) -> Self {
        self.raw.ports = ports;
        self
    }

    pub fn position(mut self, x: i64, y: i64) -> Self {
        self.raw.ui = Some(RawUi {
            position: RawPosition {
                x: x as f64,
                y: y as f64,
            },
        });
        self
    }

    pub fn description(mut self, text: &str) -> Self {
        self.raw.description = Some([(String::new(), text.to_string())].into_iter().collect());
        self
    }

    pub fn settings(mut self, memory: u64, cpu: u64, timeout: u64) -> Self {
        self.raw.resources_customized = Some(RawResources {
            run: RawRun {
                requests: RawRequests {
                    memory: Some(memory),
                    cpu: Some(cpu),
                },
            },
        });
        self.raw.idle_timeout_user = Some(timeout);
        self
    }

    pub fn build(self) -> Block {
        Block::from_raw(&self.raw, &NoNames).unwrap()
    }
}

fn block(guid: &str, kind: &str, name: &str, parent: Option<&str>) -> RawBlock {
    RawBlock {
        guid: guid.into(),
        kind: kind.into(),
        name: name.into(),
        parent: parent.map(str::to_owned),
        ..Default::default()
    }
}

pub fn composite(guid: &str, name: &str, parent: Option<&str>) -> BlockBuilder {
    BlockBuilder {
        raw: block(guid, "COMPOSITE", name, parent),
    }
}

pub fn protoblock(guid: &str, name: &str, parent: Option<&str>, id: &str, version: i64) -> BlockBuilder {
    let mut raw = block(guid, "BLOCK", name, parent);
    raw.protoblock = Some(RawProtoblock {
        id: id.into(),
        version,
    });
    BlockBuilder { raw }
}

pub fn port(guid: &str, name: &str, kind: &str) -> RawPort {
    RawPort {
        kind: kind.into(),
        guid: guid.into(),
        name: name.into(),
        ..Default::default()
    }
}

pub fn flagged_port(guid: &str, name: &str, kind: &str, p: bool, b: bool, r: bool) -> RawPort {
    RawPort {
        parameter: Some(p),
        batch: Some(b),
        history: Some(RawHistory { enabled: Some(r) }),
        ..port(guid, name, kind)
    }
}

pub fn link(guid: &str, src: &str, dst: &str) -> Link {
    Link::from_raw(&RawLink {
        guid: guid.into(),
        src: RawEndpoint { port: src.into() },
        dst: RawEndpoint { port: dst.into() },
    })
}

pub fn workflow(blocks: Vec<Block>, links: Vec<Link>) -> Workflow {
    Workflow::new(blocks, links)
}
