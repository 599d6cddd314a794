//! Entity model for workflow diffing.
//!
//! A workflow is a graph of processing blocks whose ports are connected by
//! links. This crate provides the immutable, identity-keyed records built
//! from a parsed workflow document, and the [`Workflow`] snapshot that
//! aggregates them for one point in time.
//!
//! # Key Types
//!
//! - [`Guid`] / [`Keyed`] -- Stable identity and explicit key extraction
//! - [`Port`] -- A typed input/output of a block
//! - [`Block`] / [`BlockKind`] -- Composite or protoblock node of the graph
//! - [`BlockSettings`] / [`Position`] -- Value objects embedded in a block
//! - [`Link`] -- A connection between two ports
//! - [`Workflow`] -- A snapshot of all blocks and links
//! - [`ProtoblockNames`] -- Injected lookup of protoblock display names

pub mod block;
pub mod error;
pub mod guid;
pub mod link;
pub mod names;
pub mod policy;
pub mod port;
pub mod raw;
pub mod workflow;

pub use block::{Block, BlockKind, BlockSettings, Position, ProtoblockRef};
pub use error::{ModelError, ModelResult};
pub use guid::{Guid, Keyed};
pub use link::Link;
pub use names::{NoNames, ProtoblockCatalog, ProtoblockNames};
pub use policy::IntegrityPolicy;
pub use port::Port;
pub use raw::{RawBlock, RawDocument, RawLink, RawPort};
pub use workflow::Workflow;
