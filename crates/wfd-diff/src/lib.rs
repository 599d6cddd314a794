//! Structural diff engine for workflow snapshots.
//!
//! Pairs blocks, ports, and links across two [`wfd_types::Workflow`]
//! snapshots by identity and derives typed difference records from what
//! was added, deleted, or edited.
//!
//! # Key Types
//!
//! - [`find_edited_objects`] / [`presence`] -- Identity-keyed matching
//! - [`Comparer`] -- One independent comparison pass
//! - [`WorkflowDiffer`] / [`WorkflowDiff`] -- Runs the passes and collects records
//! - [`DiffRecord`] / [`Category`] -- The difference vocabulary
//! - [`Report`] -- Records grouped into printable sections

pub mod comparer;
pub mod error;
pub mod matcher;
pub mod passes;
pub mod record;
pub mod report;

#[cfg(test)]
pub(crate) mod testutil;

pub use comparer::{diff_workflows, CompareContext, Comparer, WorkflowDiff, WorkflowDiffer};
pub use error::{DiffError, DiffResult};
pub use matcher::{find_edited_objects, matched_pairs, presence, Presence};
pub use passes::{BlockEdits, BlockPresence, LinkPresence, PortEdits, PortPresence};
pub use record::{Category, DiffRecord, LinkEnds, PortFlag};
pub use report::{Report, Section};
