//! Ports added to or deleted from blocks present in both snapshots.

use wfd_types::Workflow;

use crate::comparer::{CompareContext, Comparer};
use crate::error::DiffResult;
use crate::matcher::{matched_pairs, presence};
use crate::record::DiffRecord;

/// Reports ports present on only one side of a matched block pair,
/// addressed by the block's path in the new snapshot.
pub struct PortPresence;

impl Comparer for PortPresence {
    fn name(&self) -> &str {
        "port-presence"
    }

    fn compare(
        &self,
        old: &Workflow,
        new: &Workflow,
        _context: &CompareContext,
    ) -> DiffResult<Vec<DiffRecord>> {
        let mut records = Vec::new();
        for (before, after) in matched_pairs(old.blocks(), new.blocks()) {
            let found = presence(&before.ports, &after.ports);
            if found.is_empty() {
                continue;
            }
            let path = new.block_path(after);
            records.extend(found.deleted.into_iter().map(|port| DiffRecord::PortDeleted {
                path: path.clone(),
                port: port.title(),
            }));
            records.extend(found.added.into_iter().map(|port| DiffRecord::PortAdded {
                path: path.clone(),
                port: port.title(),
            }));
        }
        Ok(records)
    }
}
