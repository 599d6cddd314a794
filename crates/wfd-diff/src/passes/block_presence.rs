//! Blocks added or deleted between snapshots.

use tracing::{debug, info};
use wfd_types::Workflow;

use crate::comparer::{CompareContext, Comparer};
use crate::error::DiffResult;
use crate::matcher::presence;
use crate::record::DiffRecord;

/// Reports blocks present on only one side.
///
/// Deleted blocks are addressed by their path in the old snapshot, added
/// blocks by their path in the new one. Deletions come first.
pub struct BlockPresence;

impl Comparer for BlockPresence {
    fn name(&self) -> &str {
        "block-presence"
    }

    fn compare(
        &self,
        old: &Workflow,
        new: &Workflow,
        _context: &CompareContext,
    ) -> DiffResult<Vec<DiffRecord>> {
        info!(
            old_blocks = old.blocks().len(),
            new_blocks = new.blocks().len(),
            "comparing blocks"
        );

        let found = presence(old.blocks(), new.blocks());
        debug!(
            deleted = found.deleted.len(),
            added = found.added.len(),
            "block presence differences"
        );

        let deleted = found.deleted.into_iter().map(|block| DiffRecord::BlockDeleted {
            path: old.block_path(block),
        });
        let added = found.added.into_iter().map(|block| DiffRecord::BlockAdded {
            path: new.block_path(block),
        });
        Ok(deleted.chain(added).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{composite, workflow};

    fn run(old: &Workflow, new: &Workflow) -> Vec<DiffRecord> {
        BlockPresence
            .compare(old, new, &CompareContext::default())
            .unwrap()
    }

    #[test]
    fn deleted_paths_use_old_snapshot() {
        let old = workflow(
            vec![
                composite("1", "Root", None).build(),
                composite("2", "Inner", Some("1")).build(),
            ],
            vec![],
        );
        let new = workflow(vec![composite("1", "Renamed", None).build()], vec![]);

        assert_eq!(
            run(&old, &new),
            vec![DiffRecord::BlockDeleted { path: "Root / Inner".into() }]
        );
    }

    #[test]
    fn deletions_precede_additions() {
        let old = workflow(vec![composite("1", "Old", None).build()], vec![]);
        let new = workflow(vec![composite("2", "New", None).build()], vec![]);

        assert_eq!(
            run(&old, &new),
            vec![
                DiffRecord::BlockDeleted { path: "Old".into() },
                DiffRecord::BlockAdded { path: "New".into() },
            ]
        );
    }

    #[test]
    fn edited_block_is_not_added_or_deleted() {
        let old = workflow(vec![composite("1", "A", None).position(0, 0).build()], vec![]);
        let new = workflow(vec![composite("1", "B", None).position(9, 9).build()], vec![]);
        assert!(run(&old, &new).is_empty());
    }
}
