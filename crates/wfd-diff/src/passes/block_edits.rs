//! Field edits of blocks present in both snapshots.

use wfd_types::{Block, Workflow};

use crate::comparer::{CompareContext, Comparer};
use crate::error::DiffResult;
use crate::matcher::matched_pairs;
use crate::record::DiffRecord;

/// Reports changed name, position, description, and settings of matched
/// blocks. Each field is checked independently.
pub struct BlockEdits;

impl Comparer for BlockEdits {
    fn name(&self) -> &str {
        "block-edits"
    }

    fn compare(
        &self,
        old: &Workflow,
        new: &Workflow,
        _context: &CompareContext,
    ) -> DiffResult<Vec<DiffRecord>> {
        let mut records = Vec::new();
        for (before, after) in matched_pairs(old.blocks(), new.blocks()) {
            edits(old, new, before, after, &mut records);
        }
        Ok(records)
    }
}

fn edits(old: &Workflow, new: &Workflow, before: &Block, after: &Block, out: &mut Vec<DiffRecord>) {
    // A rename is addressed by the name the block used to have.
    if before.name != after.name {
        out.push(DiffRecord::NameChanged {
            path: old.block_path(before),
            new_name: after.name.clone(),
        });
    }
    if before.position != after.position {
        out.push(DiffRecord::Moved {
            path: new.block_path(after),
            position: after.position,
        });
    }
    if before.description != after.description {
        out.push(DiffRecord::DescriptionChanged {
            path: new.block_path(after),
            old: before.description.clone(),
            new: after.description.clone(),
        });
    }
    if before.settings != after.settings {
        out.push(DiffRecord::SettingsChanged {
            path: new.block_path(after),
            settings: after.settings,
        });
    }
}
