//! Field edits of ports present in both snapshots.

use wfd_types::{Port, Workflow};

use crate::comparer::{CompareContext, Comparer};
use crate::error::DiffResult;
use crate::matcher::matched_pairs;
use crate::record::{DiffRecord, PortFlag};

/// Reports renamed ports and changed `P`/`B`/`R` flags of ports matched
/// within matched block pairs.
///
/// Records carry the block path from the new snapshot and the port title
/// from the old one.
pub struct PortEdits;

impl Comparer for PortEdits {
    fn name(&self) -> &str {
        "port-edits"
    }

    fn compare(
        &self,
        old: &Workflow,
        new: &Workflow,
        _context: &CompareContext,
    ) -> DiffResult<Vec<DiffRecord>> {
        let mut records = Vec::new();
        for (before, after) in matched_pairs(old.blocks(), new.blocks()) {
            let ports = matched_pairs(&before.ports, &after.ports);
            if ports.is_empty() {
                continue;
            }
            let path = new.block_path(after);
            for (old_port, new_port) in ports {
                port_edits(&path, old_port, new_port, &mut records);
            }
        }
        Ok(records)
    }
}

fn port_edits(path: &str, before: &Port, after: &Port, out: &mut Vec<DiffRecord>) {
    if before.name != after.name {
        out.push(DiffRecord::PortRenamed {
            path: path.to_owned(),
            port: before.title(),
            new_name: after.name.clone(),
        });
    }

    let flags = [
        (PortFlag::P, before.parameter, after.parameter),
        (PortFlag::B, before.batch, after.batch),
        (PortFlag::R, before.history, after.history),
    ];
    for (flag, was, now) in flags {
        if was != now {
            out.push(DiffRecord::PortFlagChanged {
                path: path.to_owned(),
                port: before.title(),
                flag,
                value: now,
            });
        }
    }
}
