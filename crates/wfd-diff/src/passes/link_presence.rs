//! Links added or deleted between snapshots.

use tracing::warn;
use wfd_types::{Block, Guid, Link, Port, Workflow};

use crate::comparer::{CompareContext, Comparer};
use crate::error::{DiffError, DiffResult};
use crate::matcher::presence;
use crate::record::{DiffRecord, LinkEnds};

/// Reports links present on only one side, with both endpoints resolved to
/// a block path and port title in the snapshot the link belongs to.
///
/// An endpoint that no block owns is a [`DiffError::UnresolvedPort`];
/// under `IntegrityPolicy::Skip` the link is left out with a warning.
pub struct LinkPresence;

impl Comparer for LinkPresence {
    fn name(&self) -> &str {
        "link-presence"
    }

    fn compare(
        &self,
        old: &Workflow,
        new: &Workflow,
        context: &CompareContext,
    ) -> DiffResult<Vec<DiffRecord>> {
        let found = presence(old.links(), new.links());
        let mut records = Vec::with_capacity(found.deleted.len() + found.added.len());

        for link in found.deleted {
            if let Some(ends) = resolve_or_skip(old, link, context)? {
                records.push(DiffRecord::LinkDeleted(ends));
            }
        }
        for link in found.added {
            if let Some(ends) = resolve_or_skip(new, link, context)? {
                records.push(DiffRecord::LinkAdded(ends));
            }
        }
        Ok(records)
    }
}

fn resolve_or_skip(
    workflow: &Workflow,
    link: &Link,
    context: &CompareContext,
) -> DiffResult<Option<LinkEnds>> {
    match resolve(workflow, link) {
        Ok(ends) => Ok(Some(ends)),
        Err(err) if context.policy.is_skip() => {
            warn!(error = %err, "skipping link");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

/// Resolve both endpoints of a link within one snapshot.
pub fn resolve(workflow: &Workflow, link: &Link) -> DiffResult<LinkEnds> {
    let (src_block, src_port) = endpoint(workflow, link, &link.src)?;
    let (dst_block, dst_port) = endpoint(workflow, link, &link.dst)?;
    Ok(LinkEnds {
        src_path: workflow.block_path(src_block),
        src_port: src_port.title(),
        dst_path: workflow.block_path(dst_block),
        dst_port: dst_port.title(),
    })
}

fn endpoint<'w>(workflow: &'w Workflow, link: &Link, port: &Guid) -> DiffResult<(&'w Block, &'w Port)> {
    workflow
        .port_owner(port)
        .ok_or_else(|| DiffError::UnresolvedPort {
            link: link.guid.clone(),
            port: port.clone(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{composite, link, port, workflow};
    use wfd_types::IntegrityPolicy;

    fn blocks() -> Vec<Block> {
        vec![
            composite("1", "Root", None).build(),
            composite("2", "A", Some("1")).ports(vec![port("pa", "out", "int")]).build(),
            composite("3", "B", Some("1")).ports(vec![port("pb", "in", "int")]).build(),
        ]
    }

    #[test]
    fn added_link_resolved_in_new_snapshot() {
        let old = workflow(blocks(), vec![]);
        let new = workflow(blocks(), vec![link("l1", "pa", "pb")]);

        let records = LinkPresence.compare(&old, &new, &CompareContext::default()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].to_string(), "Root / A, out (int)  ->  Root / B, in (int)");
        assert!(matches!(records[0], DiffRecord::LinkAdded(_)));
    }

    #[test]
    fn deleted_link_resolved_in_old_snapshot() {
        // The destination block is gone from the new snapshot, so the
        // deleted link must be resolved against the old one.
        let old = workflow(blocks(), vec![link("l1", "pa", "pb")]);
        let new = workflow(blocks()[..2].to_vec(), vec![]);

        let records = LinkPresence.compare(&old, &new, &CompareContext::default()).unwrap();
        assert!(matches!(&records[0], DiffRecord::LinkDeleted(ends) if ends.dst_path == "Root / B"));
    }

    #[test]
    fn unresolved_endpoint() {
        let old = workflow(blocks(), vec![]);
        let new = workflow(blocks(), vec![link("l1", "pa", "missing")]);

        let err = LinkPresence
            .compare(&old, &new, &CompareContext::default())
            .unwrap_err();
        match err {
            DiffError::UnresolvedPort { link, port } => {
                assert_eq!(link.as_str(), "l1");
                assert_eq!(port.as_str(), "missing");
            }
        }

        let skip = CompareContext { policy: IntegrityPolicy::Skip };
        assert!(LinkPresence.compare(&old, &new, &skip).unwrap().is_empty());
    }

    #[test]
    fn unchanged_links_are_silent() {
        let wf = workflow(blocks(), vec![link("l1", "pa", "pb")]);
        assert!(LinkPresence.compare(&wf, &wf, &CompareContext::default()).unwrap().is_empty());
    }
}
