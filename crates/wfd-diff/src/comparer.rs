use tracing::debug;
use wfd_types::{IntegrityPolicy, Workflow};

use crate::error::DiffResult;
use crate::passes::{BlockEdits, BlockPresence, LinkPresence, PortEdits, PortPresence};
use crate::record::{Category, DiffRecord};

// ---------------------------------------------------------------------------
// CompareContext
// ---------------------------------------------------------------------------

/// Settings shared by every comparer in a run.
#[derive(Clone, Copy, Debug, Default)]
pub struct CompareContext {
    /// Handling of links whose endpoints cannot be resolved.
    pub policy: IntegrityPolicy,
}

// ---------------------------------------------------------------------------
// Comparer trait
// ---------------------------------------------------------------------------

/// A single comparison pass over two snapshots.
///
/// Passes are pure functions of the two snapshots and independent of each
/// other, so they may run in any order. The trait is object-safe and
/// `Send + Sync` so passes can be stored in a `Vec<Box<dyn Comparer>>`.
pub trait Comparer: Send + Sync {
    /// Short name used in logs (e.g. "block-presence").
    fn name(&self) -> &str;

    /// Produce the records this pass is responsible for.
    fn compare(
        &self,
        old: &Workflow,
        new: &Workflow,
        context: &CompareContext,
    ) -> DiffResult<Vec<DiffRecord>>;
}

// ---------------------------------------------------------------------------
// WorkflowDiff
// ---------------------------------------------------------------------------

/// All records produced by one run, in pass order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorkflowDiff {
    pub records: Vec<DiffRecord>,
}

impl WorkflowDiff {
    /// Returns `true` if the snapshots are structurally identical.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Number of records in one report section.
    pub fn count(&self, category: Category) -> usize {
        self.records
            .iter()
            .filter(|r| r.category() == category)
            .count()
    }
}

// ---------------------------------------------------------------------------
// WorkflowDiffer
// ---------------------------------------------------------------------------

/// Runs a list of comparers over two snapshots and concatenates their output.
pub struct WorkflowDiffer {
    comparers: Vec<Box<dyn Comparer>>,
    context: CompareContext,
}

impl WorkflowDiffer {
    /// A differ with no comparers. Use [`Self::add_comparer`] to add passes,
    /// or [`Self::with_default_comparers`] for the standard set.
    pub fn new(policy: IntegrityPolicy) -> Self {
        Self {
            comparers: Vec::new(),
            context: CompareContext { policy },
        }
    }

    /// The standard passes:
    /// block presence, block edits, link presence, port presence, port edits.
    pub fn with_default_comparers(policy: IntegrityPolicy) -> Self {
        let mut differ = Self::new(policy);
        differ.add_comparer(Box::new(BlockPresence));
        differ.add_comparer(Box::new(BlockEdits));
        differ.add_comparer(Box::new(LinkPresence));
        differ.add_comparer(Box::new(PortPresence));
        differ.add_comparer(Box::new(PortEdits));
        differ
    }

    pub fn add_comparer(&mut self, comparer: Box<dyn Comparer>) {
        self.comparers.push(comparer);
    }

    pub fn comparer_count(&self) -> usize {
        self.comparers.len()
    }

    /// Run every comparer in order. The first failing pass aborts the run.
    pub fn diff(&self, old: &Workflow, new: &Workflow) -> DiffResult<WorkflowDiff> {
        let mut records = Vec::new();
        for comparer in &self.comparers {
            let found = comparer.compare(old, new, &self.context)?;
            debug!(comparer = comparer.name(), records = found.len(), "comparer finished");
            records.extend(found);
        }
        Ok(WorkflowDiff { records })
    }
}

/// Diff two snapshots with the standard passes and the default policy.
pub fn diff_workflows(old: &Workflow, new: &Workflow) -> DiffResult<WorkflowDiff> {
    WorkflowDiffer::with_default_comparers(IntegrityPolicy::default()).diff(old, new)
}
