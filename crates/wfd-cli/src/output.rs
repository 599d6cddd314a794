use std::path::Path;

use colored::Colorize;
use serde::Serialize;
use wfd_diff::{DiffRecord, Report, WorkflowDiff};
use wfd_store::LoadedWorkflow;

/// Plain-text report with section headers highlighted.
pub fn render_text(diff: &WorkflowDiff) -> String {
    Report::from_records(diff.records.iter().cloned())
        .render_with(|header| header.bold().yellow().to_string())
}

#[derive(Serialize)]
struct SourceSummary<'a> {
    document: &'a Path,
    digest: &'a str,
    blocks: usize,
    links: usize,
}

impl<'a> From<&'a LoadedWorkflow> for SourceSummary<'a> {
    fn from(loaded: &'a LoadedWorkflow) -> Self {
        Self {
            document: &loaded.source.document,
            digest: &loaded.digest,
            blocks: loaded.workflow.blocks().len(),
            links: loaded.workflow.links().len(),
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    old: SourceSummary<'a>,
    new: SourceSummary<'a>,
    differences: &'a [DiffRecord],
}

/// Machine-readable report: both sources and every record in pass order.
pub fn render_json(
    old: &LoadedWorkflow,
    new: &LoadedWorkflow,
    diff: &WorkflowDiff,
) -> anyhow::Result<String> {
    let report = JsonReport {
        old: old.into(),
        new: new.into(),
        differences: &diff.records,
    };
    let mut out = serde_json::to_string_pretty(&report)?;
    out.push('\n');
    Ok(out)
}
