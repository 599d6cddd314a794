use std::io::IsTerminal;

use anyhow::Context;
use tracing::{debug, info};
use wfd_diff::WorkflowDiffer;
use wfd_store::{LoaderConfig, WorkflowLoader};
use wfd_types::{IntegrityPolicy, Workflow};

use crate::cli::{Cli, OutputFormat};
use crate::output;

/// Load both workflows, diff them, and render the report.
///
/// Nothing is rendered unless both snapshots load and every comparer
/// succeeds.
pub fn execute(cli: &Cli) -> anyhow::Result<String> {
    let loader = WorkflowLoader::new(loader_config(cli)?);
    let (old, new) = loader
        .load_pair(&cli.old, &cli.new)
        .context("cannot load workflows")?;

    log_blocks("old", &old.workflow);
    log_blocks("new", &new.workflow);
    if old.digest == new.digest {
        info!(digest = %old.digest, "documents are byte-identical");
    }

    let differ = WorkflowDiffer::with_default_comparers(loader.config().integrity);
    let diff = differ
        .diff(&old.workflow, &new.workflow)
        .context("cannot compare workflows")?;
    info!(records = diff.len(), "comparison complete");

    match cli.format {
        OutputFormat::Text => {
            if cli.no_color || !std::io::stdout().is_terminal() {
                colored::control::set_override(false);
            }
            Ok(output::render_text(&diff))
        }
        OutputFormat::Json => output::render_json(&old, &new, &diff),
    }
}

fn loader_config(cli: &Cli) -> anyhow::Result<LoaderConfig> {
    let mut config = match &cli.config {
        Some(path) => LoaderConfig::load(path)
            .with_context(|| format!("cannot load configuration {}", path.display()))?,
        None => LoaderConfig::default(),
    };
    if cli.skip_invalid {
        config.integrity = IntegrityPolicy::Skip;
    }
    if cli.no_protoblocks {
        config.load_protoblock_names = false;
    }
    Ok(config)
}

fn log_blocks(side: &str, workflow: &Workflow) {
    let protoblocks = workflow.blocks().iter().filter(|b| b.is_protoblock()).count();
    debug!(
        side,
        blocks = workflow.blocks().len(),
        protoblocks,
        "workflow includes"
    );
    for block in workflow.blocks() {
        debug!(side, kind = block.kind.tag(), block = ?block);
    }
}
