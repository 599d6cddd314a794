use std::path::Path;

use serde_json::Value;
use tracing::{debug, info};
use wfd_types::{ModelError, ProtoblockCatalog, ProtoblockNames, Workflow};

use crate::config::LoaderConfig;
use crate::error::{LoadError, LoadResult};
use crate::manifest::load_catalog;
use crate::source::WorkflowSource;

/// A workflow snapshot together with where it was loaded from.
#[derive(Clone, Debug)]
pub struct LoadedWorkflow {
    pub source: WorkflowSource,
    /// Short BLAKE3 digest of the document bytes.
    pub digest: String,
    pub workflow: Workflow,
}

/// Read a JSON document, returning it with the short digest of its bytes.
pub fn read_document(path: &Path) -> LoadResult<(Value, String)> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let digest = short_digest(&bytes);
    let value = serde_json::from_slice(&bytes).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok((value, digest))
}

/// First 8 bytes of the BLAKE3 hash, hex-encoded.
fn short_digest(bytes: &[u8]) -> String {
    let hash = blake3::hash(bytes);
    hex::encode(&hash.as_bytes()[..8])
}

/// Builds workflow snapshots from paths on disk.
#[derive(Clone, Debug, Default)]
pub struct WorkflowLoader {
    config: LoaderConfig,
}

impl WorkflowLoader {
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    pub fn resolve(&self, input: impl AsRef<Path>) -> WorkflowSource {
        WorkflowSource::resolve(input, &self.config)
    }

    /// Protoblock names available to a source. Empty when name loading is
    /// disabled.
    pub fn catalog(&self, source: &WorkflowSource) -> ProtoblockCatalog {
        if !self.config.load_protoblock_names {
            return ProtoblockCatalog::new();
        }
        load_catalog(&source.protoblocks_dir, &self.config.manifest_file)
    }

    /// Load one snapshot, resolving protoblock names through `names`.
    pub fn load(
        &self,
        source: &WorkflowSource,
        names: &dyn ProtoblockNames,
    ) -> LoadResult<LoadedWorkflow> {
        let path = &source.document;
        let (value, digest) = read_document(path)?;
        let workflow =
            Workflow::from_value(value, names, self.config.integrity).map_err(|e| match e {
                ModelError::MissingBlocks => LoadError::MissingBlocks { path: path.clone() },
                ModelError::Json(source) => LoadError::Parse {
                    path: path.clone(),
                    source,
                },
                other => LoadError::Model(other),
            })?;

        info!(
            path = %path.display(),
            digest = %digest,
            blocks = workflow.blocks().len(),
            links = workflow.links().len(),
            "workflow loaded"
        );
        Ok(LoadedWorkflow {
            source: source.clone(),
            digest,
            workflow,
        })
    }

    /// Load the two snapshots to compare.
    ///
    /// Both sides' protoblock catalogs are read first and merged, the old
    /// side winning on conflicts, so the merged names are complete before
    /// either snapshot is built.
    pub fn load_pair(
        &self,
        old: impl AsRef<Path>,
        new: impl AsRef<Path>,
    ) -> LoadResult<(LoadedWorkflow, LoadedWorkflow)> {
        let old_source = self.resolve(old);
        let new_source = self.resolve(new);

        let mut names = self.catalog(&old_source);
        names.merge_missing(self.catalog(&new_source));
        debug!(names = names.len(), "protoblock names merged");

        let old = self.load(&old_source, &names)?;
        let new = self.load(&new_source, &names)?;
        Ok((old, new))
    }
}
