use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use wfd_types::IntegrityPolicy;

use crate::error::{LoadError, LoadResult};

/// Path conventions and policies used when loading workflows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Location of the workflow document inside a workflow directory.
    pub workflow_file: PathBuf,
    /// Location of the protoblocks directory inside a workflow directory.
    pub protoblocks_dir: PathBuf,
    /// File name of the manifest inside each protoblock directory.
    pub manifest_file: String,
    /// Whether to read protoblock manifests at all.
    pub load_protoblock_names: bool,
    /// Handling of records that violate data-integrity rules.
    pub integrity: IntegrityPolicy,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            workflow_file: PathBuf::from(".p7").join("workflow.json"),
            protoblocks_dir: PathBuf::from(".p7").join("protoblocks"),
            manifest_file: "manifest.yaml".into(),
            load_protoblock_names: true,
            integrity: IntegrityPolicy::Abort,
        }
    }
}

impl LoaderConfig {
    /// Parse a configuration from TOML. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> LoadResult<Self> {
        toml::from_str(s).map_err(|e| LoadError::Config(e.to_string()))
    }

    /// Read and parse a TOML configuration file.
    pub fn load(path: &Path) -> LoadResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}
