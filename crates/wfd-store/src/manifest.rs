//! Protoblock manifests.
//!
//! Each protoblock used by a workflow has a directory named
//! `<id>-<version>` holding a YAML manifest whose `name` maps locales to
//! display names. The default locale is the empty string.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};
use walkdir::WalkDir;
use wfd_types::ProtoblockCatalog;

use crate::error::{LoadError, LoadResult};

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default)]
    name: BTreeMap<String, String>,
}

/// Read the default-locale name from one manifest file.
pub fn read_manifest_name(path: &Path) -> LoadResult<String> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let manifest: Manifest = serde_yaml::from_str(&text).map_err(|e| LoadError::Manifest {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    manifest
        .name
        .get("")
        .cloned()
        .ok_or_else(|| LoadError::Manifest {
            path: path.to_path_buf(),
            reason: "no default-locale name".into(),
        })
}

/// Collect the names of every protoblock under `dir`.
///
/// Never fails: a missing directory, or a protoblock whose manifest cannot
/// be read, is logged as a warning and contributes no names.
pub fn load_catalog(dir: &Path, manifest_file: &str) -> ProtoblockCatalog {
    let mut catalog = ProtoblockCatalog::new();
    if !dir.is_dir() {
        warn!(path = %dir.display(), "no protoblocks directory; names will not be resolved");
        return catalog;
    }

    let entries = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(error = %e, "skipping unreadable protoblocks entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_dir());

    for entry in entries {
        let key = entry.file_name().to_string_lossy().into_owned();
        match read_manifest_name(&entry.path().join(manifest_file)) {
            Ok(name) => catalog.insert(key, name),
            Err(e) => warn!(protoblock = %key, error = %e, "skipping protoblock manifest"),
        }
    }

    debug!(path = %dir.display(), names = catalog.len(), "protoblock catalog loaded");
    catalog
}
