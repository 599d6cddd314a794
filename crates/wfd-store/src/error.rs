//! Error types for the store crate.

use std::path::PathBuf;

use wfd_types::ModelError;

/// Errors that can occur while loading a workflow.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not valid JSON.
    #[error("cannot parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The document has no `blocks` key.
    #[error("{path} has wrong format: no `blocks` list")]
    MissingBlocks { path: PathBuf },

    /// A protoblock manifest is unreadable or lacks a default name.
    #[error("bad protoblock manifest {path}: {reason}")]
    Manifest { path: PathBuf, reason: String },

    /// The loader configuration could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// The document was read but its records are invalid.
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Convenience alias for load results.
pub type LoadResult<T> = Result<T, LoadError>;
