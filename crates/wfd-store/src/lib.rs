//! Loading workflow snapshots from disk.
//!
//! A workflow is given either as a directory (the workflow document lives at
//! `.p7/workflow.json` inside it) or as the path of the document itself.
//! Protoblock display names are read from per-protoblock manifests stored
//! next to the document and injected into snapshot construction.
//!
//! # Key Types
//!
//! - [`WorkflowLoader`] -- Resolves inputs and builds [`wfd_types::Workflow`] snapshots
//! - [`WorkflowSource`] -- Where a workflow document and its protoblocks live
//! - [`LoadedWorkflow`] -- A snapshot plus the source it came from
//! - [`LoaderConfig`] -- TOML-configurable path conventions and policies

pub mod config;
pub mod error;
pub mod loader;
pub mod manifest;
pub mod source;

pub use config::LoaderConfig;
pub use error::{LoadError, LoadResult};
pub use loader::{read_document, LoadedWorkflow, WorkflowLoader};
pub use manifest::{load_catalog, read_manifest_name};
pub use source::WorkflowSource;
