use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::LoaderConfig;

/// Protoblocks directory used when the input names a document file.
pub const SIBLING_PROTOBLOCKS_DIR: &str = "protoblocks";

/// Where a workflow document and its protoblock manifests live.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkflowSource {
    /// The path as given by the user.
    pub input: PathBuf,
    /// The workflow JSON document.
    pub document: PathBuf,
    /// Directory holding one `<id>-<version>` subdirectory per protoblock.
    pub protoblocks_dir: PathBuf,
}

impl WorkflowSource {
    /// Resolve a user-supplied path.
    ///
    /// A directory resolves to the configured document and protoblocks
    /// locations inside it. Anything else is taken as the document itself,
    /// with protoblocks in a sibling `protoblocks` directory.
    pub fn resolve(input: impl AsRef<Path>, config: &LoaderConfig) -> Self {
        let input = input.as_ref().to_path_buf();
        let source = if input.is_dir() {
            Self {
                document: input.join(&config.workflow_file),
                protoblocks_dir: input.join(&config.protoblocks_dir),
                input,
            }
        } else {
            let parent = input
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default();
            Self {
                document: input.clone(),
                protoblocks_dir: parent.join(SIBLING_PROTOBLOCKS_DIR),
                input,
            }
        };
        debug!(
            input = %source.input.display(),
            document = %source.document.display(),
            "resolved workflow source"
        );
        source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_uses_convention() {
        let dir = tempfile::tempdir().unwrap();
        let source = WorkflowSource::resolve(dir.path(), &LoaderConfig::default());
        assert_eq!(source.document, dir.path().join(".p7/workflow.json"));
        assert_eq!(source.protoblocks_dir, dir.path().join(".p7/protoblocks"));
    }

    #[test]
    fn file_uses_sibling_protoblocks() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("workflow.json");
        std::fs::write(&file, "{}").unwrap();

        let source = WorkflowSource::resolve(&file, &LoaderConfig::default());
        assert_eq!(source.document, file);
        assert_eq!(source.protoblocks_dir, dir.path().join("protoblocks"));
    }

    #[test]
    fn missing_path_is_treated_as_file() {
        let source = WorkflowSource::resolve("/nonexistent/flow.json", &LoaderConfig::default());
        assert_eq!(source.document, PathBuf::from("/nonexistent/flow.json"));
        assert_eq!(source.protoblocks_dir, PathBuf::from("/nonexistent/protoblocks"));
    }
}
