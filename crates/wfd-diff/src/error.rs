//! Error types for the diff crate.

use wfd_types::Guid;

/// Errors that can occur during diff operations.
///
/// Legitimate differences between snapshots are never errors; only
/// malformed input is.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// A link endpoint names a port that no block of the snapshot owns.
    #[error("link {link} references port {port} owned by no block")]
    UnresolvedPort { link: Guid, port: Guid },
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
