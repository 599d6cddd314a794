use thiserror::Error;

use crate::guid::Guid;

/// Errors produced while building the entity model from a raw document.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The document has no `blocks` key.
    #[error("document has no `blocks` list")]
    MissingBlocks,

    /// A block record carries a `type` discriminator other than
    /// `COMPOSITE` or `BLOCK`.
    #[error("block {guid} has unknown type {kind:?}")]
    UnknownBlockType { guid: Guid, kind: String },

    /// A `BLOCK` record has no `protoblock` reference.
    #[error("protoblock {guid} has no protoblock reference")]
    MissingProtoblock { guid: Guid },

    /// A block's `parent` does not name any block of the same snapshot.
    #[error("block {guid} references missing parent {parent}")]
    MissingParent { guid: Guid, parent: Guid },

    /// The document does not match the expected record shapes.
    #[error("malformed workflow document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for model results.
pub type ModelResult<T> = Result<T, ModelError>;
