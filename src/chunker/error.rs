use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChunkError {
    #[error("Unknown chunking method: {0}")]
    UnknownMethod(String),

    #[error(
        "Invalid chunk configuration: overlap ({chunk_overlap}) must be smaller than chunk size ({chunk_size})"
    )]
    InvalidConfig {
        chunk_size: usize,
        chunk_overlap: usize,
    },

    #[error("Document id must not be empty")]
    EmptyDocumentId,

    #[error("Duplicate document id in batch: {0}")]
    DuplicateDocumentId(String),
}
