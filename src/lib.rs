// Public API exports
pub mod chunker;
pub mod document;
pub mod tokenizer;

// Re-export main types for convenience
pub use chunker::{
    Chunk, ChunkError, ChunkInfo, ChunkMethod, Chunker, ChunkerConfig, DEFAULT_CHUNK_OVERLAP,
    DEFAULT_CHUNK_SIZE,
};

pub use document::{Document, DocumentError, Metadata, load_directory, load_document};

pub use tokenizer::{Tokenizer, WordTokenizer};
