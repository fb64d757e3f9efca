mod config;
mod engine;
mod error;
mod record;
mod splitter;


pub use config::{ChunkerConfig, DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE};
pub use engine::Chunker;
pub use error::ChunkError;
pub use record::{Chunk, ChunkInfo, build_chunk, chunk_id, merge_metadata};
pub use splitter::{BoundarySplitter, Segment, SectionSplitter, Splitter};

use serde::{Deserialize, Serialize};

/// Position of a chunk among the chunks of one document
pub type ChunkIndex = usize;

/// Chunking strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkMethod {
    /// Sliding token window with overlap
    Fixed,
    /// Paragraph accumulation within header-delimited sections
    Recursive,
    /// Accumulation over headers, code fences and list items
    Semantic,
}

impl ChunkMethod {
    /// Name used in configuration and chunk metadata
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Recursive => "recursive",
            Self::Semantic => "semantic",
        }
    }
}
