use super::{ChunkError, ChunkMethod};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default target chunk size in tokens
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// Default overlap between fixed-size chunks in tokens
pub const DEFAULT_CHUNK_OVERLAP: usize = 200;

/// Chunking engine configuration
///
/// `method` is kept as the raw strategy name so configurations can be read
/// from files and flags verbatim; an unknown name is reported by
/// [`ChunkerConfig::validate`] when chunking is first attempted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChunkerConfig {
    /// Target tokens per chunk
    pub chunk_size: usize,
    /// Tokens shared by consecutive fixed-size chunks
    pub chunk_overlap: usize,
    /// Strategy name: `fixed`, `recursive` or `semantic`
    pub method: String,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
            method: ChunkMethod::Fixed.to_string(),
        }
    }
}

impl ChunkerConfig {
    /// Create a configuration with the given chunk size and default overlap
    pub fn new(chunk_size: usize) -> Self {
        Self {
            chunk_size,
            ..Default::default()
        }
    }

    /// Set the overlap between chunks
    pub fn with_overlap(mut self, chunk_overlap: usize) -> Self {
        self.chunk_overlap = chunk_overlap;
        self
    }

    /// Set the strategy by name
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// Resolve the strategy and check the size/overlap precondition
    ///
    /// # Errors
    /// * [`ChunkError::UnknownMethod`] if `method` names no strategy
    /// * [`ChunkError::InvalidConfig`] if `chunk_overlap >= chunk_size`
    pub fn validate(&self) -> Result<ChunkMethod, ChunkError> {
        let method = self.method.parse::<ChunkMethod>()?;

        if self.chunk_overlap >= self.chunk_size {
            return Err(ChunkError::InvalidConfig {
                chunk_size: self.chunk_size,
                chunk_overlap: self.chunk_overlap,
            });
        }

        Ok(method)
    }
}

impl fmt::Display for ChunkMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChunkMethod {
    type Err = ChunkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fixed" => Ok(Self::Fixed),
            "recursive" => Ok(Self::Recursive),
            "semantic" => Ok(Self::Semantic),
            other => Err(ChunkError::UnknownMethod(other.to_string())),
        }
    }
}
