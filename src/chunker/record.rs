use super::{ChunkIndex, ChunkMethod};
use crate::document::{Document, Metadata};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A chunk of a document ready for embedding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chunk {
    /// `{document_id}-chunk-{index}`
    pub id: String,
    /// Id of the parent document
    pub document_id: String,
    /// Zero-based position among the parent's chunks. Sort on this, not on `id`.
    pub index: ChunkIndex,
    /// Text of this chunk
    pub content: String,
    /// Parent metadata plus a `chunk` entry describing this chunk
    pub metadata: Metadata,
}

/// Per-chunk metadata stored under the `chunk` key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkInfo {
    pub index: ChunkIndex,
    pub method: ChunkMethod,
    /// Section of the document (recursive strategy)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<usize>,
    /// First token of the window (fixed strategy)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<usize>,
    /// Exclusive end token of the window (fixed strategy)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<usize>,
    /// Estimated chunk count for the document (fixed strategy). Informational
    /// only: it may differ from the number of chunks actually emitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}

impl ChunkInfo {
    /// Defaults for a strategy: index 0, no strategy-specific fields
    pub fn new(method: ChunkMethod) -> Self {
        Self {
            index: 0,
            method,
            section: None,
            start: None,
            end: None,
            total: None,
        }
    }

    pub fn with_index(mut self, index: ChunkIndex) -> Self {
        self.index = index;
        self
    }

    pub fn with_section(mut self, section: Option<usize>) -> Self {
        self.section = section;
        self
    }

    /// Token window `[start, end)` and the per-document chunk estimate
    pub fn with_window(mut self, start: usize, end: usize, total: usize) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self.total = Some(total);
        self
    }

    /// JSON mapping stored under `metadata.chunk`
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert("index".into(), self.index.into());
        map.insert("method".into(), self.method.as_str().into());

        let optional = [
            ("section", self.section),
            ("start", self.start),
            ("end", self.end),
            ("total", self.total),
        ];
        for (key, value) in optional {
            if let Some(v) = value {
                map.insert(key.into(), v.into());
            }
        }

        Value::Object(map)
    }
}

impl Chunk {
    /// Assemble a chunk, keeping `content` exactly as given
    pub fn new(document: &Document, content: String, info: ChunkInfo) -> Self {
        Self {
            id: chunk_id(&document.id, info.index),
            document_id: document.id.clone(),
            index: info.index,
            content,
            metadata: merge_metadata(&document.metadata, &info),
        }
    }

    /// Read back the `chunk` entry of the metadata
    pub fn info(&self) -> Option<ChunkInfo> {
        self.metadata
            .get("chunk")
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }
}

/// Build a chunk from accumulated text, trimming surrounding whitespace
pub fn build_chunk(document: &Document, text: &str, info: ChunkInfo) -> Chunk {
    Chunk::new(document, text.trim().to_string(), info)
}

/// Identifier of the `index`-th chunk of a document
pub fn chunk_id(document_id: &str, index: ChunkIndex) -> String {
    format!("{}-chunk-{}", document_id, index)
}

/// Copy parent metadata and attach the chunk entry
///
/// Always returns a fresh map; the parent is never touched, so chunks never
/// share metadata with each other or with their document. An existing
/// `chunk` key on the parent is replaced.
pub fn merge_metadata(parent: &Metadata, info: &ChunkInfo) -> Metadata {
    let mut merged = parent.clone();
    merged.insert("chunk".into(), info.to_value());
    merged
}
