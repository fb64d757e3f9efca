mod error;
pub mod loader;


pub use error::DocumentError;
pub use loader::{clean_content, load_directory, load_document};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Opaque key/value metadata carried from a document onto its chunks
pub type Metadata = Map<String, Value>;

/// A unit of text submitted for chunking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Caller-assigned identifier, unique within a batch
    pub id: String,
    /// Text to chunk
    pub content: String,
    /// Passed through verbatim onto every chunk
    #[serde(default)]
    pub metadata: Metadata,
}

impl Document {
    /// Create a document with empty metadata
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            metadata: Metadata::new(),
        }
    }

    /// Attach a metadata entry
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}
