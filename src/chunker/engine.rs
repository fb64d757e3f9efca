use super::record::{Chunk, ChunkInfo, build_chunk};
use super::splitter::{BoundarySplitter, SectionSplitter, Splitter, accumulate};
use super::{ChunkError, ChunkMethod, ChunkerConfig};
use crate::document::Document;
use crate::tokenizer::{Tokenizer, WordTokenizer};
use std::collections::HashSet;
use std::fmt;

/// Stateless chunking engine
///
/// Holds only its configuration and tokenizer, so one instance can be shared
/// read-only across threads and reused for any number of documents.
pub struct Chunker {
    config: ChunkerConfig,
    tokenizer: Box<dyn Tokenizer>,
}

impl Chunker {
    /// Create an engine using [`WordTokenizer`]
    ///
    /// Never fails: configuration problems are reported by the first call to
    /// [`Chunker::chunk_document`].
    pub fn new(config: ChunkerConfig) -> Self {
        Self::with_tokenizer(config, WordTokenizer)
    }

    /// Create an engine with a custom tokenizer
    pub fn with_tokenizer(config: ChunkerConfig, tokenizer: impl Tokenizer + 'static) -> Self {
        Self {
            config,
            tokenizer: Box::new(tokenizer),
        }
    }

    pub fn config(&self) -> &ChunkerConfig {
        &self.config
    }

    /// Split one document into ordered chunks
    ///
    /// Empty content yields no chunks.
    ///
    /// # Errors
    /// * [`ChunkError::UnknownMethod`] if the configured method is not recognized
    /// * [`ChunkError::InvalidConfig`] if overlap is not smaller than chunk size
    pub fn chunk_document(&self, document: &Document) -> Result<Vec<Chunk>, ChunkError> {
        let method = self.config.validate().inspect_err(|e| {
            tracing::warn!(document_id = %document.id, error = %e, "Rejected chunk configuration");
        })?;

        tracing::debug!(
            document_id = %document.id,
            %method,
            chunk_size = self.config.chunk_size,
            chunk_overlap = self.config.chunk_overlap,
            "Chunking document"
        );

        let chunks = match method {
            ChunkMethod::Fixed => self.fixed_chunks(document),
            ChunkMethod::Recursive => self.accumulated_chunks(document, &SectionSplitter, method),
            ChunkMethod::Semantic => self.accumulated_chunks(document, &BoundarySplitter, method),
        };

        tracing::debug!(
            document_id = %document.id,
            %method,
            chunk_count = chunks.len(),
            "Created chunks"
        );

        Ok(chunks)
    }

    /// Chunk a batch of documents in order
    ///
    /// Document ids must be non-empty and unique within the batch so that
    /// every chunk id is unique. Ids are checked before any chunking happens.
    ///
    /// # Errors
    /// * [`ChunkError::EmptyDocumentId`] / [`ChunkError::DuplicateDocumentId`]
    /// * any error of [`Chunker::chunk_document`]
    pub fn chunk_documents(&self, documents: &[Document]) -> Result<Vec<Chunk>, ChunkError> {
        let mut seen = HashSet::with_capacity(documents.len());
        for document in documents {
            if document.id.is_empty() {
                return Err(ChunkError::EmptyDocumentId);
            }
            if !seen.insert(document.id.as_str()) {
                return Err(ChunkError::DuplicateDocumentId(document.id.clone()));
            }
        }

        let mut chunks = Vec::new();
        for document in documents {
            chunks.extend(self.chunk_document(document)?);
        }

        Ok(chunks)
    }

    /// Sliding window of `chunk_size` tokens advancing by `chunk_size - chunk_overlap`
    ///
    /// Requires a validated configuration (step > 0).
    fn fixed_chunks(&self, document: &Document) -> Vec<Chunk> {
        let tokens = self.tokenizer.tokenize(&document.content);
        let step = self.config.chunk_size - self.config.chunk_overlap;
        let total = tokens.len().div_ceil(step);

        (0..tokens.len())
            .step_by(step)
            .enumerate()
            .map(|(index, start)| {
                let end = (start + self.config.chunk_size).min(tokens.len());
                let info = ChunkInfo::new(ChunkMethod::Fixed)
                    .with_index(index)
                    .with_window(start, end, total);
                Chunk::new(document, tokens[start..end].join(" "), info)
            })
            .collect()
    }

    fn accumulated_chunks(
        &self,
        document: &Document,
        splitter: &dyn Splitter,
        method: ChunkMethod,
    ) -> Vec<Chunk> {
        let mut chunks = Vec::new();

        accumulate(
            splitter.split(&document.content),
            self.config.chunk_size,
            self.tokenizer.as_ref(),
            |text, section| {
                let info = ChunkInfo::new(method)
                    .with_index(chunks.len())
                    .with_section(section);
                chunks.push(build_chunk(document, &text, info));
            },
        );

        chunks
    }
}

impl Default for Chunker {
    fn default() -> Self {
        Self::new(ChunkerConfig::default())
    }
}

impl fmt::Debug for Chunker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chunker")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
