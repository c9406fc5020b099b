use crate::config::ChunkerConfig;
use crate::emit::{self, Chunks};
use crate::error::Result;
use crate::provider::TreeProvider;
use crate::types::{Chunk, ChunkKind};
use tree_sitter::{Node, Tree};

/// Main entry point for decomposing source documents into chunks.
pub struct Chunker {
    provider: TreeProvider,
    config: ChunkerConfig,
}

impl Chunker {
    /// Create a new chunker with configuration
    #[must_use]
    pub fn new(config: ChunkerConfig) -> Self {
        Self {
            provider: TreeProvider::new(),
            config,
        }
    }

    /// Chunk a document, collecting the whole sequence.
    ///
    /// Blank input yields an empty sequence with no error, even for paths
    /// with no registered grammar. A non-blank document on an unsupported
    /// path fails as a whole; no partial output is produced.
    pub fn chunk_str(&self, content: &str, file_path: &str) -> Result<Vec<Chunk>> {
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let document = self.parse(content, file_path)?;
        let chunks: Vec<Chunk> = document.chunks().collect();
        log::debug!("chunked {file_path} into {} chunks", chunks.len());
        Ok(chunks)
    }

    /// Parse a document for lazy chunk consumption.
    pub fn parse<'s>(&self, content: &'s str, file_path: &str) -> Result<ParsedDocument<'s>> {
        let tree = self.provider.tree_for(file_path, content)?;
        Ok(ParsedDocument {
            tree,
            source: content,
            config: self.config,
        })
    }

    /// Get configuration
    #[must_use]
    pub const fn config(&self) -> &ChunkerConfig {
        &self.config
    }

    /// Summarize an emitted chunk sequence.
    #[must_use]
    pub fn stats(chunks: &[Chunk]) -> ChunkingStats {
        ChunkingStats {
            total_chunks: chunks.len(),
            class_chunks: chunks
                .iter()
                .filter(|c| c.kind == ChunkKind::ClassDefinition)
                .count(),
            method_chunks: chunks
                .iter()
                .filter(|c| c.kind == ChunkKind::MethodDefinition)
                .count(),
            total_lines: chunks.iter().map(Chunk::line_count).sum(),
        }
    }
}

impl Default for Chunker {
    fn default() -> Self {
        Self::new(ChunkerConfig::default())
    }
}

/// A parsed document whose chunk sequence is consumed lazily.
///
/// Each [`chunks`](Self::chunks) call starts a fresh sequence over the same
/// tree; abandoning an iterator early is always safe since the tree stays
/// owned here.
pub struct ParsedDocument<'s> {
    tree: Tree,
    source: &'s str,
    config: ChunkerConfig,
}

impl<'s> ParsedDocument<'s> {
    /// Lazy chunk sequence: per top-level type, the skeleton chunk first,
    /// then method chunks in document order.
    #[must_use]
    pub fn chunks(&self) -> Chunks<'_> {
        emit::chunks(self.tree.root_node(), self.source, self.config)
    }

    /// Root node of the document, for qualified-name lookups.
    #[must_use]
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Original source text
    #[must_use]
    pub const fn source(&self) -> &'s str {
        self.source
    }
}

/// Statistics about an emitted chunk sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkingStats {
    pub total_chunks: usize,
    pub class_chunks: usize,
    pub method_chunks: usize,
    pub total_lines: usize,
}

impl std::fmt::Display for ChunkingStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Chunks: {} | Classes: {} | Methods: {} | Lines: {}",
            self.total_chunks, self.class_chunks, self.method_chunks, self.total_lines
        )
    }
}
