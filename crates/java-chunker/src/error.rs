use thiserror::Error;

/// Result type for chunker operations
pub type Result<T> = std::result::Result<T, ChunkerError>;

/// Errors that can occur while chunking a document
#[derive(Error, Debug)]
pub enum ChunkerError {
    /// No tree-building capability is registered for the file path
    #[error("Unsupported file: {0}")]
    UnsupportedFile(String),

    /// The parser produced no tree for the source text
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Tree-sitter error
    #[error("Tree-sitter error: {0}")]
    TreeSitterError(String),
}

impl ChunkerError {
    /// Create an unsupported file error
    pub fn unsupported_file(path: impl Into<String>) -> Self {
        Self::UnsupportedFile(path.into())
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    /// Create a tree-sitter error
    pub fn tree_sitter(msg: impl Into<String>) -> Self {
        Self::TreeSitterError(msg.into())
    }
}
