use crate::error::{ChunkerError, Result};
use crate::language::Language;
use tree_sitter::{Parser, Tree};

/// Builds syntax trees for source documents, selecting the grammar by file
/// path.
///
/// A fresh parser is constructed per invocation; the returned [`Tree`] owns
/// every node handed out downstream, so dropping it invalidates nothing the
/// consumer still holds.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeProvider;

impl TreeProvider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Parse `text` with the grammar registered for `path`.
    ///
    /// Fails with [`ChunkerError::UnsupportedFile`] when no grammar is
    /// registered for the path; callers treat that as fatal for the file.
    pub fn tree_for(&self, path: &str, text: &str) -> Result<Tree> {
        let language = Language::from_path(path);
        let grammar = language
            .grammar()
            .ok_or_else(|| ChunkerError::unsupported_file(path))?;

        let mut parser = Parser::new();
        parser
            .set_language(&grammar)
            .map_err(|e| ChunkerError::tree_sitter(format!("Failed to set language: {e}")))?;

        parser
            .parse(text, None)
            .ok_or_else(|| ChunkerError::parse("parser produced no tree"))
    }
}
