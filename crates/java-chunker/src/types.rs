use serde::{Deserialize, Serialize};

/// A retrievable unit of a source document.
///
/// Chunks are immutable once emitted; ownership transfers to the consumer,
/// which may attach the owning type's qualified name via
/// [`with_class_name`](Self::with_class_name) before storing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Chunk {
    /// The chunk text
    pub content: String,

    /// Start row (zero-based, inclusive)
    pub start_line: usize,

    /// End row (zero-based, inclusive)
    pub end_line: usize,

    /// What this chunk represents
    pub kind: ChunkKind,

    /// Position-encoded method address, set on method chunks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method_identifier: Option<String>,

    /// Qualified name of the owning type, attached by the consumer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

impl Chunk {
    /// Create a class-definition chunk
    #[must_use]
    pub const fn class_definition(content: String, start_line: usize, end_line: usize) -> Self {
        Self {
            content,
            start_line,
            end_line,
            kind: ChunkKind::ClassDefinition,
            method_identifier: None,
            class_name: None,
        }
    }

    /// Create a method-definition chunk
    #[must_use]
    pub const fn method_definition(
        content: String,
        start_line: usize,
        end_line: usize,
        method_identifier: String,
    ) -> Self {
        Self {
            content,
            start_line,
            end_line,
            kind: ChunkKind::MethodDefinition,
            method_identifier: Some(method_identifier),
            class_name: None,
        }
    }

    /// Attach the owning type's qualified name
    #[must_use]
    pub fn with_class_name(mut self, name: impl Into<String>) -> Self {
        self.class_name = Some(name.into());
        self
    }

    /// Get the number of rows this chunk spans
    #[must_use]
    pub const fn line_count(&self) -> usize {
        self.end_line.saturating_sub(self.start_line) + 1
    }

    /// Check if chunk covers a specific row
    #[must_use]
    pub const fn contains_line(&self, line: usize) -> bool {
        line >= self.start_line && line <= self.end_line
    }
}

/// Kind of emitted chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChunkKind {
    /// Skeleton of a type declaration, or a whole-file fallback
    ClassDefinition,
    /// A single method or constructor
    MethodDefinition,
}

impl ChunkKind {
    /// Get the wire tag for this kind
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ClassDefinition => "class_definition",
            Self::MethodDefinition => "method_definition",
        }
    }
}
