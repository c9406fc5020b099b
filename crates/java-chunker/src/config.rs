use serde::{Deserialize, Serialize};

/// Configuration for document chunking behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkerConfig {
    /// Prefix skeleton chunks with the text preceding the type declaration
    /// (package declaration and imports)
    pub include_preamble: bool,

    /// Emit standalone chunks for methods whose body opens and closes on a
    /// single row. Such bodies are collapsed in the skeleton either way.
    pub emit_single_row_methods: bool,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            include_preamble: true,
            emit_single_row_methods: false,
        }
    }
}
