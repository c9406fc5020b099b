//! # Context Java Chunker
//!
//! Structural decomposition of Java source files into semantically
//! meaningful, independently retrievable chunks for semantic search and AI
//! context.
//!
//! ## Philosophy
//!
//! A type is worth retrieving twice: once as a compact skeleton that shows
//! its whole shape, and once per method body. The chunker therefore emits:
//! - one skeleton chunk per top-level class or interface, with every method
//!   and constructor body (including inside nested types) collapsed to a
//!   placeholder carrying a stable position-encoded identifier
//! - one chunk per method or constructor body, addressable through that same
//!   identifier together with the owning type's qualified name
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     │
//!     ├──> Language Detection (from file path)
//!     │
//!     ├──> Tree-sitter Parsing → syntax tree
//!     │
//!     ├──> Per top-level declaration
//!     │    ├─> Collapse method bodies → skeleton chunk
//!     │    └─> Recursive descent → method chunks
//!     │
//!     └──> Lazy Chunk sequence consumed by the indexing layer
//! ```
//!
//! Qualified names use the binary-name convention for nesting
//! (`pkg.Outer$Inner`) on every resolution path, so names attached while
//! chunking and names resolved later from arbitrary nodes always agree.
//!
//! ## Example
//!
//! ```rust
//! use context_java_chunker::{ChunkKind, Chunker, ChunkerConfig};
//!
//! let code = r#"
//! package demo;
//!
//! class Greeter {
//!     String greet(String name) {
//!         return "hello " + name;
//!     }
//! }
//! "#;
//!
//! let chunker = Chunker::new(ChunkerConfig::default());
//! let chunks = chunker.chunk_str(code, "Greeter.java").unwrap();
//!
//! assert_eq!(chunks.len(), 2);
//! assert_eq!(chunks[0].kind, ChunkKind::ClassDefinition);
//! assert!(chunks[0].content.contains("{ id:greet["));
//! assert_eq!(chunks[1].kind, ChunkKind::MethodDefinition);
//! ```

mod chunker;
mod collapse;
mod config;
mod emit;
mod error;
mod language;
mod names;
mod provider;
mod types;

pub use chunker::{Chunker, ChunkingStats, ParsedDocument};
pub use config::ChunkerConfig;
pub use emit::Chunks;
pub use error::{ChunkerError, Result};
pub use language::Language;
pub use names::{
    method_identifier, resolve_package_name, resolve_qualified_name, resolve_simple_name,
    resolve_type_name,
};
pub use provider::TreeProvider;
pub use types::{Chunk, ChunkKind};
