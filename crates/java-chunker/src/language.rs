use std::path::Path;

/// Source language of a document, detected from its file path.
///
/// The chunker targets the Java grammar; the registry exists so callers route
/// every file through the same path-based selection and unsupported files
/// fail uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Java,
    Unknown,
}

impl Language {
    /// Detect language from file extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "java" => Language::Java,
            _ => Language::Unknown,
        }
    }

    /// Detect language from file path
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(Language::Unknown)
    }

    /// Get language name as string
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Java => "java",
            Language::Unknown => "unknown",
        }
    }

    /// Get the Tree-sitter grammar for this language, if one is registered
    pub fn grammar(self) -> Option<tree_sitter::Language> {
        match self {
            Language::Java => Some(tree_sitter_java::LANGUAGE.into()),
            Language::Unknown => None,
        }
    }
}

// Node-kind predicates for the Java grammar. The resolver, the collapse
// engine, and the emission engine all dispatch on these; keeping them in one
// place keeps the three in agreement on the grammar shape.

/// Type declarations that own a qualified name.
pub(crate) fn is_type_declaration(kind: &str) -> bool {
    is_decomposable_type(kind) || is_fallback_type(kind)
}

/// Class-shaped declarations decomposed into a skeleton plus method chunks.
pub(crate) fn is_decomposable_type(kind: &str) -> bool {
    matches!(kind, "class_declaration" | "interface_declaration")
}

/// Declarations emitted whole rather than decomposed.
pub(crate) fn is_fallback_type(kind: &str) -> bool {
    matches!(kind, "enum_declaration" | "annotation_type_declaration")
}

/// Members carrying an executable body worth collapsing.
pub(crate) fn is_method_like(kind: &str) -> bool {
    matches!(kind, "method_declaration" | "constructor_declaration")
}

/// Bodies whose members the engines descend into.
pub(crate) fn is_type_body(kind: &str) -> bool {
    matches!(kind, "class_body" | "interface_body")
}
