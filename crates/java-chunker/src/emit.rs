//! Chunk emission: one skeleton chunk per decomposable top-level type,
//! followed by its method chunks in document order.

use crate::collapse;
use crate::config::ChunkerConfig;
use crate::language::{is_decomposable_type, is_fallback_type, is_method_like};
use crate::names;
use crate::types::Chunk;
use std::collections::VecDeque;
use tree_sitter::Node;

/// Lazy chunk sequence over one parsed document.
///
/// Produced fresh per call to [`ParsedDocument::chunks`]; dropping it early
/// is always safe. No state is carried across top-level declarations.
///
/// [`ParsedDocument::chunks`]: crate::ParsedDocument::chunks
pub struct Chunks<'t> {
    source: &'t str,
    config: ChunkerConfig,
    declarations: VecDeque<Node<'t>>,
    pending_methods: VecDeque<Node<'t>>,
}

pub(crate) fn chunks<'t>(root: Node<'t>, source: &'t str, config: ChunkerConfig) -> Chunks<'t> {
    let mut cursor = root.walk();
    let declarations: VecDeque<Node<'t>> = root.children(&mut cursor).collect();
    Chunks {
        source,
        config,
        declarations,
        pending_methods: VecDeque::new(),
    }
}

impl Iterator for Chunks<'_> {
    type Item = Chunk;

    fn next(&mut self) -> Option<Chunk> {
        loop {
            while let Some(method) = self.pending_methods.pop_front() {
                if let Some(chunk) = self.method_chunk(method) {
                    return Some(chunk);
                }
            }

            let declaration = self.declarations.pop_front()?;
            if is_decomposable_type(declaration.kind()) {
                self.pending_methods = method_nodes(declaration).into();
                return Some(self.skeleton_chunk(declaration));
            }
            if is_fallback_type(declaration.kind()) {
                return Some(self.whole_file_chunk(declaration));
            }
        }
    }
}

impl Chunks<'_> {
    /// Skeleton chunk: the text preceding the type (package, imports)
    /// concatenated with the type's text, every method body collapsed.
    fn skeleton_chunk(&self, declaration: Node<'_>) -> Chunk {
        let specs =
            collapse::collapse_specs(declaration, declaration.start_byte(), self.source);
        let type_text = &self.source[declaration.start_byte()..declaration.end_byte()];
        let collapsed = collapse::apply_specs(type_text, specs);

        let (content, start_line) = if self.config.include_preamble {
            let preamble = &self.source[..declaration.start_byte()];
            (format!("{preamble}{collapsed}"), 0)
        } else {
            (collapsed, declaration.start_position().row)
        };

        Chunk::class_definition(content, start_line, declaration.end_position().row)
    }

    /// Fallback for declarations the engine does not decompose: the entire
    /// file text under the declaration's row range.
    fn whole_file_chunk(&self, declaration: Node<'_>) -> Chunk {
        Chunk::class_definition(
            self.source.to_string(),
            declaration.start_position().row,
            declaration.end_position().row,
        )
    }

    fn method_chunk(&self, method: Node<'_>) -> Option<Chunk> {
        let body = collapse::executable_body(method)?;
        let single_row = body.start_position().row == body.end_position().row;
        if single_row && !self.config.emit_single_row_methods {
            return None;
        }

        let identifier = names::method_identifier(method, self.source)?;
        let content = self.source[method.start_byte()..method.end_byte()].to_string();
        Some(Chunk::method_definition(
            content,
            method.start_position().row,
            method.end_position().row,
            identifier,
        ))
    }
}

/// Methods and constructors of `declaration` in pre-order, descending into
/// nested class and interface bodies at their position in the member list.
fn method_nodes(declaration: Node<'_>) -> Vec<Node<'_>> {
    let Some(body) = collapse::type_body(declaration) else {
        return Vec::new();
    };

    let mut cursor = body.walk();
    body.children(&mut cursor)
        .flat_map(|child| {
            if is_method_like(child.kind()) {
                vec![child]
            } else if is_decomposable_type(child.kind()) {
                method_nodes(child)
            } else {
                Vec::new()
            }
        })
        .collect()
}
