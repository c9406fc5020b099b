//! Collapses method and constructor bodies into placeholders, turning a type
//! declaration's text into a compact skeleton that keeps every signature,
//! field, and nested type intact.

use crate::language::{is_decomposable_type, is_method_like, is_type_body};
use crate::names;
use tree_sitter::Node;

/// One body-replacement splice over a type's own text slice.
///
/// Offsets are relative to the start of the type being collapsed. Specs live
/// only for the duration of one skeleton computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CollapseSpec {
    pub start: usize,
    pub end: usize,
    pub replacement: String,
}

/// Collect collapse splices for every method and constructor body within
/// `node`, including those inside nested class and interface declarations.
///
/// `base_offset` is the start byte of the type whose text will be spliced.
/// Pure recursion: each call returns its own sequence and the caller
/// concatenates, so no accumulator is shared across recursive calls.
pub(crate) fn collapse_specs(
    node: Node<'_>,
    base_offset: usize,
    source: &str,
) -> Vec<CollapseSpec> {
    if is_method_like(node.kind()) {
        return method_spec(node, base_offset, source).into_iter().collect();
    }

    let body = if is_type_body(node.kind()) {
        Some(node)
    } else {
        type_body(node)
    };
    let Some(body) = body else {
        return Vec::new();
    };

    let mut cursor = body.walk();
    body.children(&mut cursor)
        .filter(|child| is_method_like(child.kind()) || is_decomposable_type(child.kind()))
        .flat_map(|child| collapse_specs(child, base_offset, source))
        .collect()
}

/// Apply splices in a single forward pass over a fresh buffer.
///
/// Spans are disjoint and already lie inside `text`: the traversal that
/// produced them never descends into a method body.
pub(crate) fn apply_specs(text: &str, mut specs: Vec<CollapseSpec>) -> String {
    specs.sort_by_key(|spec| spec.start);

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for spec in specs {
        debug_assert!(cursor <= spec.start && spec.end <= text.len());
        out.push_str(&text[cursor..spec.start]);
        out.push_str(&spec.replacement);
        cursor = spec.end;
    }
    out.push_str(&text[cursor..]);
    out
}

/// The executable body of a method-like node. Abstract and interface
/// signatures have none.
pub(crate) fn executable_body(node: Node<'_>) -> Option<Node<'_>> {
    node.child_by_field_name("body")
        .filter(|body| matches!(body.kind(), "block" | "constructor_body"))
}

/// The class or interface body child of a type declaration.
pub(crate) fn type_body(node: Node<'_>) -> Option<Node<'_>> {
    node.child_by_field_name("body")
        .filter(|body| is_type_body(body.kind()))
}

fn method_spec(node: Node<'_>, base_offset: usize, source: &str) -> Option<CollapseSpec> {
    let body = executable_body(node)?;
    let identifier = names::method_identifier(node, source)?;
    Some(CollapseSpec {
        start: body.start_byte() - base_offset,
        end: body.end_byte() - base_offset,
        replacement: format!("{{ id:{identifier} }}"),
    })
}
