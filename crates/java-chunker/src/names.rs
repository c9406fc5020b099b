//! Qualified-name resolution over the syntax tree.
//!
//! Nested types use the binary-name convention throughout: `pkg.Outer$Inner`.
//! The `.` separator joins package segments only, so a name derived while
//! chunking always compares equal to one resolved later from an arbitrary
//! node of the same document.

use crate::language::is_type_declaration;
use tree_sitter::Node;

/// Resolve the dotted package name governing `node`'s compilation unit.
///
/// Walks to the tree root and scans only the root's direct children for a
/// package declaration; nested scopes are never eligible. `None` when the
/// file declares no package.
pub fn resolve_package_name(node: Node<'_>, source: &str) -> Option<String> {
    let mut root = node;
    while let Some(parent) = root.parent() {
        root = parent;
    }

    let mut cursor = root.walk();
    let package = root
        .children(&mut cursor)
        .find(|child| child.kind() == "package_declaration")?;

    let parts = identifier_parts(package, source);
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("."))
    }
}

/// Resolve the simple name of a declaration: the text of the first descendant
/// `identifier` token in pre-order.
///
/// Best-effort: a well-formed declaration puts its own name identifier before
/// any nested construct's identifiers in document order; this is not
/// independently validated.
pub fn resolve_simple_name(node: Node<'_>, source: &str) -> Option<String> {
    if node.kind() == "identifier" {
        return node.utf8_text(source.as_bytes()).ok().map(str::to_string);
    }

    let mut cursor = node.walk();
    node.children(&mut cursor)
        .find_map(|child| resolve_simple_name(child, source))
}

/// Resolve a type declaration's qualified name.
///
/// With `parent` (the already-resolved name of the immediately enclosing
/// type, supplied top-down) the result is `parent$Simple`; without it, the
/// package-qualified simple name, or the bare simple name when the file has
/// no package declaration.
pub fn resolve_type_name(node: Node<'_>, source: &str, parent: Option<&str>) -> Option<String> {
    let simple = resolve_simple_name(node, source)?;
    match parent {
        Some(parent) => Some(format!("{parent}${simple}")),
        None => match resolve_package_name(node, source) {
            Some(package) => Some(format!("{package}.{simple}")),
            None => Some(simple),
        },
    }
}

/// Resolve the qualified name of the type owning an arbitrary node.
///
/// Walks upward collecting the enclosing type-declaration chain (the node
/// itself counts when it is a type declaration), then folds it top-down with
/// [`resolve_type_name`]. Deterministic and side-effect-free; `None` when no
/// enclosing type exists or a link in the chain has no resolvable name.
pub fn resolve_qualified_name(node: Node<'_>, source: &str) -> Option<String> {
    let mut chain = Vec::new();
    let mut current = Some(node);
    while let Some(n) = current {
        if is_type_declaration(n.kind()) {
            chain.push(n);
        }
        current = n.parent();
    }
    chain.reverse();

    let mut resolved: Option<String> = None;
    for declaration in chain {
        resolved = resolve_type_name(declaration, source, resolved.as_deref());
        resolved.as_ref()?;
    }
    resolved
}

/// Position-encoded method address: `name[startRow-endRow]`, rows zero-based.
///
/// Uniqueness within one file version is best-effort: distinct occurrences
/// collide only if the tree assigns them the same name and row range.
pub fn method_identifier(node: Node<'_>, source: &str) -> Option<String> {
    let name = resolve_simple_name(node, source)?;
    Some(format!(
        "{name}[{}-{}]",
        node.start_position().row,
        node.end_position().row
    ))
}

fn identifier_parts(node: Node<'_>, source: &str) -> Vec<String> {
    if node.kind() == "identifier" {
        return node
            .utf8_text(source.as_bytes())
            .ok()
            .map(str::to_string)
            .into_iter()
            .collect();
    }

    let mut cursor = node.walk();
    node.children(&mut cursor)
        .flat_map(|child| identifier_parts(child, source))
        .collect()
}
