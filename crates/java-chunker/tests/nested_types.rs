use context_java_chunker::{
    resolve_qualified_name, Chunk, ChunkKind, Chunker, ChunkerConfig,
};
use pretty_assertions::assert_eq;
use tree_sitter::Node;

const FIXTURE: &str = "\
package com.example.test;

class Outer {
    Outer() {
        this(null);
    }

    Outer(String s) {
        init(s);
    }

    void m() {
        int x = 1;
    }

    static class Inner {
        static void im() {
            run();
        }
    }
}
";

fn chunk(code: &str) -> Vec<Chunk> {
    Chunker::new(ChunkerConfig::default())
        .chunk_str(code, "Outer.java")
        .expect("chunking failed")
}

fn find_all<'t>(node: Node<'t>, kind: &str) -> Vec<Node<'t>> {
    let mut found = Vec::new();
    if node.kind() == kind {
        found.push(node);
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        found.extend(find_all(child, kind));
    }
    found
}

#[test]
fn emits_skeleton_then_every_method_in_document_order() {
    let chunks = chunk(FIXTURE);

    let kinds: Vec<ChunkKind> = chunks.iter().map(|c| c.kind).collect();
    assert_eq!(
        kinds,
        [
            ChunkKind::ClassDefinition,
            ChunkKind::MethodDefinition,
            ChunkKind::MethodDefinition,
            ChunkKind::MethodDefinition,
            ChunkKind::MethodDefinition,
        ]
    );

    let identifiers: Vec<&str> = chunks
        .iter()
        .filter_map(|c| c.method_identifier.as_deref())
        .collect();
    assert_eq!(
        identifiers,
        ["Outer[3-5]", "Outer[7-9]", "m[11-13]", "im[16-18]"]
    );
}

#[test]
fn skeleton_collapses_every_body_and_keeps_the_preamble() {
    let chunks = chunk(FIXTURE);
    let skeleton = &chunks[0];

    assert_eq!(skeleton.start_line, 0);
    assert_eq!(skeleton.end_line, 20);
    assert!(skeleton.content.starts_with("package com.example.test;"));

    for placeholder in [
        "{ id:Outer[3-5] }",
        "{ id:Outer[7-9] }",
        "{ id:m[11-13] }",
        "{ id:im[16-18] }",
    ] {
        assert!(
            skeleton.content.contains(placeholder),
            "skeleton is missing {placeholder}"
        );
    }

    for body_text in ["this(null);", "init(s);", "int x = 1;", "run();"] {
        assert!(
            !skeleton.content.contains(body_text),
            "skeleton still contains body text {body_text:?}"
        );
    }

    // Structure survives verbatim.
    assert!(skeleton.content.contains("static class Inner {"));
}

#[test]
fn consumer_attaches_qualified_names_that_match_the_nesting() {
    let chunker = Chunker::new(ChunkerConfig::default());
    let document = chunker.parse(FIXTURE, "Outer.java").unwrap();

    let methods = find_all(document.root(), "method_declaration");
    let im = methods
        .iter()
        .find(|m| {
            FIXTURE[m.start_byte()..m.end_byte()].contains("im()")
        })
        .copied()
        .expect("fixture declares im()");

    let class_name = resolve_qualified_name(im, FIXTURE).unwrap();
    assert_eq!(class_name, "com.example.test.Outer$Inner");

    let tagged = document
        .chunks()
        .find(|c| c.method_identifier.as_deref() == Some("im[16-18]"))
        .unwrap()
        .with_class_name(class_name);
    assert_eq!(
        tagged.class_name.as_deref(),
        Some("com.example.test.Outer$Inner")
    );

    let outer_ctor = find_all(document.root(), "constructor_declaration")[0];
    assert_eq!(
        resolve_qualified_name(outer_ctor, FIXTURE).as_deref(),
        Some("com.example.test.Outer")
    );
}

#[test]
fn single_row_bodies_collapse_without_standalone_chunks() {
    let code = "\
package com.example.test;

class Flat {
    Flat() {}

    void wide() {
        grow();
    }
}
";
    let chunks = chunk(code);

    assert_eq!(chunks.len(), 2);
    assert!(chunks[0].content.contains("Flat() { id:Flat[3-3] }"));
    assert_eq!(chunks[1].method_identifier.as_deref(), Some("wide[5-7]"));
}

#[test]
fn rechunking_identical_input_is_byte_identical() {
    assert_eq!(chunk(FIXTURE), chunk(FIXTURE));
}

#[test]
fn serialized_chunks_use_the_wire_tags() {
    let chunks = chunk(FIXTURE);

    let skeleton = serde_json::to_value(&chunks[0]).unwrap();
    assert_eq!(skeleton["kind"], "class_definition");

    let method = serde_json::to_value(&chunks[1]).unwrap();
    assert_eq!(method["kind"], "method_definition");
    assert_eq!(method["method_identifier"], "Outer[3-5]");
}
