//! Composite literal collection.
//!
//! Builds the per-file literal arena. Every composite literal in the file
//! becomes an [`Initializer`], including type-elided `{...}` forms nested in
//! slice, array and map literals. Parents are pushed before their children,
//! so a single forward pass over the arena can hand types down to elided
//! literals during resolution.

use tree_sitter::Node;

use crate::core::collect::structs::type_expr;
use crate::core::data::{Element, ElementKind, Initializer, PackageId, Pos, TypeExpr};
use crate::core::parsers::go::{ParsedGo, named_children, node_pos, node_text};

/// Collect every composite literal in a file.
pub fn collect_literals(parsed: &ParsedGo, package: &PackageId) -> Vec<Initializer> {
    let mut arena = Vec::new();
    walk(
        parsed.tree.root_node(),
        &parsed.source,
        package,
        &mut arena,
    );
    arena
}

/// Depth-first search for literals outside any literal body. Once a literal
/// is found its whole subtree is handled by the builder, which also picks up
/// literals buried in element expressions.
fn walk(node: Node, source: &str, package: &PackageId, arena: &mut Vec<Initializer>) {
    if node.kind() == "composite_literal" && build_composite(node, source, package, arena).is_some()
    {
        return;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        walk(child, source, package, arena);
    }
}

fn build_composite(
    node: Node,
    source: &str,
    package: &PackageId,
    arena: &mut Vec<Initializer>,
) -> Option<usize> {
    let ty = node.child_by_field_name("type")?;
    let body = node.child_by_field_name("body")?;
    Some(build_body(
        body,
        Some(type_expr(ty, source, package)),
        node_pos(node),
        source,
        package,
        arena,
    ))
}

fn build_body(
    body: Node,
    type_expr: Option<TypeExpr>,
    pos: Pos,
    source: &str,
    package: &PackageId,
    arena: &mut Vec<Initializer>,
) -> usize {
    // Reserve the slot first so this literal's index is lower than any of its
    // children's.
    let idx = arena.len();
    arena.push(Initializer {
        type_expr: None,
        pos,
        lbrace: 0,
        rbrace: 0,
        elements: Vec::new(),
    });

    let mut elements = Vec::new();
    for child in named_children(body) {
        let element = match child.kind() {
            "keyed_element" => build_keyed(child, source, package, arena),
            _ => build_positional(child, source, package, arena),
        };
        elements.push(element);
    }

    arena[idx] = Initializer {
        type_expr,
        pos,
        lbrace: body.start_byte(),
        rbrace: body.end_byte().saturating_sub(1),
        elements,
    };
    idx
}

fn build_keyed(
    node: Node,
    source: &str,
    package: &PackageId,
    arena: &mut Vec<Initializer>,
) -> Element {
    let parts = named_children(node);
    let key = parts.first().copied().map(unwrap_element);
    let value = if parts.len() > 1 {
        parts.last().copied().map(unwrap_element)
    } else {
        None
    };

    let field = key.and_then(|key| match key.kind() {
        "identifier" | "field_identifier" => Some(node_text(key, source).to_string()),
        _ => None,
    });
    let key = key.and_then(|key| build_value(key, source, package, arena));
    let value = value.and_then(|value| build_value(value, source, package, arena));

    Element {
        start: node.start_byte(),
        end: node.end_byte(),
        kind: ElementKind::Keyed { field, key, value },
    }
}

fn build_positional(
    node: Node,
    source: &str,
    package: &PackageId,
    arena: &mut Vec<Initializer>,
) -> Element {
    let value = build_value(unwrap_element(node), source, package, arena);
    Element {
        start: node.start_byte(),
        end: node.end_byte(),
        kind: ElementKind::Positional { value },
    }
}

/// Arena index for a key or value that is itself a literal. Any other
/// expression is searched for literals nested deeper inside it, which become
/// standalone arena entries.
fn build_value(
    node: Node,
    source: &str,
    package: &PackageId,
    arena: &mut Vec<Initializer>,
) -> Option<usize> {
    match node.kind() {
        "literal_value" => Some(build_body(
            node,
            None,
            node_pos(node),
            source,
            package,
            arena,
        )),
        "composite_literal" => build_composite(node, source, package, arena),
        _ => {
            walk(node, source, package, arena);
            None
        }
    }
}

/// Grammar versions wrap element expressions in a `literal_element` node.
fn unwrap_element(node: Node) -> Node {
    if node.kind() == "literal_element" {
        named_children(node).first().copied().unwrap_or(node)
    } else {
        node
    }
}
