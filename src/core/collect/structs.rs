//! Type declaration collection.
//!
//! Gathers every `type` declaration in a file, including ones nested inside
//! function bodies, and converts the declared type into a [`TypeExpr`]. Only
//! struct-shaped types matter for field checking, but aliases and container
//! types are kept too so indirections like `type Users []User` can be chased
//! during resolution.

use std::sync::LazyLock;

use streaming_iterator::StreamingIterator;
use tree_sitter::{Language, Node, Query, QueryCursor};

use crate::core::data::{FieldDef, PackageId, StructDef, TypeDecl, TypeExpr};
use crate::core::parsers::go::{ParsedGo, named_children, node_text};

static TYPE_DECL_QUERY: LazyLock<Query> = LazyLock::new(|| {
    let language: Language = tree_sitter_go::LANGUAGE.into();
    Query::new(&language, "[(type_spec) (type_alias)] @decl").unwrap()
});

/// Collect all type declarations from a file in source order.
///
/// Aliases and defined types are treated alike. When two declarations share a
/// name (a local type shadowing a package-level one) the later entry wins at
/// lookup time.
pub fn collect_types(parsed: &ParsedGo, package: &PackageId) -> Vec<TypeDecl> {
    let mut decls = Vec::new();

    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(
        &TYPE_DECL_QUERY,
        parsed.tree.root_node(),
        parsed.source.as_bytes(),
    );
    while let Some(m) = matches.next() {
        for capture in m.captures {
            let node = capture.node;
            let (Some(name), Some(ty)) = (
                node.child_by_field_name("name"),
                node.child_by_field_name("type"),
            ) else {
                continue;
            };
            decls.push(TypeDecl {
                name: node_text(name, &parsed.source).to_string(),
                ty: type_expr(ty, &parsed.source, package),
            });
        }
    }

    decls
}

/// Convert a type syntax node into a [`TypeExpr`].
///
/// Shapes the checker cannot see through (interfaces, channels, functions)
/// come back as [`TypeExpr::Other`].
pub fn type_expr(node: Node, source: &str, package: &PackageId) -> TypeExpr {
    match node.kind() {
        "type_identifier" => TypeExpr::named(node_text(node, source)),
        "qualified_type" => {
            let (Some(qualifier), Some(name)) = (
                node.child_by_field_name("package"),
                node.child_by_field_name("name"),
            ) else {
                return TypeExpr::Other;
            };
            TypeExpr::qualified(node_text(qualifier, source), node_text(name, source))
        }
        "pointer_type" | "parenthesized_type" => match named_children(node).first() {
            Some(inner) => {
                let inner = type_expr(*inner, source, package);
                if node.kind() == "pointer_type" {
                    TypeExpr::Pointer(Box::new(inner))
                } else {
                    inner
                }
            }
            None => TypeExpr::Other,
        },
        "slice_type" | "array_type" | "implicit_length_array_type" => {
            match node.child_by_field_name("element") {
                Some(element) => TypeExpr::Seq(Box::new(type_expr(element, source, package))),
                None => TypeExpr::Other,
            }
        }
        "map_type" => {
            let (Some(key), Some(value)) = (
                node.child_by_field_name("key"),
                node.child_by_field_name("value"),
            ) else {
                return TypeExpr::Other;
            };
            TypeExpr::Map {
                key: Box::new(type_expr(key, source, package)),
                value: Box::new(type_expr(value, source, package)),
            }
        }
        "generic_type" => match node.child_by_field_name("type") {
            Some(base) => type_expr(base, source, package),
            None => TypeExpr::Other,
        },
        "struct_type" => TypeExpr::Struct(struct_def(node, source, package)),
        _ => TypeExpr::Other,
    }
}

/// Build a [`StructDef`] from a `struct_type` node.
///
/// Multi-name declarations like `A, B int` expand to one field per name and
/// blank `_` fields are dropped. Embedded fields contribute their base type
/// name, which is how Go spells the implicit field name.
fn struct_def(node: Node, source: &str, package: &PackageId) -> StructDef {
    let mut fields = Vec::new();

    let body = named_children(node)
        .into_iter()
        .find(|child| child.kind() == "field_declaration_list");
    let Some(body) = body else {
        return StructDef {
            package: package.clone(),
            fields,
        };
    };

    for decl in named_children(body) {
        if decl.kind() != "field_declaration" {
            continue;
        }
        let mut cursor = decl.walk();
        let names: Vec<&str> = decl
            .children_by_field_name("name", &mut cursor)
            .map(|name| node_text(name, source))
            .collect();
        if names.is_empty() {
            if let Some(name) = decl
                .child_by_field_name("type")
                .and_then(|ty| embedded_base_name(ty, source))
            {
                fields.push(FieldDef {
                    name: name.to_string(),
                });
            }
            continue;
        }
        for name in names {
            if name == "_" {
                continue;
            }
            fields.push(FieldDef {
                name: name.to_string(),
            });
        }
    }

    StructDef {
        package: package.clone(),
        fields,
    }
}

/// The implicit field name of an embedded field type.
fn embedded_base_name<'a>(node: Node, source: &'a str) -> Option<&'a str> {
    match node.kind() {
        "type_identifier" => Some(node_text(node, source)),
        "qualified_type" => node
            .child_by_field_name("name")
            .map(|name| node_text(name, source)),
        "generic_type" => node
            .child_by_field_name("type")
            .and_then(|base| embedded_base_name(base, source)),
        _ => None,
    }
}
