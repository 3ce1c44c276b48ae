//! Phase 1: Collection - Go syntax into checkable data.
//!
//! This module handles the first phase of the check pipeline:
//! - Reading the package clause and import table
//! - Collecting type declarations and the composite literal arena
//! - Collecting allset directive comments
//!
//! Everything is gathered in one pass per file and handed to Phase 2
//! (resolution) and Phase 3 (the field rules) as a [`GoFile`].

pub mod comments;
pub mod literals;
pub mod structs;

pub use comments::{DirectiveScan, scan_directives};
pub use literals::collect_literals;
pub use structs::collect_types;

use std::path::Path;

use tree_sitter::Node;

use crate::core::data::{GoFile, ImportMap, PackageId};
use crate::core::parsers::go::{ParsedGo, named_children, node_text};

/// Assemble a [`GoFile`] from a parsed source file.
///
/// `path` is the display path the file was discovered under; the file's
/// directory (its Go package directory) is derived from it.
pub fn collect_file(parsed: &ParsedGo, path: &str) -> GoFile {
    let dir = package_dir(path);
    let package_name = package_name(parsed).unwrap_or_default();
    let package = PackageId::new(dir.as_str(), package_name.as_str());

    let scan = scan_directives(parsed);
    GoFile {
        path: path.to_string(),
        dir,
        package_name,
        is_test_file: path.ends_with("_test.go"),
        imports: collect_imports(parsed),
        types: collect_types(parsed, &package),
        initializers: collect_literals(parsed, &package),
        directives: scan.directives,
        invalid_directives: scan.invalid,
        lines: parsed.source.lines().map(String::from).collect(),
    }
}

fn package_dir(path: &str) -> String {
    match Path::new(path).parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_string_lossy().into_owned(),
        _ => ".".to_string(),
    }
}

fn package_name(parsed: &ParsedGo) -> Option<String> {
    let clause = named_children(parsed.tree.root_node())
        .into_iter()
        .find(|node| node.kind() == "package_clause")?;
    let name = named_children(clause).into_iter().next()?;
    Some(node_text(name, &parsed.source).to_string())
}

/// Read the file's import declarations into a qualifier -> path map.
///
/// An explicit alias wins; otherwise the last path segment is the qualifier.
/// Dot and blank imports never appear as qualifiers, so they are dropped.
fn collect_imports(parsed: &ParsedGo) -> ImportMap {
    let mut imports = ImportMap::default();
    for decl in named_children(parsed.tree.root_node()) {
        if decl.kind() != "import_declaration" {
            continue;
        }
        for child in named_children(decl) {
            match child.kind() {
                "import_spec" => collect_import_spec(child, &parsed.source, &mut imports),
                "import_spec_list" => {
                    for spec in named_children(child) {
                        if spec.kind() == "import_spec" {
                            collect_import_spec(spec, &parsed.source, &mut imports);
                        }
                    }
                }
                _ => {}
            }
        }
    }
    imports
}

fn collect_import_spec(spec: Node, source: &str, imports: &mut ImportMap) {
    let Some(path) = spec.child_by_field_name("path") else {
        return;
    };
    let path = node_text(path, source).trim_matches(|c| c == '"' || c == '`');

    let alias = match spec.child_by_field_name("name") {
        Some(name) => match name.kind() {
            "dot" | "blank_identifier" => return,
            _ => node_text(name, source),
        },
        None => path.rsplit('/').next().unwrap_or(path),
    };
    imports.insert(alias, path);
}
