use anyhow::{Context, Result, anyhow};
use tree_sitter::{Language, Node, Parser, Tree};

use crate::core::data::Pos;

/// A parsed Go file: the syntax tree plus the source it was built from.
pub struct ParsedGo {
    pub tree: Tree,
    pub source: String,
}

/// Parse Go source code into a syntax tree.
///
/// This is the core parsing function. For file-based parsing with caching,
/// use `CheckContext::go_files()` instead.
pub fn parse_go_source(code: String, file_path: &str) -> Result<ParsedGo> {
    let language: Language = tree_sitter_go::LANGUAGE.into();
    let mut parser = Parser::new();
    parser
        .set_language(&language)
        .context("load Go grammar")?;

    let tree = parser
        .parse(&code, None)
        .ok_or_else(|| anyhow!("failed to parse Go source: {}", file_path))?;

    Ok(ParsedGo { tree, source: code })
}

impl ParsedGo {
    /// Whether the tree contains syntax errors. Files with errors are
    /// reported and excluded from analysis; a broken tree would produce
    /// nonsense literals and type declarations.
    pub fn has_syntax_errors(&self) -> bool {
        self.tree.root_node().has_error()
    }
}

/// Source text of a node.
pub fn node_text<'a>(node: Node, source: &'a str) -> &'a str {
    node.utf8_text(source.as_bytes()).unwrap_or("")
}

/// Start position of a node as byte offset plus 1-based line/column.
pub fn node_pos(node: Node) -> Pos {
    let point = node.start_position();
    Pos::new(node.start_byte(), point.row + 1, point.column + 1)
}

/// Named children of a node with comments filtered out. Comments float
/// freely in Go syntax trees, so every structural walk has to skip them.
pub fn named_children<'t>(node: Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|n| n.kind() != "comment")
        .collect()
}
