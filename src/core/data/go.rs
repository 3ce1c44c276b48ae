use std::collections::HashMap;

use crate::core::data::literal::Initializer;
use crate::core::data::source::{Pos, SourceContext, SourceLocation};
use crate::core::data::types::{PackageId, TypeDecl};
use crate::directives::Directive;

/// Mapping from the local name an import is known by in one file to its
/// import path. The local name is the explicit alias when present, else the
/// last path segment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportMap {
    entries: HashMap<String, String>,
}

impl ImportMap {
    pub fn insert(&mut self, local: impl Into<String>, path: impl Into<String>) {
        self.entries.insert(local.into(), path.into());
    }

    pub fn path_of(&self, local: &str) -> Option<&str> {
        self.entries.get(local).map(String::as_str)
    }
}

/// One directive comment found in a file, at its source position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveSite {
    pub directive: Directive,
    pub pos: Pos,
}

/// Everything the analysis needs from one parsed Go file.
#[derive(Debug, Clone)]
pub struct GoFile {
    pub path: String,
    /// Directory part of `path`; files grouped by it form packages.
    pub dir: String,
    pub package_name: String,
    /// Whether the file name ends in `_test.go`.
    pub is_test_file: bool,
    pub imports: ImportMap,
    pub types: Vec<TypeDecl>,
    /// Every composite literal in the file, nested ones included. Children
    /// reference their parents' arena indices via `Initializer::children`.
    pub initializers: Vec<Initializer>,
    /// Directives sorted by ascending position.
    pub directives: Vec<DirectiveSite>,
    /// Positions of comments that start like a directive but do not parse.
    pub invalid_directives: Vec<Pos>,
    /// Source lines, for diagnostic display.
    pub lines: Vec<String>,
}

impl GoFile {
    /// Whether the file belongs to the external test package of its
    /// directory (`package foo_test`).
    pub fn in_external_test_package(&self) -> bool {
        self.is_test_file && self.package_name.ends_with("_test")
    }

    /// The package this file's code belongs to. The external test package
    /// keeps its `_test` suffix, which is what makes its identity distinct
    /// from the package under test.
    pub fn package_id(&self) -> PackageId {
        PackageId::new(self.dir.as_str(), self.package_name.as_str())
    }

    pub fn line_text(&self, line: usize) -> &str {
        self.lines
            .get(line.saturating_sub(1))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Diagnostic context anchored at a position in this file.
    pub fn context_at(&self, pos: Pos) -> SourceContext {
        SourceContext::new(
            SourceLocation::new(self.path.as_str(), pos.line, pos.col),
            self.line_text(pos.line),
        )
    }
}
