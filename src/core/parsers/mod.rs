//! File parsers for Go source.
//!
//! This module wraps tree-sitter parsing:
//! - `go`: Go source file parser (uses tree-sitter-go for syntax trees)

pub mod go;
