//! Directive comment collection.
//!
//! Walks every comment in a parsed file and classifies it via
//! `Directive::parse`. Well-formed directives come back sorted by position,
//! which the association search depends on; malformed ones are returned as
//! bare positions for reporting.

use std::sync::LazyLock;

use streaming_iterator::StreamingIterator;
use tree_sitter::{Language, Query, QueryCursor};

use crate::core::data::{DirectiveSite, Pos};
use crate::core::parsers::go::{ParsedGo, node_pos, node_text};
use crate::directives::{Directive, ParseOutcome};

static COMMENT_QUERY: LazyLock<Query> = LazyLock::new(|| {
    let language: Language = tree_sitter_go::LANGUAGE.into();
    Query::new(&language, "(comment) @comment").unwrap()
});

/// Result of scanning one file's comments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectiveScan {
    /// Directives sorted by ascending position.
    pub directives: Vec<DirectiveSite>,
    /// Positions of comments that start like a directive but do not parse.
    pub invalid: Vec<Pos>,
}

/// Collect all allset directives from a file in a single pass.
pub fn scan_directives(parsed: &ParsedGo) -> DirectiveScan {
    let mut scan = DirectiveScan::default();

    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(
        &COMMENT_QUERY,
        parsed.tree.root_node(),
        parsed.source.as_bytes(),
    );
    while let Some(m) = matches.next() {
        for capture in m.captures {
            let node = capture.node;
            match Directive::parse(node_text(node, &parsed.source)) {
                ParseOutcome::Directive(directive) => scan.directives.push(DirectiveSite {
                    directive,
                    pos: node_pos(node),
                }),
                ParseOutcome::Malformed => scan.invalid.push(node_pos(node)),
                ParseOutcome::Ordinary => {}
            }
        }
    }

    scan.directives.sort_by_key(|site| site.pos.offset);
    scan.invalid.sort_by_key(|pos| pos.offset);
    scan
}
