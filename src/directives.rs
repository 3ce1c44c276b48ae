//! Directive comment parsing for allset markers.
//!
//! Recognized forms (after trimming the comment text):
//! - `//allset` - plain directive, every accessible field must be assigned
//! - `//allset ignore=Field1,Field2` - directive with an ignore-list
//!
//! A comment that starts with the marker followed by a space but whose tail
//! is not a well-formed `ignore=` clause is malformed and gets reported.
//! Anything else merely sharing the prefix (e.g. `//allset:lint`) is an
//! ordinary comment and is left alone.

use regex::Regex;
use std::sync::LazyLock;

/// Marker token opening every directive comment.
pub const MARKER: &str = "//allset";

/// Secondary marker used by golden-file tests to annotate expected
/// diagnostics; comment text is truncated there before matching.
const WANT_MARKER: &str = " // want";

static IGNORE_CLAUSE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^ignore=[\p{L}_][\p{L}\p{Nd}_]*(,[\p{L}_][\p{L}\p{Nd}_]*)*$").unwrap()
});

/// Parsed allset directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    Plain,
    /// Field names listed after `ignore=`, kept in written order. Duplicates
    /// survive parsing; the checker collapses them.
    Ignore(Vec<String>),
}

/// Outcome of inspecting one comment's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    Directive(Directive),
    /// Starts like a directive but the tail does not parse.
    Malformed,
    /// Not an allset comment at all.
    Ordinary,
}

impl Directive {
    /// Parse a raw comment (slashes included) into a directive.
    pub fn parse(text: &str) -> ParseOutcome {
        let mut text = text.trim();
        if let Some(i) = text.find(WANT_MARKER) {
            text = &text[..i];
        }

        if text == MARKER {
            return ParseOutcome::Directive(Directive::Plain);
        }
        let Some(rest) = text.strip_prefix(MARKER).and_then(|r| r.strip_prefix(' ')) else {
            return ParseOutcome::Ordinary;
        };
        if IGNORE_CLAUSE_REGEX.is_match(rest) {
            let fields = rest["ignore=".len()..]
                .split(',')
                .map(str::to_string)
                .collect();
            return ParseOutcome::Directive(Directive::Ignore(fields));
        }
        ParseOutcome::Malformed
    }

    pub fn ignored_fields(&self) -> &[String] {
        match self {
            Directive::Plain => &[],
            Directive::Ignore(fields) => fields,
        }
    }
}
