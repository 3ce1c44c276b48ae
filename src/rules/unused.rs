//! Unused directive detection rule.
//!
//! Detects directives that no literal claimed: comments placed outside any
//! literal's braces, or buried inside an element where they govern nothing.

use crate::core::associate::Associations;
use crate::core::data::GoFile;
use crate::issues::UnusedDirectiveIssue;

/// Check for directives that were not claimed by any literal.
///
/// # Arguments
/// * `file` - The file whose directives to check
/// * `assoc` - Directive associations for the file
///
/// # Returns
/// One issue per unclaimed directive, in position order
pub fn check_unused_directives(file: &GoFile, assoc: &Associations) -> Vec<UnusedDirectiveIssue> {
    file.directives
        .iter()
        .zip(&assoc.used)
        .filter(|(_, used)| !**used)
        .map(|(site, _)| UnusedDirectiveIssue {
            context: file.context_at(site.pos),
        })
        .collect()
}
