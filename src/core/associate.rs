//! Directive-to-literal association.
//!
//! A directive belongs to the literal whose braces it sits directly inside.
//! "Directly" is decided purely by byte spans: a comment inside one of the
//! literal's elements (a nested literal, a function literal, a call) belongs
//! to whatever sits deeper, not to this literal. Directives are sorted by
//! position, so each literal starts its scan with a binary search at its
//! opening brace.

use crate::core::data::GoFile;

/// Association result for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Associations {
    /// Per arena index, the index into `file.directives` of the directive
    /// governing that literal.
    pub by_literal: Vec<Option<usize>>,
    /// Per directive index, whether any literal claimed it.
    pub used: Vec<bool>,
}

/// Match each literal in `file` with the directive written inside it.
pub fn associate(file: &GoFile) -> Associations {
    let directives = &file.directives;
    let mut by_literal = vec![None; file.initializers.len()];
    let mut used = vec![false; directives.len()];

    for (idx, init) in file.initializers.iter().enumerate() {
        let start = directives.partition_point(|site| site.pos.offset < init.lbrace);
        'scan: for (di, site) in directives.iter().enumerate().skip(start) {
            if site.pos.offset > init.rbrace {
                break;
            }
            for element in &init.elements {
                if element.contains(site.pos.offset) {
                    continue 'scan;
                }
            }
            by_literal[idx] = Some(di);
            used[di] = true;
            break;
        }
    }

    Associations { by_literal, used }
}
