use super::CommandResult;
use crate::issues::{Issue, Report, Severity};

pub fn finish(mut issues: Vec<Issue>, source_files_checked: usize) -> CommandResult {
    issues.sort();

    // Non-test files are analyzed both on their own and merged with
    // in-package tests, so identical findings can arrive twice.
    issues.dedup_by(|a, b| {
        let (a_loc, b_loc) = (a.location(), b.location());
        a_loc.file_path() == b_loc.file_path()
            && a_loc.line() == b_loc.line()
            && a_loc.col() == b_loc.col()
            && a.message() == b.message()
    });

    let parse_error_count = issues
        .iter()
        .filter(|i| matches!(i, Issue::ParseError(_)))
        .count();

    let error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();

    let warning_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Warning)
        .count();

    CommandResult {
        error_count,
        warning_count,
        issues,
        parse_error_count,
        source_files_checked,
    }
}
