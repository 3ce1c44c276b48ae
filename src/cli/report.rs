//! Cargo-style terminal output for check results.
//!
//! Kept apart from the analysis core so allset stays usable as a library.

use std::fmt::Write as _;
use std::io::{self, Write};

use colored::{ColoredString, Colorize};
use unicode_width::UnicodeWidthStr;

use super::commands::CommandResult;
use crate::issues::{Issue, Report, ReportLocation, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print the outcome of a check run.
pub fn print(result: &CommandResult, verbose: bool) {
    report(&result.issues);

    if result.issues.is_empty() {
        print_success(result.source_files_checked);
    }

    print_parse_warning(result.parse_error_count, verbose);
}

/// Print issues in cargo-style format to stdout.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort();

    let gutter = Gutter::sized_for(&sorted);
    for issue in &sorted {
        let _ = write!(writer, "{}", render_issue(issue, &gutter));
    }

    let _ = write!(writer, "{}", render_summary(&sorted));
}

/// Print a success message when no issues are found.
pub fn print_success(source_files: usize) {
    print_success_to(source_files, &mut io::stdout().lock());
}

/// Print a success message to a custom writer.
pub fn print_success_to<W: Write>(source_files: usize, writer: &mut W) {
    let msg = format!(
        "Checked {} source {} - no issues found",
        source_files,
        plural(source_files, "file", "files")
    );
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

/// Print a warning about files that could not be parsed.
///
/// Verbose runs already named each file on stderr, so the pointer to `-v`
/// is only shown for quiet runs.
pub fn print_parse_warning(count: usize, verbose: bool) {
    print_parse_warning_to(count, verbose, &mut io::stderr().lock());
}

/// Print a parse warning to a custom writer.
pub fn print_parse_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count == 0 || verbose {
        return;
    }
    let _ = writeln!(
        writer,
        "{} {} file(s) could not be parsed (use {} for details)",
        "warning:".bold().yellow(),
        count,
        "-v".cyan()
    );
}

// ============================================================
// Rendering
// ============================================================

/// Width of the line-number column, shared by every block in one report.
struct Gutter {
    width: usize,
}

impl Gutter {
    fn sized_for(issues: &[Issue]) -> Self {
        let width = issues
            .iter()
            .filter_map(|i| match i.location() {
                ReportLocation::Source(ctx) => Some(ctx.line()),
                ReportLocation::File { .. } => None,
            })
            .max()
            .map_or(1, |line| line.to_string().len());
        Gutter { width }
    }

    /// `  |` row without a line number.
    fn bar(&self) -> String {
        format!("{:>width$} {}", "", "|".blue(), width = self.width)
    }

    /// `9 |` prefix for the quoted source row.
    fn numbered(&self, line: usize) -> String {
        format!(
            "{:>width$} {}",
            line.to_string().blue(),
            "|".blue(),
            width = self.width
        )
    }

    /// Caret row pointing at `col` (1-based, counted in characters).
    fn caret(&self, source_line: &str, col: usize, severity: Severity) -> String {
        let mark = match severity {
            Severity::Error => "^".red(),
            Severity::Warning => "^".yellow(),
        };
        let prefix: String = source_line.chars().take(col.saturating_sub(1)).collect();
        let padding = UnicodeWidthStr::width(prefix.as_str());
        format!("{} {:>padding$}{}", self.bar(), "", mark, padding = padding)
    }

    /// `  = <label> <text>` trailer row.
    fn trailer(&self, label: ColoredString, text: &str) -> String {
        format!(
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            label,
            text,
            width = self.width
        )
    }
}

fn severity_label(severity: Severity) -> ColoredString {
    match severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    }
}

fn plural(n: usize, one: &'static str, many: &'static str) -> &'static str {
    if n == 1 { one } else { many }
}

fn render_issue(issue: &Issue, gutter: &Gutter) -> String {
    let severity = issue.severity();
    let loc = issue.location();

    let mut block = String::new();
    let _ = writeln!(
        block,
        "{}: {}  {}",
        severity_label(severity),
        issue.message(),
        issue.rule().to_string().dimmed().cyan()
    );
    let _ = writeln!(
        block,
        "  {} {}:{}:{}",
        "-->".blue(),
        loc.file_path(),
        loc.line(),
        loc.col()
    );

    if let Some(source_line) = loc.source_line() {
        let _ = writeln!(block, "{}", gutter.bar());
        let _ = writeln!(block, "{} {}", gutter.numbered(loc.line()), source_line);
        let _ = writeln!(block, "{}", gutter.caret(source_line, loc.col(), severity));
    }

    if let Some(hint) = issue.hint() {
        let _ = writeln!(block, "{}", gutter.trailer("hint:".bold().cyan(), hint));
    }

    block.push('\n');
    block
}

fn render_summary(issues: &[Issue]) -> String {
    let errors = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();
    let warnings = issues.len() - errors;

    format!(
        "\n{} {} problems ({} {}, {} {})\n",
        FAILURE_MARK.red(),
        issues.len(),
        errors,
        plural(errors, "error", "errors").red(),
        warnings,
        plural(warnings, "warning", "warnings").yellow()
    )
}

// ============================================================
// Tests
// ============================================================
