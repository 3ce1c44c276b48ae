//! Issue types for field exhaustiveness analysis results.
//!
//! Every finding the checker can produce is an [`Issue`] variant. Issues are
//! self-contained: each carries the source context the reporter needs and
//! renders its own message through the [`Report`] trait.

use enum_dispatch::enum_dispatch;

use crate::core::SourceContext;

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// Rule identifier, shown next to the message in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    MissingFields,
    NonKeyedLiteral,
    UnusedDirective,
    InvalidDirective,
    UnknownIgnoredField,
    UnexportedIgnoredField,
    IgnoredButSet,
    Internal,
    ParseError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let slug = match self {
            Rule::MissingFields => "missing-fields",
            Rule::NonKeyedLiteral => "non-keyed-literal",
            Rule::UnusedDirective => "unused-directive",
            Rule::InvalidDirective => "invalid-directive",
            Rule::UnknownIgnoredField => "unknown-ignored-field",
            Rule::UnexportedIgnoredField => "unexported-ignored-field",
            Rule::IgnoredButSet => "ignored-but-set",
            Rule::Internal => "internal",
            Rule::ParseError => "parse-error",
        };
        f.write_str(slug)
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Annotated literal leaves one or more declared fields unassigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingFieldsIssue {
    pub context: SourceContext,
    /// Unassigned fields, in declaration order.
    pub fields: Vec<String>,
}

/// Directive attached to a literal that has positional elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonKeyedLiteralIssue {
    pub context: SourceContext,
}

/// Directive that no literal claimed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnusedDirectiveIssue {
    pub context: SourceContext,
}

/// Comment that starts like a directive but does not parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidDirectiveIssue {
    pub context: SourceContext,
}

/// Ignore-list entry that names no field of the struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownIgnoredFieldIssue {
    pub context: SourceContext,
    pub field: String,
}

/// Ignore-list entry naming a field this package cannot assign anyway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnexportedIgnoredFieldIssue {
    pub context: SourceContext,
    pub field: String,
}

/// Ignore-list entry for a field the literal assigns after all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoredButSetIssue {
    pub context: SourceContext,
    pub field: String,
}

/// A matched literal whose type could not be resolved at all. Signals a gap
/// in the resolver rather than a user mistake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingTypeInfoIssue {
    pub context: SourceContext,
}

/// File could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

// ============================================================
// Report Trait
// ============================================================

/// Anchor of an issue in report output.
pub enum ReportLocation<'a> {
    /// Source code location, with the source line for context display.
    Source(&'a SourceContext),
    /// File-level only, for issues without a line (parse errors).
    File { path: &'a str },
}

impl<'a> ReportLocation<'a> {
    pub fn file_path(&self) -> &'a str {
        match self {
            ReportLocation::Source(ctx) => ctx.file_path(),
            ReportLocation::File { path } => path,
        }
    }

    /// Line number, 0 for file-level locations.
    pub fn line(&self) -> usize {
        match self {
            ReportLocation::Source(ctx) => ctx.line(),
            ReportLocation::File { .. } => 0,
        }
    }

    /// Column number, 0 for file-level locations.
    pub fn col(&self) -> usize {
        match self {
            ReportLocation::Source(ctx) => ctx.col(),
            ReportLocation::File { .. } => 0,
        }
    }

    /// The line of source the issue sits on, when one is known.
    pub fn source_line(&self) -> Option<&str> {
        match self {
            ReportLocation::Source(ctx) => Some(ctx.source_line.as_str()),
            ReportLocation::File { .. } => None,
        }
    }
}

/// Rendering interface the CLI reporter consumes.
///
/// Implemented by every issue type; `enum_dispatch` flattens the dispatch
/// on the [`Issue`] enum.
#[enum_dispatch]
pub trait Report {
    /// Where the issue is anchored in report output.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message. The wording is a contract: downstream tooling
    /// matches on these strings.
    fn message(&self) -> String;

    /// Rule slug shown alongside the message.
    fn rule(&self) -> Rule;

    /// Every current rule reports at error severity.
    fn severity(&self) -> Severity {
        Severity::Error
    }

    /// Optional hint on how to fix the issue.
    fn hint(&self) -> Option<&str> {
        None
    }
}

/// A field exhaustiveness issue found during analysis.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    MissingFields(MissingFieldsIssue),
    NonKeyedLiteral(NonKeyedLiteralIssue),
    UnusedDirective(UnusedDirectiveIssue),
    InvalidDirective(InvalidDirectiveIssue),
    UnknownIgnoredField(UnknownIgnoredFieldIssue),
    UnexportedIgnoredField(UnexportedIgnoredFieldIssue),
    IgnoredButSet(IgnoredButSetIssue),
    MissingTypeInfo(MissingTypeInfoIssue),
    ParseError(ParseErrorIssue),
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for MissingFieldsIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        if let [field] = self.fields.as_slice() {
            format!("field {} is not set", field)
        } else {
            format!("fields {} are not set", self.fields.join(", "))
        }
    }

    fn rule(&self) -> Rule {
        Rule::MissingFields
    }
}

impl Report for NonKeyedLiteralIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        "directive is placed in a non-keyed literal".to_string()
    }

    fn rule(&self) -> Rule {
        Rule::NonKeyedLiteral
    }

    fn hint(&self) -> Option<&str> {
        Some("write the literal with Field: value pairs so fields can be checked")
    }
}

impl Report for UnusedDirectiveIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        "directive is not used".to_string()
    }

    fn rule(&self) -> Rule {
        Rule::UnusedDirective
    }

    fn hint(&self) -> Option<&str> {
        Some("place the comment inside the braces of the literal it should check")
    }
}

impl Report for InvalidDirectiveIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        "invalid directive".to_string()
    }

    fn rule(&self) -> Rule {
        Rule::InvalidDirective
    }

    fn hint(&self) -> Option<&str> {
        Some("expected //allset or //allset ignore=Field1,Field2")
    }
}

impl Report for UnknownIgnoredFieldIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        format!("field {} is not present in the struct but ignored", self.field)
    }

    fn rule(&self) -> Rule {
        Rule::UnknownIgnoredField
    }
}

impl Report for UnexportedIgnoredFieldIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        format!(
            "unexported field {} is not available in this package, so the field should not be ignored",
            self.field
        )
    }

    fn rule(&self) -> Rule {
        Rule::UnexportedIgnoredField
    }
}

impl Report for IgnoredButSetIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        format!(
            "field {} is marked as ignored but is present in the literal",
            self.field
        )
    }

    fn rule(&self) -> Rule {
        Rule::IgnoredButSet
    }
}

impl Report for MissingTypeInfoIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        "internal error: no type information for composite literal, please report this as a bug"
            .to_string()
    }

    fn rule(&self) -> Rule {
        Rule::Internal
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn rule(&self) -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Ordering
// ============================================================

impl Issue {
    /// Position key shared by report ordering and duplicate collapsing.
    fn sort_key(&self) -> (&str, usize, usize) {
        match self.location() {
            ReportLocation::Source(ctx) => (ctx.file_path(), ctx.line(), ctx.col()),
            ReportLocation::File { path } => (path, 0, 0),
        }
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.sort_key()
            .cmp(&other.sort_key())
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Tests
// ============================================================
