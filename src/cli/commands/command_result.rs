use super::super::exit_status::ExitStatus;
use crate::issues::Issue;

/// Result of running a check.
pub struct CommandResult {
    pub error_count: usize,
    pub warning_count: usize,
    /// All issues found, sorted and deduplicated.
    pub issues: Vec<Issue>,
    /// Number of files that failed to parse.
    pub parse_error_count: usize,
    /// Number of Go source files that were checked.
    pub source_files_checked: usize,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        if self.error_count > 0 || self.warning_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}
