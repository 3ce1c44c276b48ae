use std::process::ExitCode;

/// Process exit status, following common conventions for linter tools.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Run completed and found nothing to report.
    Success,
    /// Run completed and reported at least one issue.
    Failure,
    /// The run itself failed (bad arguments, unreadable root, invalid
    /// configuration).
    Error,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Error => 2,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}
