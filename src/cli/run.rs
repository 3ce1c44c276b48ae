use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{check::check, init::init},
    exit_status::ExitStatus,
    report,
};

/// Dispatch to the appropriate command handler based on the parsed arguments.
///
/// # Returns
/// - `Ok(ExitStatus)` describing how the process should exit
/// - `Err` if the command fails (e.g. invalid config, unreadable root)
pub fn run(Arguments { command }: Arguments, verbose: bool) -> Result<ExitStatus> {
    match command {
        Some(Command::Check(cmd)) => {
            let result = check(cmd)?;
            report::print(&result, verbose);
            Ok(result.exit_status())
        }
        Some(Command::Init(cmd)) => init(cmd),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
