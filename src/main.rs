use std::process::ExitCode;

use allset::cli::{self, ExitStatus};
use clap::Parser;

fn main() -> ExitCode {
    match cli::run_cli(cli::Arguments::parse()) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
