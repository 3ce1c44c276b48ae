//! Command-line surface, built on clap's derive API.
//!
//! `check` is the everyday workflow; `init` writes a starter config. Both
//! are declared here so the help output and the dispatch in `run` stay in
//! one place.

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Print help and return `None` when no subcommand was given.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            return None;
        }
        Some(self)
    }

    /// Verbose flag of the selected command, if it has one.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Init(_)) | None => false,
        }
    }
}

/// Arguments shared by commands that analyze a Go source tree.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Root of the Go module to check (defaults to the current directory)
    pub path: Option<PathBuf>,

    /// Also check _test.go files
    #[arg(long)]
    pub tests: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct InitCommand {
    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check //allset literals for unassigned struct fields
    Check(CheckCommand),
    /// Write a default .allsetrc.json to the current directory
    Init(InitCommand),
}
