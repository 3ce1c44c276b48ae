use std::{fs, path::Path};

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::args::InitCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::SUCCESS_MARK;
use crate::config::{CONFIG_FILE_NAME, Config};

pub fn init(cmd: InitCommand) -> Result<ExitStatus> {
    if Path::new(CONFIG_FILE_NAME).exists() && !cmd.force {
        eprintln!("Error: {} already exists", CONFIG_FILE_NAME);
        return Ok(ExitStatus::Failure);
    }

    let body = serde_json::to_string_pretty(&Config::default())
        .context("Failed to serialize default config")?;
    fs::write(CONFIG_FILE_NAME, body)
        .with_context(|| format!("Failed to write {}", CONFIG_FILE_NAME))?;

    let note = format!("Created {}", CONFIG_FILE_NAME);
    println!("{} {}", SUCCESS_MARK.green(), note.green());
    Ok(ExitStatus::Success)
}
