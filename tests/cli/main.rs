use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod check;
mod init;

/// A throwaway Go project in a temp directory. The directory carries a
/// `.git` marker so the upward config search never escapes into the real
/// filesystem.
pub struct TestProject {
    root: PathBuf,
    _guard: TempDir,
}

impl TestProject {
    pub fn new() -> Result<Self> {
        let guard = TempDir::new()?;
        let root = guard.path().canonicalize()?;
        fs::create_dir(root.join(".git"))?;
        Ok(Self {
            root,
            _guard: guard,
        })
    }

    pub fn with_file(path: &str, content: &str) -> Result<Self> {
        let project = Self::new()?;
        project.write_file(path, content)?;
        Ok(project)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.root.join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.root.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Command for the allset binary, rooted in the project with a scrubbed
    /// environment so host settings cannot leak into snapshots.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin("allset"));
        cmd.current_dir(&self.root);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1");
        cmd
    }

    pub fn check_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("check");
        cmd
    }
}
