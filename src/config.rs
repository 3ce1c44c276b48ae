use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".allsetrc.json";

/// Settings read from `.allsetrc.json`. Every key is optional.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Glob patterns for paths that are never scanned.
    #[serde(default)]
    pub ignores: Vec<String>,
    /// Glob patterns a file's relative path must match to be scanned.
    #[serde(default = "default_includes")]
    pub includes: Vec<String>,
    /// Whether `_test.go` files are scanned and checked.
    #[serde(default)]
    pub tests: bool,
}

fn default_includes() -> Vec<String> {
    vec!["**/*.go".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignores: Vec::new(),
            includes: default_includes(),
            tests: false,
        }
    }
}

impl Config {
    /// Check that every glob pattern in `ignores` and `includes` compiles.
    pub fn validate(&self) -> Result<()> {
        let lists = [("ignores", &self.ignores), ("includes", &self.includes)];
        for (key, patterns) in lists {
            for pattern in patterns {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in '{}': \"{}\"", key, pattern)
                })?;
            }
        }
        Ok(())
    }
}

/// Configuration together with the file it came from, when one was found.
pub struct LoadedConfig {
    pub config: Config,
    /// Path of the loaded config file; `None` when defaults are in effect.
    pub source: Option<PathBuf>,
}

/// Walk upward from `start_dir` looking for a config file. A directory
/// containing `.git` bounds the search, so a run inside one repository
/// never picks up configuration from another.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.exists() {
            return Some(candidate);
        }
        if dir.join(".git").exists() {
            return None;
        }
    }
    None
}

pub fn load_config(start_dir: &Path) -> Result<LoadedConfig> {
    let Some(path) = find_config_file(start_dir) else {
        return Ok(LoadedConfig {
            config: Config::default(),
            source: None,
        });
    };

    let content = fs::read_to_string(&path)?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;
    config.validate()?;

    Ok(LoadedConfig {
        config,
        source: Some(path),
    })
}
