use std::{cell::OnceCell, fs, path::PathBuf};

use anyhow::{Result, ensure};
use rayon::prelude::*;

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{
        collect::collect_file,
        data::GoFile,
        file_scanner::scan_go_files,
        parsers::go::parse_go_source,
        symbols,
    },
    issues::ParseErrorIssue,
};

/// Analysis context for one check run.
///
/// `CheckContext` owns configuration, the list of files to check, and the
/// parsed form of those files. Construction scans the tree and reads
/// `go.mod`; parsing happens lazily on first access via `go_files()`, so
/// commands that never look at file contents pay nothing for them.
///
/// Configuration is merged with the following priority (highest first):
/// 1. CLI arguments (e.g. `--tests`)
/// 2. `.allsetrc.json` config file
/// 3. Built-in defaults
pub struct CheckContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Project root directory all file paths are relative to.
    pub root_dir: PathBuf,

    /// Root-relative paths of the Go files to check, sorted.
    pub files: Vec<String>,

    /// Module path from `go.mod`, if the root has one. Without it,
    /// imports of project packages cannot be mapped back to directories.
    pub module_path: Option<String>,

    /// Whether to print verbose diagnostic messages.
    pub verbose: bool,

    /// Parsed and collected data for each source file.
    /// Initialized on first call to `go_files()`.
    go_files: OnceCell<Vec<GoFile>>,

    /// Errors from files that could not be read or parsed.
    /// Populated alongside `go_files` initialization.
    parse_errors: OnceCell<Vec<ParseErrorIssue>>,
}

impl CheckContext {
    /// Create a new `CheckContext` from command line arguments.
    ///
    /// Loads configuration, reads the module path from `go.mod`, and scans
    /// the tree for Go files.
    ///
    /// # Errors
    ///
    /// Returns an error if the root directory does not exist, the config
    /// file is invalid, or the file scan fails.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;

        let root_dir = common_args
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        ensure!(
            root_dir.is_dir(),
            "Path does not exist or is not a directory: {}",
            root_dir.display()
        );

        let loaded = load_config(&root_dir)?;
        if verbose && loaded.source.is_none() {
            eprintln!("Note: No .allsetrc.json found, using default configuration");
        }

        let mut config = loaded.config;
        if common_args.tests {
            config.tests = true;
        }

        let module_path = fs::read_to_string(root_dir.join("go.mod"))
            .ok()
            .and_then(|gomod| symbols::module_path(&gomod));
        if verbose && module_path.is_none() {
            eprintln!("Note: No go.mod module path found, imported types will not resolve");
        }

        let scan_result = scan_go_files(
            &root_dir,
            &config.includes,
            &config.ignores,
            config.tests,
            verbose,
        )?;

        if scan_result.skipped_count > 0 {
            eprintln!(
                "Warning: {} path(s) skipped due to access errors{}",
                scan_result.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }

        Ok(Self {
            config,
            root_dir,
            files: scan_result.files,
            module_path,
            verbose,
            go_files: OnceCell::new(),
            parse_errors: OnceCell::new(),
        })
    }

    /// Get collected data for all Go files (lazy initialization).
    ///
    /// Reads and parses every scanned file in parallel. Files that cannot
    /// be read, or whose trees contain syntax errors, are excluded here and
    /// reported via `parse_errors()` instead; a broken tree would produce
    /// nonsense literals and type declarations.
    pub fn go_files(&self) -> &Vec<GoFile> {
        self.go_files.get_or_init(|| {
            let root = &self.root_dir;

            let parse_results: Vec<_> = self
                .files
                .par_iter()
                .map(|file_path| {
                    let result = fs::read_to_string(root.join(file_path))
                        .map_err(|e| anyhow::anyhow!("Failed to read file: {}", e))
                        .and_then(|code| {
                            let parsed = parse_go_source(code, file_path)?;
                            if parsed.has_syntax_errors() {
                                anyhow::bail!("syntax error in Go source");
                            }
                            Ok(collect_file(&parsed, file_path))
                        });
                    (file_path.clone(), result)
                })
                .collect();

            let mut files = Vec::new();
            let mut errors = Vec::new();

            for (file_path, result) in parse_results {
                match result {
                    Ok(file) => files.push(file),
                    Err(e) => {
                        if self.verbose {
                            eprintln!("Warning: {} - {}", file_path, e);
                        }
                        errors.push(ParseErrorIssue {
                            file_path,
                            error: e.to_string(),
                        });
                    }
                }
            }

            let _ = self.parse_errors.set(errors);
            files
        })
    }

    /// Get errors from files that could not be read or parsed.
    ///
    /// Populated when `go_files()` is first called.
    pub fn parse_errors(&self) -> &Vec<ParseErrorIssue> {
        self.parse_errors.get_or_init(Vec::new)
    }
}
