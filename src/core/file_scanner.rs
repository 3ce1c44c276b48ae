//! Go source file discovery.
//!
//! Walks the project tree collecting `.go` files, with the same pruning
//! the Go toolchain applies: directories named `vendor` or `testdata` and
//! directories starting with `.` or `_` are never descended into.

use std::path::Path;

use anyhow::{Context, Result};
use glob::Pattern;
use walkdir::{DirEntry, WalkDir};

/// Result of a file scan.
pub struct ScanResult {
    /// Root-relative paths of the Go files to check, sorted.
    pub files: Vec<String>,
    /// Number of paths skipped due to access errors.
    pub skipped_count: usize,
}

/// Scan `root` for Go files honoring the include/ignore patterns.
///
/// Test files (`_test.go`) are skipped unless `include_tests` is set.
/// Returned paths are relative to `root` and sorted, so downstream
/// analysis and reporting are deterministic.
pub fn scan_go_files(
    root: &Path,
    includes: &[String],
    ignores: &[String],
    include_tests: bool,
    verbose: bool,
) -> Result<ScanResult> {
    let includes = compile_patterns(includes, "includes")?;
    let ignores = compile_patterns(ignores, "ignores")?;

    let mut files = Vec::new();
    let mut skipped_count = 0;

    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(scannable);

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("Warning: {}", e);
                }
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if !name.ends_with(".go") {
            continue;
        }
        if name.ends_with("_test.go") && !include_tests {
            continue;
        }

        let Ok(rel) = entry.path().strip_prefix(root) else {
            continue;
        };
        let rel = rel.to_string_lossy().into_owned();

        if !includes.is_empty() && !includes.iter().any(|p| p.matches(&rel)) {
            continue;
        }
        if ignores.iter().any(|p| p.matches(&rel)) {
            continue;
        }

        files.push(rel);
    }

    files.sort();

    Ok(ScanResult {
        files,
        skipped_count,
    })
}

fn compile_patterns(patterns: &[String], field: &str) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| {
            Pattern::new(p)
                .with_context(|| format!("Invalid glob pattern in '{}': \"{}\"", field, p))
        })
        .collect()
}

fn scannable(entry: &DirEntry) -> bool {
    // The root itself may be "." or "_build" etc.; only prune below it.
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return true;
    }
    let name = entry.file_name().to_string_lossy();
    !(name.starts_with('.') || name.starts_with('_') || name == "vendor" || name == "testdata")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "package x\n").unwrap();
    }

    fn scan(root: &Path, include_tests: bool) -> Vec<String> {
        scan_go_files(root, &["**/*.go".to_string()], &[], include_tests, false)
            .unwrap()
            .files
    }

    #[test]
    fn test_scan_finds_go_files_sorted() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "main.go");
        touch(dir.path(), "internal/server/server.go");
        touch(dir.path(), "internal/db.go");
        touch(dir.path(), "README.md");

        let files = scan(dir.path(), false);
        assert_eq!(
            files,
            vec!["internal/db.go", "internal/server/server.go", "main.go"]
        );
    }

    #[test]
    fn test_scan_prunes_go_tool_directories() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "main.go");
        touch(dir.path(), "vendor/dep/dep.go");
        touch(dir.path(), "testdata/fixture.go");
        touch(dir.path(), ".cache/gen.go");
        touch(dir.path(), "_build/out.go");

        let files = scan(dir.path(), false);
        assert_eq!(files, vec!["main.go"]);
    }

    #[test]
    fn test_scan_skips_test_files_by_default() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "user.go");
        touch(dir.path(), "user_test.go");

        assert_eq!(scan(dir.path(), false), vec!["user.go"]);
        assert_eq!(scan(dir.path(), true), vec!["user.go", "user_test.go"]);
    }

    #[test]
    fn test_scan_honors_ignore_patterns() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "main.go");
        touch(dir.path(), "gen/models.go");

        let result = scan_go_files(
            dir.path(),
            &["**/*.go".to_string()],
            &["gen/**".to_string()],
            false,
            false,
        )
        .unwrap();
        assert_eq!(result.files, vec!["main.go"]);
    }

    #[test]
    fn test_scan_honors_include_patterns() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "main.go");
        touch(dir.path(), "internal/db.go");

        let result = scan_go_files(
            dir.path(),
            &["internal/**/*.go".to_string()],
            &[],
            false,
            false,
        )
        .unwrap();
        assert_eq!(result.files, vec!["internal/db.go"]);
    }

    #[test]
    fn test_scan_rejects_invalid_pattern() {
        let dir = tempdir().unwrap();
        let result = scan_go_files(dir.path(), &["[bad".to_string()], &[], false, false);
        assert!(result.is_err());
    }
}
