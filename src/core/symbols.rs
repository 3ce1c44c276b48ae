//! Type symbol tables and analysis units.
//!
//! Go compiles a directory three ways: the plain package, the package with
//! its in-package `_test.go` files folded in, and the separate `foo_test`
//! external test package. Checking mirrors that: each variant is a [`Unit`]
//! resolved against its own scope, and importing packages only ever see the
//! plain (non-test) scope.

use std::collections::{BTreeMap, HashMap};

use crate::core::data::{GoFile, ImportMap, TypeExpr};

/// A type declaration paired with the imports of its declaring file, which
/// give meaning to qualified references inside the declaration.
#[derive(Debug, Clone, Copy)]
pub struct TypeEntry<'a> {
    pub ty: &'a TypeExpr,
    pub imports: &'a ImportMap,
}

type DirTable<'a> = HashMap<&'a str, TypeEntry<'a>>;

/// Which package variant a unit's files belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    /// Non-test files only.
    Base,
    /// Non-test files together with in-package `_test.go` files.
    InPackageTest,
    /// Files of the separate `foo_test` package.
    ExternalTest,
}

/// One batch of files checked together against a single symbol scope.
#[derive(Debug)]
pub struct Unit<'a> {
    pub kind: UnitKind,
    pub dir: &'a str,
    pub files: Vec<&'a GoFile>,
}

/// Group files into analysis units, one to three per directory.
///
/// Directories come out in path order; within a directory the plain package
/// precedes its test variants.
pub fn units(files: &[GoFile]) -> Vec<Unit<'_>> {
    let mut dirs: BTreeMap<&str, (Vec<&GoFile>, Vec<&GoFile>, Vec<&GoFile>)> = BTreeMap::new();
    for file in files {
        let slot = dirs.entry(file.dir.as_str()).or_default();
        if file.in_external_test_package() {
            slot.2.push(file);
        } else if file.is_test_file {
            slot.1.push(file);
        } else {
            slot.0.push(file);
        }
    }

    let mut units = Vec::new();
    for (dir, (plain, in_package, external)) in dirs {
        if !plain.is_empty() {
            units.push(Unit {
                kind: UnitKind::Base,
                dir,
                files: plain.clone(),
            });
        }
        if !in_package.is_empty() {
            let mut merged = plain;
            merged.extend(in_package);
            units.push(Unit {
                kind: UnitKind::InPackageTest,
                dir,
                files: merged,
            });
        }
        if !external.is_empty() {
            units.push(Unit {
                kind: UnitKind::ExternalTest,
                dir,
                files: external,
            });
        }
    }
    units
}

/// Type declarations of every scanned package, split by package variant.
#[derive(Debug, Default)]
pub struct ProjectTables<'a> {
    module_path: Option<String>,
    base: HashMap<&'a str, DirTable<'a>>,
    with_tests: HashMap<&'a str, DirTable<'a>>,
    external: HashMap<&'a str, DirTable<'a>>,
}

impl<'a> ProjectTables<'a> {
    pub fn build(files: &'a [GoFile], module_path: Option<String>) -> Self {
        let mut tables = ProjectTables {
            module_path,
            ..ProjectTables::default()
        };
        for file in files {
            for decl in &file.types {
                let entry = TypeEntry {
                    ty: &decl.ty,
                    imports: &file.imports,
                };
                let dir = file.dir.as_str();
                if file.in_external_test_package() {
                    tables.external.entry(dir).or_default().insert(&decl.name, entry);
                } else if file.is_test_file {
                    tables.with_tests.entry(dir).or_default().insert(&decl.name, entry);
                } else {
                    tables.base.entry(dir).or_default().insert(&decl.name, entry);
                    tables.with_tests.entry(dir).or_default().insert(&decl.name, entry);
                }
            }
        }
        tables
    }

    /// Unqualified lookup from a unit's own scope.
    pub fn lookup(&self, kind: UnitKind, dir: &str, name: &str) -> Option<TypeEntry<'a>> {
        let table = match kind {
            UnitKind::Base => &self.base,
            UnitKind::InPackageTest => &self.with_tests,
            UnitKind::ExternalTest => &self.external,
        };
        table.get(dir)?.get(name).copied()
    }

    /// Qualified lookup through an import. Returns the matched declaration
    /// and the directory it lives in; `None` when the import leads outside
    /// the scanned module.
    pub fn lookup_qualified(
        &self,
        imports: &ImportMap,
        qualifier: &str,
        name: &str,
    ) -> Option<(TypeEntry<'a>, String)> {
        let path = imports.path_of(qualifier)?;
        let dir = self.import_dir(path)?;
        let entry = self.base.get(dir.as_str())?.get(name).copied()?;
        Some((entry, dir))
    }

    /// Map an import path onto a scanned directory via the module path.
    fn import_dir(&self, path: &str) -> Option<String> {
        let module = self.module_path.as_deref()?;
        if path == module {
            return Some(".".to_string());
        }
        path.strip_prefix(module)?
            .strip_prefix('/')
            .map(str::to_string)
    }
}

/// Read the module path from go.mod contents.
pub fn module_path(gomod: &str) -> Option<String> {
    for line in gomod.lines() {
        let line = line.split("//").next().unwrap_or("").trim();
        if let Some(rest) = line.strip_prefix("module")
            && rest.starts_with(char::is_whitespace)
        {
            let name = rest.trim().trim_matches('"');
            if !name.is_empty() {
                return Some(name.to_string());
            }
        }
    }
    None
}
