//! Phase 2: Resolution - literal types down to struct definitions.
//!
//! This module handles the second phase of the check pipeline: deciding, for
//! every collected composite literal, which struct declaration it
//! initializes, if any.
//!
//! Resolution includes:
//! - Chasing named types through aliases and defined types
//! - Following qualified references into other scanned packages
//! - Handing container component types down to elided nested literals
//! - Seeing through one level of pointer for `[]*T{{...}}` forms

use std::collections::HashSet;

use crate::core::data::{ChildRole, GoFile, ImportMap, StructDef, TypeExpr};
use crate::core::symbols::{ProjectTables, UnitKind};

/// What a literal's type resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralType<'a> {
    /// A struct declared somewhere in the scanned tree.
    Struct(&'a StructDef),
    /// A shape the checker sees but cannot check: a non-struct literal, a
    /// builtin, or a type from outside the scanned tree.
    Opaque,
    /// No type information at all. Only elided literals in positions where
    /// Go permits no elision end up here.
    Unresolved,
}

/// Resolve every literal in `file`'s arena against a unit's scope.
///
/// The result is indexed like the arena. Elided literals take their type
/// from the enclosing literal's shape, which works in one forward pass
/// because parents precede children.
pub fn resolve_literals<'a>(
    file: &'a GoFile,
    kind: UnitKind,
    tables: &ProjectTables<'a>,
) -> Vec<LiteralType<'a>> {
    let arena = &file.initializers;
    let mut resolutions: Vec<Option<Resolution<'a>>> = vec![None; arena.len()];

    for idx in 0..arena.len() {
        if resolutions[idx].is_none() {
            resolutions[idx] = Some(match &arena[idx].type_expr {
                Some(expr) => Resolution::Chased(chase(
                    tables,
                    expr,
                    ChaseScope {
                        dir: file.dir.clone(),
                        kind,
                        imports: &file.imports,
                    },
                )),
                None => Resolution::Unresolved,
            });
        }

        let parent = resolutions[idx].clone();
        for (child, role) in arena[idx].children() {
            if arena[child].type_expr.is_none() {
                resolutions[child] = Some(derive(tables, parent.as_ref(), role));
            }
        }
    }

    resolutions
        .into_iter()
        .map(|resolution| match resolution {
            Some(Resolution::Chased(Chased::Struct(def))) => LiteralType::Struct(def),
            Some(Resolution::Chased(_)) => LiteralType::Opaque,
            Some(Resolution::Unresolved) | None => LiteralType::Unresolved,
        })
        .collect()
}

/// Where unqualified names are looked up while chasing a type.
#[derive(Debug, Clone)]
struct ChaseScope<'a> {
    dir: String,
    kind: UnitKind,
    imports: &'a ImportMap,
}

/// A type chased to its underlying shape.
#[derive(Debug, Clone)]
enum Chased<'a> {
    Struct(&'a StructDef),
    Seq(&'a TypeExpr, ChaseScope<'a>),
    Map {
        key: &'a TypeExpr,
        value: &'a TypeExpr,
        scope: ChaseScope<'a>,
    },
    Pointer(&'a TypeExpr, ChaseScope<'a>),
    Opaque,
}

#[derive(Debug, Clone)]
enum Resolution<'a> {
    Chased(Chased<'a>),
    Unresolved,
}

/// Follow named types until a concrete shape appears.
///
/// Unknown names cover both builtins and types outside the scanned tree;
/// either way the chase ends opaque. A seen set breaks declaration cycles.
fn chase<'a>(
    tables: &ProjectTables<'a>,
    mut expr: &'a TypeExpr,
    mut scope: ChaseScope<'a>,
) -> Chased<'a> {
    let mut seen: HashSet<(String, String)> = HashSet::new();
    loop {
        match expr {
            TypeExpr::Struct(def) => return Chased::Struct(def),
            TypeExpr::Seq(element) => return Chased::Seq(element.as_ref(), scope),
            TypeExpr::Map { key, value } => {
                return Chased::Map {
                    key: key.as_ref(),
                    value: value.as_ref(),
                    scope,
                };
            }
            TypeExpr::Pointer(inner) => return Chased::Pointer(inner.as_ref(), scope),
            TypeExpr::Other => return Chased::Opaque,
            TypeExpr::Named {
                qualifier: None,
                name,
            } => {
                if !seen.insert((scope.dir.clone(), name.clone())) {
                    return Chased::Opaque;
                }
                match tables.lookup(scope.kind, &scope.dir, name) {
                    Some(entry) => {
                        expr = entry.ty;
                        scope.imports = entry.imports;
                    }
                    None => return Chased::Opaque,
                }
            }
            TypeExpr::Named {
                qualifier: Some(qualifier),
                name,
            } => match tables.lookup_qualified(scope.imports, qualifier, name) {
                Some((entry, dir)) => {
                    if !seen.insert((dir.clone(), name.clone())) {
                        return Chased::Opaque;
                    }
                    expr = entry.ty;
                    scope = ChaseScope {
                        dir,
                        kind: UnitKind::Base,
                        imports: entry.imports,
                    };
                }
                None => return Chased::Opaque,
            },
        }
    }
}

/// The type an elided child literal takes from its parent's shape.
///
/// Struct fields admit no elision in Go, so a child sitting under a struct
/// parent has no type at all.
fn derive<'a>(
    tables: &ProjectTables<'a>,
    parent: Option<&Resolution<'a>>,
    role: ChildRole,
) -> Resolution<'a> {
    let Some(Resolution::Chased(parent)) = parent else {
        return Resolution::Unresolved;
    };
    match (parent, role) {
        (Chased::Struct(_), _) => Resolution::Unresolved,
        (Chased::Seq(element, scope), ChildRole::Element) => {
            chase_component(tables, element, scope.clone())
        }
        (Chased::Map { value, scope, .. }, ChildRole::Element) => {
            chase_component(tables, value, scope.clone())
        }
        (Chased::Map { key, scope, .. }, ChildRole::Key) => {
            chase_component(tables, key, scope.clone())
        }
        _ => Resolution::Chased(Chased::Opaque),
    }
}

/// Chase a container component type, seeing through one pointer the way Go
/// elision does for `[]*T{{...}}`.
fn chase_component<'a>(
    tables: &ProjectTables<'a>,
    expr: &'a TypeExpr,
    scope: ChaseScope<'a>,
) -> Resolution<'a> {
    let chased = match chase(tables, expr, scope) {
        Chased::Pointer(inner, scope) => match chase(tables, inner, scope) {
            Chased::Pointer(..) => Chased::Opaque,
            other => other,
        },
        other => other,
    };
    Resolution::Chased(chased)
}
