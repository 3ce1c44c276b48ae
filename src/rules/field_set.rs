//! Exhaustive field assignment rule.
//!
//! For every literal that carries a directive, checks that all accessible
//! struct fields are assigned, that ignore lists name real fields, and that
//! ignored fields are not assigned anyway.

use std::collections::HashSet;

use crate::core::associate::Associations;
use crate::core::data::{DirectiveSite, Element, FieldDef, GoFile, Initializer, PackageId};
use crate::core::resolve::LiteralType;
use crate::issues::{
    IgnoredButSetIssue, Issue, MissingFieldsIssue, MissingTypeInfoIssue, NonKeyedLiteralIssue,
    UnexportedIgnoredFieldIssue, UnknownIgnoredFieldIssue,
};

/// Check every directive-bearing literal of one file.
///
/// # Arguments
/// * `file` - The file whose literals to check
/// * `assoc` - Directive associations for the file
/// * `resolved` - Resolved type per arena index, from the unit's scope
///
/// # Returns
/// All field issues of the file, in arena order
pub fn check_field_set(file: &GoFile, assoc: &Associations, resolved: &[LiteralType]) -> Vec<Issue> {
    let package = file.package_id();
    let mut issues = Vec::new();
    for (idx, init) in file.initializers.iter().enumerate() {
        let Some(directive) = assoc.by_literal[idx] else {
            continue;
        };
        issues.extend(check_literal(
            file,
            &package,
            init,
            &file.directives[directive],
            resolved[idx],
        ));
    }
    issues
}

fn check_literal(
    file: &GoFile,
    package: &PackageId,
    init: &Initializer,
    site: &DirectiveSite,
    resolved: LiteralType,
) -> Vec<Issue> {
    let def = match resolved {
        LiteralType::Struct(def) => def,
        // Not a struct: nothing to demand, the directive stays silent.
        LiteralType::Opaque => return Vec::new(),
        LiteralType::Unresolved => {
            return vec![
                MissingTypeInfoIssue {
                    context: file.context_at(init.pos),
                }
                .into(),
            ];
        }
    };

    let mut issues: Vec<Issue> = Vec::new();

    // Duplicate ignore entries collapse to their first occurrence.
    let mut ignores: Vec<&str> = Vec::new();
    for name in site.directive.ignored_fields() {
        if !ignores.contains(&name.as_str()) {
            ignores.push(name);
        }
    }

    let same_package = def.package == *package;
    let accessible = |field: &FieldDef| field.exported() || same_package;

    // Ignore entries must name an accessible declared field.
    ignores.retain(|name| {
        match def.fields.iter().find(|field| field.name == *name) {
            None => {
                issues.push(
                    UnknownIgnoredFieldIssue {
                        context: file.context_at(site.pos),
                        field: name.to_string(),
                    }
                    .into(),
                );
                false
            }
            Some(field) if !accessible(field) => {
                issues.push(
                    UnexportedIgnoredFieldIssue {
                        context: file.context_at(site.pos),
                        field: name.to_string(),
                    }
                    .into(),
                );
                false
            }
            Some(_) => true,
        }
    });

    // A positional element defeats field accounting entirely.
    if init.elements.iter().any(Element::is_positional) {
        issues.push(
            NonKeyedLiteralIssue {
                context: file.context_at(site.pos),
            }
            .into(),
        );
        return issues;
    }

    let assigned: HashSet<&str> = init.elements.iter().filter_map(Element::field_name).collect();

    // Ignoring a field that is assigned anyway is a contradiction.
    for name in &ignores {
        if assigned.contains(name) {
            issues.push(
                IgnoredButSetIssue {
                    context: file.context_at(site.pos),
                    field: name.to_string(),
                }
                .into(),
            );
        }
    }

    let ignored: HashSet<&str> = ignores.iter().copied().collect();
    let missing: Vec<String> = def
        .fields
        .iter()
        .filter(|field| accessible(field))
        .filter(|field| !assigned.contains(field.name.as_str()))
        .filter(|field| !ignored.contains(field.name.as_str()))
        .map(|field| field.name.clone())
        .collect();
    if !missing.is_empty() {
        issues.push(
            MissingFieldsIssue {
                context: file.context_at(init.pos),
                fields: missing,
            }
            .into(),
        );
    }

    issues
}
