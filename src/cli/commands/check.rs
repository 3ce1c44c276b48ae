use anyhow::{Ok, Result};
use rayon::prelude::*;

use super::super::args::CheckCommand;
use super::{CommandResult, helper::finish};

use crate::{
    core::{CheckContext, ProjectTables, Unit, associate, resolve_literals, units},
    issues::{InvalidDirectiveIssue, Issue},
    rules::{check_field_set, check_unused_directives},
};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;

    let files = ctx.go_files();
    let tables = ProjectTables::build(files, ctx.module_path.clone());

    // Each package variant is independent, so variants are checked in
    // parallel. A non-test file shows up in two variants; `finish`
    // collapses the findings both passes agree on.
    let mut all_issues: Vec<Issue> = units(files)
        .par_iter()
        .flat_map_iter(|unit| analyze_unit(unit, &tables))
        .collect();

    for file in files {
        all_issues.extend(file.invalid_directives.iter().map(|pos| {
            Issue::InvalidDirective(InvalidDirectiveIssue {
                context: file.context_at(*pos),
            })
        }));
    }

    all_issues.extend(
        ctx.parse_errors()
            .iter()
            .map(|i| Issue::ParseError(i.clone())),
    );

    Ok(finish(all_issues, ctx.files.len()))
}

fn analyze_unit<'a>(unit: &Unit<'a>, tables: &ProjectTables<'a>) -> Vec<Issue> {
    let mut issues = Vec::new();

    for &file in &unit.files {
        let assoc = associate(file);
        let resolved = resolve_literals(file, unit.kind, tables);

        issues.extend(check_field_set(file, &assoc, &resolved));
        issues.extend(
            check_unused_directives(file, &assoc)
                .into_iter()
                .map(Issue::UnusedDirective),
        );
    }

    issues
}
