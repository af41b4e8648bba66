use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::core::services::CategoryService;
use crate::domain::ExpenseKind;

use super::{optional_kind, usage_error};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "categories",
        "Show the expense category groups and their options",
        "categories [essential|variable]",
        cmd_categories,
    )]
}

fn cmd_categories(_context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.len() > 1 {
        return Err(usage_error("categories [essential|variable]"));
    }
    let kinds: Vec<ExpenseKind> = match optional_kind(args)? {
        Some(kind) => vec![kind],
        None => ExpenseKind::ALL.to_vec(),
    };
    for kind in kinds {
        output::section(format!("{} categories", kind.title()));
        for group in CategoryService::groups(kind) {
            output::info(format!("{}:", group.name));
            for option in group.options {
                output::info(format!("  - {}", option));
            }
        }
    }
    Ok(())
}
