pub mod category;
pub mod config;
pub mod ledger;
pub mod reports;
pub mod system;

use crate::cli::core::CommandError;
use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::domain::ExpenseKind;

pub(crate) fn all_definitions() -> Vec<CommandEntry> {
    let mut commands = Vec::new();
    commands.extend(ledger::definitions());
    commands.extend(reports::definitions());
    commands.extend(category::definitions());
    commands.extend(config::definitions());
    commands.extend(system::definitions());
    commands
}

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    for entry in all_definitions() {
        registry.register(entry);
    }
}

pub(crate) fn parse_kind(input: &str) -> Result<ExpenseKind, CommandError> {
    input
        .parse::<ExpenseKind>()
        .map_err(|err| CommandError::InvalidArguments(err.to_string()))
}

pub(crate) fn optional_kind(args: &[&str]) -> Result<Option<ExpenseKind>, CommandError> {
    args.first().map(|raw| parse_kind(raw)).transpose()
}

pub(crate) fn usage_error(usage: &str) -> CommandError {
    CommandError::InvalidArguments(format!("usage: {}", usage))
}
