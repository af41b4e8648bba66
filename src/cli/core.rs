//! Shell context, dispatch, and the CLI error types.

use std::io;

use chrono::{NaiveDate, NaiveDateTime};
use dialoguer::{theme::ColorfulTheme, Confirm};
use strsim::levenshtein;
use uuid::Uuid;

use crate::{
    cli::{commands, help, output},
    config::{Config, ConfigManager},
    core::{services::ServiceError, LedgerStore},
    currency::{format_currency_value, FormatOptions},
    domain::Expense,
    errors::BudgetError,
};

use super::registry::{CommandEntry, CommandRegistry};

/// Environment variable switching the shell into stdin script mode.
pub const SCRIPT_ENV: &str = "BUDGET_BUDDY_CLI_SCRIPT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

/// Everything a command handler can reach: the session ledger, preferences,
/// and the command registry.
pub struct ShellContext {
    pub mode: CliMode,
    pub(crate) registry: CommandRegistry,
    pub(crate) store: LedgerStore,
    pub(crate) config_manager: ConfigManager,
    pub(crate) config: Config,
    pub(crate) user_name: String,
    pub(crate) theme: ColorfulTheme,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::new()?;
        Self::with_parts(mode, LedgerStore::new(), config_manager)
    }

    /// Builds a context around an existing store and config location.
    pub fn with_parts(
        mode: CliMode,
        store: LedgerStore,
        config_manager: ConfigManager,
    ) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);
        let config = config_manager.load()?;
        Ok(ShellContext {
            mode,
            registry,
            store,
            user_name: config.user_name.clone(),
            config_manager,
            config,
            theme: ColorfulTheme::default(),
            running: true,
        })
    }

    pub fn store(&self) -> &LedgerStore {
        &self.store
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn prompt(&self) -> String {
        let balance = self.format_amount(self.store.totals().available_balance);
        format!("budget-buddy ({})> ", balance)
    }

    pub(crate) fn format_amount(&self, amount: f64) -> String {
        format_currency_value(
            amount,
            &self.config.currency_code(),
            &self.config.locale_config(),
            &FormatOptions::default(),
        )
    }

    pub(crate) fn persist_config(&self) -> CommandResult {
        self.config_manager.save(&self.config)?;
        Ok(())
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match crate::cli::shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                output::warning(err);
                return Ok(LoopControl::Continue);
            }
        };

        let Some(raw) = tokens.first() else {
            return Ok(LoopControl::Continue);
        };
        let command = raw.to_lowercase();
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();
        self.dispatch(&command, raw, &args)
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let needle = input.to_lowercase();
        let best = self
            .registry
            .names()
            .map(|name| (levenshtein(name, &needle), name))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, name)) = best {
            if distance <= 3 {
                output::hint(format!("Suggestion: `{}`?", name));
            }
        }
    }

    /// Asks for confirmation in interactive mode; scripts always proceed.
    pub(crate) fn confirm(&self, prompt: &str) -> Result<bool, CommandError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(CommandError::from)
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::hint("Use `help <command>` for usage details.");
            }
            other => output::error(other),
        }
    }

    /// Finds the single expense whose id starts with `prefix`.
    pub(crate) fn find_expense_by_prefix(&self, prefix: &str) -> Result<Option<&Expense>, CommandError> {
        let needle = prefix.trim().to_ascii_lowercase().replace('-', "");
        if needle.is_empty() {
            return Err(CommandError::InvalidArguments("expense id is required".into()));
        }
        if let Ok(id) = Uuid::parse_str(prefix.trim()) {
            return Ok(self.store.expense(id));
        }
        let mut matches = self
            .store
            .expenses()
            .iter()
            .filter(|expense| expense.id.simple().to_string().starts_with(&needle));
        let first = matches.next();
        if matches.next().is_some() {
            return Err(CommandError::InvalidArguments(format!(
                "id prefix `{}` matches several expenses; use more characters",
                prefix
            )));
        }
        Ok(first)
    }
}

pub(crate) fn parse_amount(input: &str) -> Result<f64, CommandError> {
    let cleaned: String = input
        .trim()
        .chars()
        .filter(|ch| !matches!(ch, ',' | '_' | '₹' | '$'))
        .collect();
    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        Ok(_) => Err(CommandError::InvalidArguments(
            "Amount must be positive.".into(),
        )),
        Err(_) => Err(CommandError::InvalidArguments(format!(
            "invalid amount `{}`",
            input
        ))),
    }
}

pub(crate) fn parse_date(input: &str) -> Result<NaiveDate, CommandError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        CommandError::InvalidArguments(format!("invalid date `{}` (use YYYY-MM-DD)", input))
    })
}

pub(crate) fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(chrono::NaiveTime::MIN)
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Core(#[from] BudgetError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl From<ServiceError> for CommandError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Core(err) => CommandError::Core(err),
            ServiceError::Invalid(message) => CommandError::InvalidArguments(message),
        }
    }
}

/// User-facing CLI error wrapper.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] BudgetError),
    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("Command failed: {0}")]
    Command(String),
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        CliError::Command(err.to_string())
    }
}

pub(crate) fn print_help_for(context: &ShellContext, name: &str) {
    match context.command(&name.to_lowercase()) {
        Some(entry) => help::print_command(entry),
        None => context.suggest_command(name),
    }
}

#[cfg(test)]
pub(crate) fn process_script(lines: &[&str]) -> Result<(ShellContext, tempfile::TempDir), CliError> {
    let temp = tempfile::TempDir::new()?;
    let manager = ConfigManager::with_base_dir(temp.path().to_path_buf())?;
    let mut app = ShellContext::with_parts(CliMode::Script, LedgerStore::new(), manager)?;
    for line in lines {
        match app.process_line(line) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => app.report_error(err),
        }
    }
    Ok((app, temp))
}
