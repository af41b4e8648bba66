use thiserror::Error;

/// Failures surfaced by the ledger store, its services, and configuration.
#[derive(Debug, Error)]
pub enum BudgetError {
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Unknown category `{input}`{}", suggestion_hint(.suggestion))]
    UnknownCategory {
        input: String,
        suggestion: Option<String>,
    },
    #[error("Ledger lock poisoned")]
    LockPoisoned,
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, BudgetError>;

fn suggestion_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(name) => format!(" (did you mean `{}`?)", name),
        None => String::new(),
    }
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        BudgetError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        BudgetError::Config(err.to_string())
    }
}
