use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::currency::{CurrencyCode, LocaleConfig};
use crate::errors::BudgetError;
use crate::utils::paths::{app_data_dir, config_file_in, ensure_dir};

const TMP_SUFFIX: &str = "tmp";

/// User preferences. Ledger data is never written here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub user_name: String,
    pub locale: String,
    pub currency: String,
    /// Rows shown by `recent` and on the dashboard.
    pub recent_limit: usize,
    /// Refuse new expenses while the available balance is zero or negative.
    pub block_expenses_without_balance: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_name: "Guest".into(),
            locale: "en-IN".into(),
            currency: "INR".into(),
            recent_limit: 5,
            block_expenses_without_balance: true,
        }
    }
}

impl Config {
    pub const KEYS: [&'static str; 5] = [
        "user_name",
        "locale",
        "currency",
        "recent_limit",
        "block_expenses_without_balance",
    ];

    pub fn currency_code(&self) -> CurrencyCode {
        CurrencyCode::new(self.currency.as_str())
    }

    pub fn locale_config(&self) -> LocaleConfig {
        LocaleConfig::for_tag(&self.locale)
    }

    /// Updates one setting from its textual form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), BudgetError> {
        let value = value.trim();
        match key {
            "user_name" => {
                if value.is_empty() {
                    return Err(BudgetError::Config("user_name cannot be empty".into()));
                }
                self.user_name = value.to_string();
            }
            "locale" => self.locale = value.to_string(),
            "currency" => self.currency = CurrencyCode::new(value).0,
            "recent_limit" => {
                self.recent_limit = value.parse().map_err(|_| {
                    BudgetError::Config(format!("recent_limit expects a number, got `{}`", value))
                })?;
            }
            "block_expenses_without_balance" => {
                self.block_expenses_without_balance = parse_flag(value).ok_or_else(|| {
                    BudgetError::Config(format!(
                        "block_expenses_without_balance expects true/false, got `{}`",
                        value
                    ))
                })?;
            }
            other => {
                return Err(BudgetError::Config(format!(
                    "unknown setting `{}` (known: {})",
                    other,
                    Self::KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }

    /// Settings as key/value rows for display.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("user_name", self.user_name.clone()),
            ("locale", self.locale.clone()),
            ("currency", self.currency.clone()),
            ("recent_limit", self.recent_limit.to_string()),
            (
                "block_expenses_without_balance",
                self.block_expenses_without_balance.to_string(),
            ),
        ]
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, BudgetError> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, BudgetError> {
        ensure_dir(&base)?;
        Ok(Self {
            path: config_file_in(&base),
        })
    }

    /// Loads the stored config, or defaults when none was saved yet.
    pub fn load(&self) -> Result<Config, BudgetError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            tracing::debug!(path = %self.path.display(), "no config file; using defaults");
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), BudgetError> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_file(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::info!(path = %self.path.display(), "config saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_file(path: &Path, data: &str) -> Result<(), BudgetError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
