//! Domain types representing recorded expenses.

use std::{fmt, str::FromStr};

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::Amounted;

/// Top-level split of the category taxonomy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseKind {
    /// Fixed or recurring costs: housing, utilities, transportation, debt.
    Essential,
    /// Discretionary spending: food, personal care, entertainment, shopping.
    Variable,
}

impl ExpenseKind {
    pub const ALL: [ExpenseKind; 2] = [ExpenseKind::Essential, ExpenseKind::Variable];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseKind::Essential => "essential",
            ExpenseKind::Variable => "variable",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ExpenseKind::Essential => "Essential",
            ExpenseKind::Variable => "Variable",
        }
    }
}

impl fmt::Display for ExpenseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown expense type `{0}` (expected essential or variable)")]
pub struct ParseExpenseKindError(String);

impl FromStr for ExpenseKind {
    type Err = ParseExpenseKindError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "essential" | "fixed" => Ok(ExpenseKind::Essential),
            "variable" => Ok(ExpenseKind::Variable),
            other => Err(ParseExpenseKindError(other.to_string())),
        }
    }
}

/// A recorded expense. Immutable once stored; only deletion changes the ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: Uuid,
    pub name: String,
    pub amount: f64,
    pub date: NaiveDateTime,
    pub kind: ExpenseKind,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
}

impl Expense {
    /// The most specific category label available.
    pub fn detail_label(&self) -> &str {
        self.sub_category.as_deref().unwrap_or(&self.category)
    }

    pub fn short_id(&self) -> String {
        let mut short = self.id.simple().to_string();
        short.truncate(8);
        short
    }
}

impl Amounted for Expense {
    fn amount(&self) -> f64 {
        self.amount
    }
}

/// Date supplied alongside a new expense, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    /// Raw user text, e.g. `2024-03-01` or `2024-03-01T14:30:00`.
    Text(String),
    /// A calendar date without a time of day.
    Date(NaiveDate),
    /// A full timestamp; midnight is read as "no time picked".
    Timestamp(NaiveDateTime),
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        DateInput::Text(value.to_string())
    }
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        DateInput::Text(value)
    }
}

impl From<NaiveDate> for DateInput {
    fn from(value: NaiveDate) -> Self {
        DateInput::Date(value)
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(value: NaiveDateTime) -> Self {
        DateInput::Timestamp(value)
    }
}

/// Fields collected for an expense that has not been recorded yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub name: String,
    pub amount: f64,
    pub kind: ExpenseKind,
    pub category: String,
    pub sub_category: Option<String>,
    pub date: DateInput,
}

impl NewExpense {
    pub fn new(
        name: impl Into<String>,
        amount: f64,
        kind: ExpenseKind,
        category: impl Into<String>,
        date: impl Into<DateInput>,
    ) -> Self {
        Self {
            name: name.into(),
            amount,
            kind,
            category: category.into(),
            sub_category: None,
            date: date.into(),
        }
    }

    pub fn with_sub_category(mut self, sub_category: impl Into<String>) -> Self {
        self.sub_category = Some(sub_category.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parses_aliases_case_insensitively() {
        assert_eq!("Essential".parse::<ExpenseKind>(), Ok(ExpenseKind::Essential));
        assert_eq!(" fixed ".parse::<ExpenseKind>(), Ok(ExpenseKind::Essential));
        assert_eq!("VARIABLE".parse::<ExpenseKind>(), Ok(ExpenseKind::Variable));
        assert!("luxury".parse::<ExpenseKind>().is_err());
    }

    #[test]
    fn kind_serializes_lowercase() {
        let json = serde_json::to_string(&ExpenseKind::Variable).unwrap();
        assert_eq!(json, "\"variable\"");
    }

    #[test]
    fn detail_label_prefers_sub_category() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let mut expense = Expense {
            id: Uuid::new_v4(),
            name: "Rent".into(),
            amount: 200.0,
            date,
            kind: ExpenseKind::Essential,
            category: "Housing".into(),
            sub_category: Some("Rent / Mortgage".into()),
        };
        assert_eq!(expense.detail_label(), "Rent / Mortgage");
        expense.sub_category = None;
        assert_eq!(expense.detail_label(), "Housing");
        assert_eq!(expense.short_id().len(), 8);
    }
}
