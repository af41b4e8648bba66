//! Session ledger: cumulative income, the expense list, and derived totals.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDateTime;
use serde::Serialize;
use uuid::Uuid;

use crate::core::clock::{Clock, SystemClock};
use crate::core::dates::normalize_expense_date;
use crate::domain::{Amounted, Expense, Income, NewExpense};
use crate::errors::{BudgetError, Result};

/// Running totals derived from the ledger on every read.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Default)]
pub struct LedgerTotals {
    pub total_income: f64,
    pub total_expenses: f64,
    /// Income minus expenses. Negative when overspent.
    pub available_balance: f64,
}

/// Owned copy of the ledger state.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct LedgerSnapshot {
    pub income: Option<Income>,
    pub expenses: Vec<Expense>,
}

/// Single source of truth for the session's income and expenses.
///
/// Nothing is persisted; dropping the store (or calling [`LedgerStore::reset`])
/// discards everything.
pub struct LedgerStore {
    income: Option<Income>,
    expenses: Vec<Expense>,
    clock: Arc<dyn Clock>,
}

impl Default for LedgerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LedgerStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LedgerStore")
            .field("income", &self.income)
            .field("expenses", &self.expenses.len())
            .finish()
    }
}

impl LedgerStore {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            income: None,
            expenses: Vec::new(),
            clock,
        }
    }

    /// Adds money to the cumulative income. The first call creates the
    /// aggregate; later calls add to it and move its date to `date`.
    pub fn record_income(&mut self, amount: f64, date: NaiveDateTime) -> Result<&Income> {
        ensure_positive(amount, "income amount")?;
        let income = match self.income.take() {
            None => Income::new(amount, date),
            Some(mut existing) => {
                existing.absorb(amount, date);
                existing
            }
        };
        tracing::info!(amount, total = income.amount, %date, "income recorded");
        Ok(&*self.income.insert(income))
    }

    /// Records a new expense at the front of the list and returns a copy of it.
    pub fn record_expense(&mut self, data: NewExpense) -> Result<Expense> {
        ensure_positive(data.amount, "expense amount")?;
        let category = data.category.trim();
        if category.is_empty() {
            return Err(BudgetError::Validation("expense category is required".into()));
        }

        let date = normalize_expense_date(&data.date, self.clock.now());
        let expense = Expense {
            id: Uuid::new_v4(),
            name: data.name.trim().to_string(),
            amount: data.amount,
            date,
            kind: data.kind,
            category: category.to_string(),
            sub_category: data
                .sub_category
                .map(|sub| sub.trim().to_string())
                .filter(|sub| !sub.is_empty()),
        };
        tracing::info!(
            id = %expense.id,
            amount = expense.amount,
            kind = %expense.kind,
            category = %expense.category,
            "expense recorded"
        );
        self.expenses.insert(0, expense.clone());
        Ok(expense)
    }

    /// Removes the expense with `id`. Unknown ids leave the ledger untouched.
    pub fn delete_expense(&mut self, id: Uuid) -> Option<Expense> {
        match self.expenses.iter().position(|expense| expense.id == id) {
            Some(index) => {
                let removed = self.expenses.remove(index);
                tracing::info!(%id, amount = removed.amount, "expense deleted");
                Some(removed)
            }
            None => {
                tracing::debug!(%id, "delete ignored; expense not found");
                None
            }
        }
    }

    pub fn income(&self) -> Option<&Income> {
        self.income.as_ref()
    }

    /// Expenses, most recently recorded first.
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn expense(&self, id: Uuid) -> Option<&Expense> {
        self.expenses.iter().find(|expense| expense.id == id)
    }

    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            income: self.income.clone(),
            expenses: self.expenses.clone(),
        }
    }

    pub fn totals(&self) -> LedgerTotals {
        let total_income = self.income.as_ref().map_or(0.0, Amounted::countable_amount);
        let total_expenses = sum_expenses(&self.expenses);
        LedgerTotals {
            total_income,
            total_expenses,
            available_balance: total_income - total_expenses,
        }
    }

    /// Current time according to the store's clock.
    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    /// Drops all income and expenses.
    pub fn reset(&mut self) {
        self.income = None;
        self.expenses.clear();
        tracing::info!("ledger reset");
    }
}

/// Sums expense amounts, counting non-finite values as zero.
pub fn sum_expenses<'a>(expenses: impl IntoIterator<Item = &'a Expense>) -> f64 {
    expenses
        .into_iter()
        .map(|expense| {
            let amount = expense.countable_amount();
            if amount != expense.amount {
                tracing::warn!(id = %expense.id, "non-numeric expense amount counted as zero");
            }
            amount
        })
        .sum()
}

fn ensure_positive(amount: f64, label: &str) -> Result<()> {
    if amount.is_finite() && amount > 0.0 {
        Ok(())
    } else {
        Err(BudgetError::Validation(format!(
            "{} must be a positive number (got {})",
            label, amount
        )))
    }
}

/// Thread-safe handle for callers sharing one ledger. The write lock makes
/// the read-modify-write of cumulative income atomic.
#[derive(Debug, Clone, Default)]
pub struct SharedLedgerStore {
    inner: Arc<RwLock<LedgerStore>>,
}

impl SharedLedgerStore {
    pub fn new(store: LedgerStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, LedgerStore>> {
        self.inner.read().map_err(|_| BudgetError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, LedgerStore>> {
        self.inner.write().map_err(|_| BudgetError::LockPoisoned)
    }

    pub fn record_income(&self, amount: f64, date: NaiveDateTime) -> Result<Income> {
        let mut store = self.write()?;
        store.record_income(amount, date).cloned()
    }

    pub fn record_expense(&self, data: NewExpense) -> Result<Expense> {
        self.write()?.record_expense(data)
    }

    pub fn delete_expense(&self, id: Uuid) -> Result<Option<Expense>> {
        Ok(self.write()?.delete_expense(id))
    }

    pub fn snapshot(&self) -> Result<LedgerSnapshot> {
        Ok(self.read()?.snapshot())
    }

    pub fn totals(&self) -> Result<LedgerTotals> {
        Ok(self.read()?.totals())
    }

    /// Runs `f` with shared read access to the underlying store.
    pub fn with_store<T>(&self, f: impl FnOnce(&LedgerStore) -> T) -> Result<T> {
        let store = self.read()?;
        Ok(f(&store))
    }
}
