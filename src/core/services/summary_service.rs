use serde::Serialize;

use crate::core::ledger_store::sum_expenses;
use crate::domain::{Amounted, Expense, ExpenseKind, Income};

/// Amount spent in one category and its share of all expenses.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryShare {
    pub category: String,
    pub amount: f64,
    /// Fraction of total expenses in `0.0..=1.0`.
    pub share: f64,
}

/// Read-only views over ledger state used by the dashboard and savings screens.
pub struct SummaryService;

impl SummaryService {
    pub fn expenses_of_kind(expenses: &[Expense], kind: ExpenseKind) -> Vec<&Expense> {
        expenses
            .iter()
            .filter(|expense| expense.kind == kind)
            .collect()
    }

    pub fn kind_total(expenses: &[Expense], kind: ExpenseKind) -> f64 {
        sum_expenses(expenses.iter().filter(|expense| expense.kind == kind))
    }

    /// Per-category totals, largest first. Ties keep first-seen order.
    pub fn category_breakdown(expenses: &[Expense]) -> Vec<CategoryShare> {
        let mut shares: Vec<CategoryShare> = Vec::new();
        for expense in expenses {
            let amount = expense.countable_amount();
            match shares
                .iter_mut()
                .find(|share| share.category == expense.category)
            {
                Some(share) => share.amount += amount,
                None => shares.push(CategoryShare {
                    category: expense.category.clone(),
                    amount,
                    share: 0.0,
                }),
            }
        }

        let total: f64 = shares.iter().map(|share| share.amount).sum();
        for share in &mut shares {
            share.share = if total > 0.0 { share.amount / total } else { 0.0 };
        }
        shares.sort_by(|a, b| b.amount.total_cmp(&a.amount));
        shares
    }

    /// The `limit` newest expenses by timestamp.
    pub fn recent(expenses: &[Expense], limit: usize) -> Vec<&Expense> {
        let mut ordered: Vec<&Expense> = expenses.iter().collect();
        ordered.sort_by(|a, b| b.date.cmp(&a.date));
        ordered.truncate(limit);
        ordered
    }

    /// Plain-text digest of income and expenses used to prefill the savings
    /// suggestions form. Empty when nothing has been recorded.
    pub fn spending_summary(income: Option<&Income>, expenses: &[Expense]) -> String {
        if income.is_none() && expenses.is_empty() {
            return String::new();
        }

        let income_label = income
            .map(|income| format!("{:.2}", income.amount))
            .unwrap_or_else(|| "Not specified".to_string());
        let mut summary = format!("Recent Income: ${}.\n\nRecent Expenses:\n", income_label);

        if expenses.is_empty() {
            summary.push_str("No expenses recorded yet.\n");
        }
        for expense in expenses {
            summary.push_str(&format!(
                "- {} (${:.2}) - Category: {} ({})\n",
                expense.name, expense.amount, expense.category, expense.kind
            ));
        }
        summary
    }
}
