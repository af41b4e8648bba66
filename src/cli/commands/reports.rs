use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::core::services::SummaryService;
use crate::currency::format_timestamp;
use crate::domain::{Expense, ExpenseKind};

use super::{optional_kind, usage_error};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "dashboard",
            "Show balance, totals, and recent activity",
            "dashboard",
            cmd_dashboard,
        ),
        CommandEntry::new(
            "expenses",
            "List expenses, optionally of one type",
            "expenses [essential|variable]",
            cmd_expenses,
        ),
        CommandEntry::new(
            "recent",
            "List the newest expenses",
            "recent [count]",
            cmd_recent,
        ),
        CommandEntry::new(
            "breakdown",
            "Spending per category",
            "breakdown",
            cmd_breakdown,
        ),
        CommandEntry::new(
            "savings",
            "Print the spending summary used for savings suggestions",
            "savings",
            cmd_savings,
        ),
    ]
}

fn cmd_dashboard(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let Some(income) = context.store.income() else {
        output::warning("No income recorded yet.");
        output::hint("Start with `add-income <amount>` to set up your budget.");
        return Ok(());
    };

    let totals = context.store.totals();
    output::section(format!("Dashboard: welcome, {}", context.user_name));
    output::print_two_column(&[
        ("Available balance", context.format_amount(totals.available_balance)),
        ("Total income", context.format_amount(totals.total_income)),
        ("Total expenses", context.format_amount(totals.total_expenses)),
        ("Last income", format_timestamp(income.date)),
    ]);

    let expenses = context.store.expenses();
    output::section("Recent transactions");
    print_expense_table(context, &SummaryService::recent(expenses, context.config.recent_limit));

    for kind in ExpenseKind::ALL {
        print_kind_section(context, expenses, kind);
    }
    Ok(())
}

fn cmd_expenses(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.len() > 1 {
        return Err(usage_error("expenses [essential|variable]"));
    }
    let expenses = context.store.expenses();
    match optional_kind(args)? {
        Some(kind) => print_kind_section(context, expenses, kind),
        None => {
            output::section("All expenses");
            print_expense_table(context, &expenses.iter().collect::<Vec<_>>());
            output::info(format!(
                "Total: {}",
                context.format_amount(context.store.totals().total_expenses)
            ));
        }
    }
    Ok(())
}

fn cmd_recent(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let limit = match args {
        [] => context.config.recent_limit,
        [count] => count.parse::<usize>().map_err(|_| {
            CommandError::InvalidArguments(format!("invalid count `{}`", count))
        })?,
        _ => return Err(usage_error("recent [count]")),
    };
    output::section("Recent transactions");
    print_expense_table(context, &SummaryService::recent(context.store.expenses(), limit));
    Ok(())
}

fn cmd_breakdown(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let breakdown = SummaryService::category_breakdown(context.store.expenses());
    output::section("Spending by category");
    if breakdown.is_empty() {
        output::info("No expenses recorded yet.");
        return Ok(());
    }
    let rows: Vec<Vec<String>> = breakdown
        .iter()
        .map(|share| {
            vec![
                share.category.clone(),
                context.format_amount(share.amount),
                format!("{:.1}%", share.share * 100.0),
            ]
        })
        .collect();
    output::print_table(&["Category", "Amount", "Share"], &rows);
    Ok(())
}

fn cmd_savings(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let summary =
        SummaryService::spending_summary(context.store.income(), context.store.expenses());
    output::section("Your spending habits");
    if summary.is_empty() {
        output::info("Nothing recorded yet. Add income or expenses first.");
    } else {
        print!("{}", summary);
    }
    Ok(())
}

fn print_kind_section(context: &ShellContext, expenses: &[Expense], kind: ExpenseKind) {
    output::section(format!("{} Expenses", kind.title()));
    print_expense_table(context, &SummaryService::expenses_of_kind(expenses, kind));
    output::info(format!(
        "Total: {}",
        context.format_amount(SummaryService::kind_total(expenses, kind))
    ));
}

fn print_expense_table(context: &ShellContext, expenses: &[&Expense]) {
    if expenses.is_empty() {
        output::info("No expenses recorded yet.");
        return;
    }
    let rows: Vec<Vec<String>> = expenses
        .iter()
        .map(|expense| {
            vec![
                expense.short_id(),
                format_timestamp(expense.date),
                expense.name.clone(),
                expense.kind.to_string(),
                expense.detail_label().to_string(),
                context.format_amount(expense.amount),
            ]
        })
        .collect();
    output::print_table(&["ID", "Date", "Name", "Type", "Category", "Amount"], &rows);
}
