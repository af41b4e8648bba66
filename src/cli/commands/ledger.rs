use crate::cli::core::{
    parse_amount, parse_date, start_of_day, CommandError, CommandResult, ShellContext,
};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::core::services::CategoryService;
use crate::domain::{DateInput, NewExpense};

use super::{parse_kind, usage_error};

const ADD_INCOME_USAGE: &str = "add-income <amount> [YYYY-MM-DD]";
const ADD_EXPENSE_USAGE: &str =
    "add-expense <name> <amount> <essential|variable> <category> [--sub <option>] [--date <date>]";
const DELETE_USAGE: &str = "delete-expense <id>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "add-income",
            "Add money to your income",
            ADD_INCOME_USAGE,
            cmd_add_income,
        ),
        CommandEntry::new(
            "add-expense",
            "Record a categorized expense",
            ADD_EXPENSE_USAGE,
            cmd_add_expense,
        ),
        CommandEntry::new(
            "delete-expense",
            "Delete an expense by id (or id prefix)",
            DELETE_USAGE,
            cmd_delete_expense,
        ),
        CommandEntry::new("reset", "Clear all income and expenses", "reset", cmd_reset),
    ]
}

fn cmd_add_income(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (amount, date) = match args {
        [amount] => (parse_amount(amount)?, context.store.now()),
        [amount, date] => (parse_amount(amount)?, start_of_day(parse_date(date)?)),
        _ => return Err(usage_error(ADD_INCOME_USAGE)),
    };

    let total = context.store.record_income(amount, date)?.amount;
    output::success(format!(
        "{} has been successfully added to your income.",
        context.format_amount(amount)
    ));
    output::info(format!("Total income: {}", context.format_amount(total)));
    Ok(())
}

struct ExpenseArgs<'a> {
    name: &'a str,
    amount: &'a str,
    kind: &'a str,
    category: &'a str,
    sub_category: Option<&'a str>,
    date: Option<&'a str>,
}

fn parse_expense_args<'a>(args: &[&'a str]) -> Result<ExpenseArgs<'a>, CommandError> {
    let mut positional = Vec::new();
    let mut sub_category = None;
    let mut date = None;
    let mut iter = args.iter().copied();
    while let Some(arg) = iter.next() {
        match arg {
            "--sub" => sub_category = Some(iter.next().ok_or_else(|| usage_error(ADD_EXPENSE_USAGE))?),
            "--date" => date = Some(iter.next().ok_or_else(|| usage_error(ADD_EXPENSE_USAGE))?),
            flag if flag.starts_with("--") => {
                return Err(CommandError::InvalidArguments(format!(
                    "unknown option `{}`",
                    flag
                )))
            }
            value => positional.push(value),
        }
    }
    match positional[..] {
        [name, amount, kind, category] => Ok(ExpenseArgs {
            name,
            amount,
            kind,
            category,
            sub_category,
            date,
        }),
        _ => Err(usage_error(ADD_EXPENSE_USAGE)),
    }
}

fn cmd_add_expense(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let parsed = parse_expense_args(args)?;
    let amount = parse_amount(parsed.amount)?;
    let kind = parse_kind(parsed.kind)?;
    let resolved = CategoryService::resolve(kind, parsed.category, parsed.sub_category)?;

    let totals = context.store.totals();
    if context.config.block_expenses_without_balance && totals.available_balance <= 0.0 {
        output::warning(
            "Insufficient balance: your balance is too low to add an expense. Add money first.",
        );
        return Ok(());
    }

    let date = match parsed.date {
        Some(raw) => DateInput::Text(raw.to_string()),
        None => DateInput::Timestamp(context.store.now()),
    };
    let mut data = NewExpense::new(parsed.name, amount, kind, resolved.category(), date);
    if let Some(option) = resolved.sub_category {
        data = data.with_sub_category(option);
    }

    let expense = context.store.record_expense(data)?;
    output::success(format!(
        "Expense `{}` of {} recorded (id {}).",
        expense.name,
        context.format_amount(expense.amount),
        expense.short_id()
    ));
    let balance = context.store.totals().available_balance;
    if balance < 0.0 {
        output::warning(format!(
            "You are overspent: available balance is {}.",
            context.format_amount(balance)
        ));
    }
    Ok(())
}

fn cmd_delete_expense(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [raw] = args else {
        return Err(usage_error(DELETE_USAGE));
    };
    let id = context.find_expense_by_prefix(raw)?.map(|expense| expense.id);
    let Some(id) = id else {
        output::warning(format!("No expense matches `{}`; nothing deleted.", raw));
        return Ok(());
    };
    if let Some(removed) = context.store.delete_expense(id) {
        output::success(format!(
            "Deleted `{}` ({}).",
            removed.name,
            context.format_amount(removed.amount)
        ));
    }
    Ok(())
}

fn cmd_reset(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if !context.confirm("Clear all income and expenses?")? {
        output::info("Reset cancelled.");
        return Ok(());
    }
    context.store.reset();
    output::success("Ledger cleared.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expense_args_accept_flags_anywhere() {
        let parsed = parse_expense_args(&[
            "--date",
            "2024-01-05",
            "Rent",
            "200",
            "essential",
            "Housing",
            "--sub",
            "Rent / Mortgage",
        ])
        .unwrap();
        assert_eq!(parsed.name, "Rent");
        assert_eq!(parsed.amount, "200");
        assert_eq!(parsed.kind, "essential");
        assert_eq!(parsed.category, "Housing");
        assert_eq!(parsed.sub_category, Some("Rent / Mortgage"));
        assert_eq!(parsed.date, Some("2024-01-05"));
    }

    #[test]
    fn expense_args_reject_missing_values() {
        assert!(parse_expense_args(&["Rent", "200", "essential"]).is_err());
        assert!(parse_expense_args(&["Rent", "200", "essential", "Housing", "--sub"]).is_err());
        assert!(parse_expense_args(&["Rent", "200", "essential", "Housing", "--tag", "x"]).is_err());
    }
}
