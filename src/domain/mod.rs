pub mod category;
pub mod common;
pub mod expense;
pub mod income;

pub use category::CategoryGroup;
pub use common::Amounted;
pub use expense::{DateInput, Expense, ExpenseKind, NewExpense};
pub use income::Income;
