pub mod clock;
pub mod dates;
pub mod ledger_store;
pub mod services;

pub use clock::{Clock, FixedClock, SystemClock};
pub use dates::normalize_expense_date;
pub use ledger_store::{LedgerSnapshot, LedgerStore, LedgerTotals, SharedLedgerStore};
