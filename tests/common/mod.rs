use std::sync::Arc;

use budget_buddy::core::{FixedClock, LedgerStore};
use chrono::{NaiveDate, NaiveDateTime};

/// Wall-clock moment every test store starts at.
pub fn session_start() -> NaiveDateTime {
    at(2024, 3, 10, 16, 45, 12)
}

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .expect("valid date")
        .and_hms_opt(h, min, s)
        .expect("valid time")
}

/// A store driven by a clock the test controls.
pub fn fixed_store() -> (LedgerStore, Arc<FixedClock>) {
    let clock = Arc::new(FixedClock::new(session_start()));
    let store = LedgerStore::with_clock(clock.clone());
    (store, clock)
}
