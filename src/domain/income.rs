use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::common::Amounted;

/// Cumulative income: the running total of every amount added so far and the
/// date of the latest addition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Income {
    pub amount: f64,
    pub date: NaiveDateTime,
}

impl Income {
    pub fn new(amount: f64, date: NaiveDateTime) -> Self {
        Self { amount, date }
    }

    /// Folds another addition into the total and moves the date forward to it.
    pub fn absorb(&mut self, amount: f64, date: NaiveDateTime) {
        self.amount += amount;
        self.date = date;
    }
}

impl Amounted for Income {
    fn amount(&self) -> f64 {
        self.amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn absorb_accumulates_and_replaces_date() {
        let first = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let second = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(18, 30, 0)
            .unwrap();
        let mut income = Income::new(1000.0, first);
        income.absorb(250.5, second);
        assert_eq!(income.amount, 1250.5);
        assert_eq!(income.date, second);
    }
}
