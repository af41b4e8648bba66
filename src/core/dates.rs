//! Expense date normalization.
//!
//! Users usually pick a calendar day, not a time. A bare day is stamped with
//! the current time of day so same-day entries still sort chronologically.
//! Inputs that already carry a time are kept as given.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime};

use crate::domain::DateInput;

const DATE_FORMAT: &str = "%Y-%m-%d";

const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Resolves the timestamp stored for a new expense.
///
/// * text with a time component, or a non-midnight timestamp, is kept verbatim
///   (RFC 3339 offsets are converted to local wall-clock time);
/// * a bare date, or a timestamp at exactly midnight, keeps its calendar day and
///   takes the time of day from `now`;
/// * anything unparseable falls back to `now`.
pub fn normalize_expense_date(input: &DateInput, now: NaiveDateTime) -> NaiveDateTime {
    match input {
        DateInput::Text(raw) => normalize_text(raw, now),
        DateInput::Date(date) => stamp_with_time_of_day(*date, now),
        DateInput::Timestamp(timestamp) => {
            if timestamp.time() == NaiveTime::MIN {
                tracing::debug!(%timestamp, "midnight timestamp treated as bare date");
                stamp_with_time_of_day(timestamp.date(), now)
            } else {
                *timestamp
            }
        }
    }
}

fn normalize_text(raw: &str, now: NaiveDateTime) -> NaiveDateTime {
    let text = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return parsed.with_timezone(&Local).naive_local();
    }

    if let Some(parsed) = TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
    {
        return parsed;
    }

    match NaiveDate::parse_from_str(text, DATE_FORMAT) {
        Ok(date) => stamp_with_time_of_day(date, now),
        Err(_) => {
            tracing::warn!(
                input = %raw,
                "invalid expense date received; defaulting to the current timestamp"
            );
            now
        }
    }
}

fn stamp_with_time_of_day(date: NaiveDate, now: NaiveDateTime) -> NaiveDateTime {
    date.and_time(now.time())
}
