//! Shared fixtures for the integration suites.

use budgetwise::domain::{Category, Period, Transaction};
use chrono::{DateTime, TimeZone, Utc};

/// A timestamp on `day` of the given period, at noon.
pub fn date_in(period: Period, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(period.year, period.month + 1, day, 12, 0, 0)
        .unwrap()
}

pub fn txn(amount: f64, category: Category, date: DateTime<Utc>) -> Transaction {
    Transaction::new(amount, "fixture", category, Some(date))
}
