//! Month/year reporting windows.

use std::fmt;

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// A `(month, year)` pair scoping budget and spending queries.
///
/// Months are zero-based (0 = January, 11 = December), matching the stored
/// budget records.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Period {
    pub month: u32,
    pub year: i32,
}

impl Period {
    /// Builds a period, rejecting months outside `0..=11`.
    pub fn new(month: u32, year: i32) -> Result<Self, InvalidPeriod> {
        if month > 11 {
            return Err(InvalidPeriod { month });
        }
        Ok(Self { month, year })
    }

    /// The period containing `instant`.
    pub fn containing(instant: DateTime<Utc>) -> Self {
        Self {
            month: instant.month0(),
            year: instant.year(),
        }
    }

    /// Whether `instant` falls inside this calendar month.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant.month0() == self.month && instant.year() == self.year
    }

    pub fn month_name(&self) -> &'static str {
        const NAMES: [&str; 12] = [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ];
        NAMES[self.month as usize]
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month_name(), self.year)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("month must be 0-11, got {month}")]
pub struct InvalidPeriod {
    pub month: u32,
}
