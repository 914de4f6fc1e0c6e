//! Budget allocations, one per category per month.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::category::Category;
use crate::domain::period::Period;

/// A monthly spending allocation for one expense category.
///
/// The store guarantees at most one budget per `(category, month, year)`;
/// setting the same triple again replaces the amount.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Budget {
    pub id: Uuid,
    pub category: Category,
    pub amount: f64,
    pub month: u32,
    pub year: i32,
}

impl Budget {
    pub fn new(category: Category, amount: f64, period: Period) -> Self {
        Self {
            id: Uuid::new_v4(),
            category,
            amount,
            month: period.month,
            year: period.year,
        }
    }

    pub fn period(&self) -> Period {
        Period {
            month: self.month,
            year: self.year,
        }
    }

    /// Whether this budget applies to `period`.
    pub fn is_for(&self, period: Period) -> bool {
        self.month == period.month && self.year == period.year
    }
}
