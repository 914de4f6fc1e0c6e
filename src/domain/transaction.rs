//! Transaction records as stored and served by the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::category::Category;

/// A single income or expense entry.
///
/// `amount` keeps the sign the client sent (the historical convention is
/// positive for income, negative for expenses). Nothing downstream relies
/// on it: aggregation always consumes [`Transaction::magnitude`], and the
/// income/expense split comes from the category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub amount: f64,
    pub description: String,
    pub category: Category,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Creates a transaction dated `date`, or now when unset.
    pub fn new(
        amount: f64,
        description: impl Into<String>,
        category: Category,
        date: Option<DateTime<Utc>>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            amount,
            description: description.into(),
            category,
            date: date.unwrap_or(now),
            created_at: now,
        }
    }

    /// The unsigned spend/income quantity.
    pub fn magnitude(&self) -> f64 {
        self.amount.abs()
    }

    pub fn kind(&self) -> TransactionKind {
        if self.category.is_income() {
            TransactionKind::Income
        } else {
            TransactionKind::Expense
        }
    }
}

/// Income/expense discriminant, derived from the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Income,
    Expense,
}
