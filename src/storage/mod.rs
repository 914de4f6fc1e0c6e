//! In-memory store and its JSON persistence backend.

pub mod json_backend;

pub use json_backend::JsonStorage;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{Budget, Category, Period, Transaction};

pub type Result<T> = std::result::Result<T, StoreError>;

/// Error type capturing store persistence failures.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Storage error: {0}")]
    Storage(String),
}

/// The full persisted state: every transaction and budget.
///
/// Serialized as one JSON document. The store upholds the uniqueness
/// invariant of at most one budget per `(category, month, year)`.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Store {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub budgets: Vec<Budget>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_transaction(&mut self, transaction: Transaction) -> Uuid {
        let id = transaction.id;
        self.transactions.push(transaction);
        id
    }

    pub fn transaction(&self, id: Uuid) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    pub fn transaction_mut(&mut self, id: Uuid) -> Option<&mut Transaction> {
        self.transactions.iter_mut().find(|txn| txn.id == id)
    }

    pub fn remove_transaction(&mut self, id: Uuid) -> Option<Transaction> {
        let position = self.transactions.iter().position(|txn| txn.id == id)?;
        Some(self.transactions.remove(position))
    }

    pub fn transactions_in_category(&self, category: Category) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|txn| txn.category == category)
            .collect()
    }

    /// Creates or replaces the budget for `(category, period)`.
    pub fn upsert_budget(&mut self, category: Category, amount: f64, period: Period) -> Budget {
        if let Some(existing) = self
            .budgets
            .iter_mut()
            .find(|b| b.category == category && b.is_for(period))
        {
            existing.amount = amount;
            return existing.clone();
        }
        let budget = Budget::new(category, amount, period);
        self.budgets.push(budget.clone());
        budget
    }

    /// The budgets scoped to one period, in insertion order.
    pub fn budgets_for(&self, period: Period) -> Vec<Budget> {
        self.budgets
            .iter()
            .filter(|b| b.is_for(period))
            .cloned()
            .collect()
    }

    pub fn remove_budget(&mut self, id: Uuid) -> Option<Budget> {
        let position = self.budgets.iter().position(|b| b.id == id)?;
        Some(self.budgets.remove(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn january() -> Period {
        Period::new(0, 2025).unwrap()
    }

    #[test]
    fn upsert_replaces_instead_of_duplicating() {
        let mut store = Store::new();
        let first = store.upsert_budget(Category::Housing, 800.0, january());
        let second = store.upsert_budget(Category::Housing, 950.0, january());

        assert_eq!(first.id, second.id);
        assert_eq!(store.budgets.len(), 1);
        assert_eq!(store.budgets[0].amount, 950.0);
    }

    #[test]
    fn upsert_keeps_periods_separate() {
        let mut store = Store::new();
        store.upsert_budget(Category::Housing, 800.0, january());
        store.upsert_budget(Category::Housing, 820.0, Period::new(1, 2025).unwrap());

        assert_eq!(store.budgets.len(), 2);
        assert_eq!(store.budgets_for(january()).len(), 1);
    }

    #[test]
    fn remove_budget_by_id() {
        let mut store = Store::new();
        let budget = store.upsert_budget(Category::Travel, 300.0, january());
        let removed = store.remove_budget(budget.id).expect("budget exists");
        assert_eq!(removed.id, budget.id);
        assert!(store.budgets.is_empty());
    }

    #[test]
    fn transactions_in_category_filters() {
        let mut store = Store::new();
        store.add_transaction(Transaction::new(-10.0, "a", Category::Travel, None));
        store.add_transaction(Transaction::new(-10.0, "b", Category::Housing, None));
        assert_eq!(store.transactions_in_category(Category::Travel).len(), 1);
    }
}
