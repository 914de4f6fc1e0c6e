//! Business logic helpers for managing transactions.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::core::services::{ServiceError, ServiceResult};
use crate::domain::{Category, Transaction};
use crate::storage::Store;

/// Provides validated CRUD helpers for transactions.
pub struct TransactionService;

impl TransactionService {
    /// Adds a new transaction and returns it.
    pub fn add(
        store: &mut Store,
        amount: f64,
        description: &str,
        category: Category,
        date: Option<DateTime<Utc>>,
    ) -> ServiceResult<Transaction> {
        validate(amount, description)?;
        let transaction = Transaction::new(amount, description.trim(), category, date);
        store.add_transaction(transaction.clone());
        Ok(transaction)
    }

    /// Returns a snapshot of every transaction.
    pub fn list(store: &Store) -> Vec<Transaction> {
        store.transactions.clone()
    }

    pub fn get(store: &Store, id: Uuid) -> ServiceResult<Transaction> {
        store
            .transaction(id)
            .cloned()
            .ok_or(ServiceError::TransactionNotFound(id))
    }

    /// Rewrites the mutable fields of the transaction identified by `id`.
    ///
    /// The id and creation time never change.
    pub fn update(
        store: &mut Store,
        id: Uuid,
        amount: f64,
        description: &str,
        category: Category,
    ) -> ServiceResult<Transaction> {
        validate(amount, description)?;
        let txn = store
            .transaction_mut(id)
            .ok_or(ServiceError::TransactionNotFound(id))?;
        txn.amount = amount;
        txn.description = description.trim().to_string();
        txn.category = category;
        Ok(txn.clone())
    }

    /// Removes the transaction identified by `id`, returning the removed instance.
    pub fn remove(store: &mut Store, id: Uuid) -> ServiceResult<Transaction> {
        store
            .remove_transaction(id)
            .ok_or(ServiceError::TransactionNotFound(id))
    }

    pub fn by_category(store: &Store, category: Category) -> Vec<Transaction> {
        store
            .transactions_in_category(category)
            .into_iter()
            .cloned()
            .collect()
    }
}

fn validate(amount: f64, description: &str) -> ServiceResult<()> {
    if !amount.is_finite() {
        return Err(ServiceError::Validation(
            "amount must be a finite number".into(),
        ));
    }
    if description.trim().is_empty() {
        return Err(ServiceError::Validation(
            "description must not be empty".into(),
        ));
    }
    Ok(())
}
