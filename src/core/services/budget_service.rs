//! Business logic helpers for managing budgets.

use uuid::Uuid;

use crate::core::services::{ServiceError, ServiceResult};
use crate::domain::{Budget, Category, Period};
use crate::storage::Store;

/// Provides validated upsert/query/delete helpers for budgets.
pub struct BudgetService;

impl BudgetService {
    /// Creates or replaces the budget for `(category, period)`.
    ///
    /// Income cannot be budgeted, and zero or negative allocations are
    /// rejected outright; the comparison layer still guards the zero case
    /// for stores written by older producers.
    pub fn upsert(
        store: &mut Store,
        category: Category,
        amount: f64,
        period: Period,
    ) -> ServiceResult<Budget> {
        if category.is_income() {
            return Err(ServiceError::Validation(
                "income cannot have a budget".into(),
            ));
        }
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ServiceError::Validation(
                "budget amount must be a positive number".into(),
            ));
        }
        Ok(store.upsert_budget(category, amount, period))
    }

    /// Budgets scoped to one period.
    pub fn monthly(store: &Store, period: Period) -> Vec<Budget> {
        store.budgets_for(period)
    }

    /// Removes the budget identified by `id`, returning the removed instance.
    pub fn remove(store: &mut Store, id: Uuid) -> ServiceResult<Budget> {
        store.remove_budget(id).ok_or(ServiceError::BudgetNotFound(id))
    }
}
