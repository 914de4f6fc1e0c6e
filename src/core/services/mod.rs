//! Validated operations over the store.

pub mod budget_service;
pub mod report_service;
pub mod transaction_service;

pub use budget_service::BudgetService;
pub use report_service::ReportService;
pub use transaction_service::TransactionService;

use thiserror::Error;
use uuid::Uuid;

use crate::storage::StoreError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Transaction not found: {0}")]
    TransactionNotFound(Uuid),
    #[error("Budget not found: {0}")]
    BudgetNotFound(Uuid),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}
