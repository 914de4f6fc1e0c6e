//! HTTP surface: shared state, error mapping, routes, and handlers.

pub mod handlers;
pub mod routes;

pub use routes::app;

use std::sync::Arc;

use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};
use serde_json::json;
use tokio::sync::RwLock;

use crate::core::services::ServiceError;
use crate::storage::{JsonStorage, Store};

/// Shared handler state: the store snapshot and its persistence backend.
///
/// Mutating handlers hold the write lock across the change and the save, so
/// a response is only sent once the store file reflects it.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<Store>>,
    pub storage: Arc<JsonStorage>,
}

impl AppState {
    pub fn new(store: Store, storage: JsonStorage) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            storage: Arc::new(storage),
        }
    }
}

/// Service failure carried to the HTTP layer.
#[derive(Debug)]
pub struct ApiError(ServiceError);

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ServiceError::TransactionNotFound(_) | ServiceError::BudgetNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self.0, "request failed");
        }
        (status, Json(json!({ "message": self.0.to_string() }))).into_response()
    }
}
