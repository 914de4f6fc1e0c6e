//! Request handlers for the transaction, budget, and report endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::api::{ApiError, AppState};
use crate::core::services::{
    BudgetService, ReportService, ServiceError, TransactionService,
};
use crate::domain::{Category, Period};

#[derive(Debug, Deserialize)]
pub struct TransactionPayload {
    pub amount: f64,
    pub description: String,
    pub category: Category,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct BudgetPayload {
    pub category: Category,
    pub amount: f64,
    pub month: u32,
    pub year: i32,
}

/// `?month=&year=` query pair used by budget and report endpoints.
#[derive(Debug, Deserialize)]
pub struct PeriodQuery {
    pub month: u32,
    pub year: i32,
}

impl PeriodQuery {
    fn period(&self) -> Result<Period, ApiError> {
        Period::new(self.month, self.year)
            .map_err(|err| ServiceError::Validation(err.to_string()).into())
    }
}

pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

pub async fn add_transaction(
    State(state): State<AppState>,
    Json(payload): Json<TransactionPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let mut store = state.store.write().await;
    let transaction = TransactionService::add(
        &mut store,
        payload.amount,
        &payload.description,
        payload.category,
        payload.date,
    )?;
    state.storage.save(&store).map_err(ServiceError::Store)?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Transaction added successfully",
            "transaction": transaction,
        })),
    ))
}

pub async fn list_transactions(State(state): State<AppState>) -> impl IntoResponse {
    let store = state.store.read().await;
    Json(TransactionService::list(&store))
}

pub async fn get_transaction(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let store = state.store.read().await;
    Ok(Json(TransactionService::get(&store, id)?))
}

pub async fn update_transaction(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<TransactionPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let mut store = state.store.write().await;
    let transaction = TransactionService::update(
        &mut store,
        id,
        payload.amount,
        &payload.description,
        payload.category,
    )?;
    state.storage.save(&store).map_err(ServiceError::Store)?;
    Ok(Json(json!({
        "message": "Transaction updated successfully",
        "transaction": transaction,
    })))
}

pub async fn delete_transaction(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let mut store = state.store.write().await;
    TransactionService::remove(&mut store, id)?;
    state.storage.save(&store).map_err(ServiceError::Store)?;
    Ok(Json(json!({ "message": "Transaction deleted successfully" })))
}

pub async fn transactions_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let category: Category = category
        .parse()
        .map_err(|err: crate::domain::UnknownCategory| {
            ApiError::from(ServiceError::Validation(err.to_string()))
        })?;
    let store = state.store.read().await;
    Ok(Json(TransactionService::by_category(&store, category)))
}

pub async fn monthly_budgets(
    State(state): State<AppState>,
    Query(query): Query<PeriodQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let period = query.period()?;
    let store = state.store.read().await;
    Ok(Json(BudgetService::monthly(&store, period)))
}

pub async fn set_budget(
    State(state): State<AppState>,
    Json(payload): Json<BudgetPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let period = Period::new(payload.month, payload.year)
        .map_err(|err| ServiceError::Validation(err.to_string()))?;
    let mut store = state.store.write().await;
    let budget = BudgetService::upsert(&mut store, payload.category, payload.amount, period)?;
    state.storage.save(&store).map_err(ServiceError::Store)?;
    Ok(Json(json!({
        "message": "Budget set successfully",
        "budget": budget,
    })))
}

pub async fn delete_budget(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let mut store = state.store.write().await;
    BudgetService::remove(&mut store, id)?;
    state.storage.save(&store).map_err(ServiceError::Store)?;
    Ok(Json(json!({ "message": "Budget deleted successfully" })))
}

pub async fn comparison_report(
    State(state): State<AppState>,
    Query(query): Query<PeriodQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let period = query.period()?;
    let store = state.store.read().await;
    Ok(Json(ReportService::monthly_comparison(&store, period)))
}

pub async fn insights_report(
    State(state): State<AppState>,
    Query(query): Query<PeriodQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let period = query.period()?;
    let store = state.store.read().await;
    Ok(Json(ReportService::monthly_insights(&store, period)))
}
