//! Route table and router assembly.

use axum::{
    http::HeaderValue,
    routing::{delete, get},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::api::{handlers, AppState};
use crate::config::Config;

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/api/v1/transactions",
            get(handlers::list_transactions).post(handlers::add_transaction),
        )
        .route(
            "/api/v1/transactions/:id",
            get(handlers::get_transaction)
                .put(handlers::update_transaction)
                .delete(handlers::delete_transaction),
        )
        .route(
            "/api/v1/transactions/category/:category",
            get(handlers::transactions_by_category),
        )
        .route(
            "/api/v1/budgets",
            get(handlers::monthly_budgets).put(handlers::set_budget),
        )
        .route("/api/v1/budgets/:id", delete(handlers::delete_budget))
        .route(
            "/api/v1/reports/comparison",
            get(handlers::comparison_report),
        )
        .route("/api/v1/reports/insights", get(handlers::insights_report))
}

/// The complete application router with CORS and request tracing.
pub fn app(state: AppState, config: &Config) -> Router {
    api_routes()
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_origins))
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}
