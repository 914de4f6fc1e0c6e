//! BudgetWise API server entry point.

use budgetwise::{
    api::{app, AppState},
    config::ConfigManager,
    storage::JsonStorage,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    budgetwise::init();

    let config = ConfigManager::new()?.load()?;
    let storage = match &config.data_file {
        Some(path) => JsonStorage::new(path),
        None => JsonStorage::new_default()?,
    };
    let store = storage.load()?;
    tracing::info!(
        transactions = store.transactions.len(),
        budgets = store.budgets.len(),
        store_file = %storage.path().display(),
        "store loaded"
    );

    let state = AppState::new(store, storage);
    let router = app(state, &config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(addr = %listener.local_addr()?, "BudgetWise API listening");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::warn!("failed to install ctrl-c handler; shutdown signal disabled");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
