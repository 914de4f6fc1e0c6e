#![doc(test(attr(deny(warnings))))]

//! BudgetWise tracks personal transactions and monthly budgets and derives
//! spending insights (budget comparisons, over/near/under-budget groups)
//! served over a small REST API.

pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("BudgetWise tracing initialized.");
    });
}
