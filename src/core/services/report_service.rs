//! Facade running the insight pipeline over a store snapshot.

use crate::core::insights::{
    budget_index, build_comparison, classify, expenses_in_period, spending_by_category,
    ComparisonRecord, SpendingInsights,
};
use crate::domain::Period;
use crate::storage::Store;

/// Read-only reporting over a consistent store snapshot.
pub struct ReportService;

impl ReportService {
    /// Budget-vs-actual records for every relevant category in `period`.
    pub fn monthly_comparison(store: &Store, period: Period) -> Vec<ComparisonRecord> {
        let spending = spending_by_category(expenses_in_period(&store.transactions, period));
        let budgets = budget_index(&store.budgets_for(period));
        build_comparison(&spending, &budgets)
    }

    /// Full insight classification for `period`.
    pub fn monthly_insights(store: &Store, period: Period) -> SpendingInsights {
        let spending = spending_by_category(expenses_in_period(&store.transactions, period));
        let budgets = budget_index(&store.budgets_for(period));
        let records = build_comparison(&spending, &budgets);
        classify(&records, &spending, &budgets)
    }
}
