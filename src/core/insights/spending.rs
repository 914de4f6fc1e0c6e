//! Period filtering and per-category spending totals.

use indexmap::IndexMap;

use crate::domain::{Category, Period, Transaction};

/// Selects the expense transactions dated inside `period`.
///
/// Income entries never count as spending and are dropped here, before any
/// aggregation. The returned iterator is lazy and `Clone`, so a caller can
/// restart it without re-filtering by hand.
pub fn expenses_in_period(
    transactions: &[Transaction],
    period: Period,
) -> impl Iterator<Item = &Transaction> + Clone {
    transactions
        .iter()
        .filter(move |txn| !txn.category.is_income() && period.contains(txn.date))
}

/// Sums absolute transaction amounts per category.
///
/// Categories with no transactions in the input never appear as keys; the
/// map keeps first-encounter order so downstream tie-breaking is stable.
pub fn spending_by_category<'a>(
    transactions: impl Iterator<Item = &'a Transaction>,
) -> IndexMap<Category, f64> {
    let mut totals = IndexMap::new();
    for txn in transactions {
        *totals.entry(txn.category).or_insert(0.0) += txn.magnitude();
    }
    totals
}
