//! Budget-vs-actual comparison records for a reporting period.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::domain::{Budget, Category};

/// One category's budget versus actual spending.
///
/// `percent_used` is a rounded integer percentage. A category with spending
/// but no budget is reported as `{budget: 0, percent_used: 100,
/// is_over_budget: true}`; the dashboard renders that sentinel as a fully
/// consumed bar, so it is part of the contract rather than a computed ratio.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRecord {
    pub category: Category,
    pub display_category: String,
    pub budget: f64,
    pub actual: f64,
    pub percent_used: u32,
    pub is_over_budget: bool,
}

/// Maps each budget's category to its allocated amount.
///
/// Budgets are expected to be pre-filtered to a single period; first-seen
/// order is preserved.
pub fn budget_index(budgets: &[Budget]) -> IndexMap<Category, f64> {
    let mut index = IndexMap::new();
    for budget in budgets {
        index.insert(budget.category, budget.amount);
    }
    index
}

/// Joins spending totals with budget allocations.
///
/// Two passes: one record per budgeted category (actual defaults to zero),
/// then one record per category that was spent on without a budget. The
/// result is sorted by `percent_used` descending; the sort is stable, so
/// equal percentages keep input order.
pub fn build_comparison(
    spending: &IndexMap<Category, f64>,
    budgets: &IndexMap<Category, f64>,
) -> Vec<ComparisonRecord> {
    let mut records = Vec::with_capacity(budgets.len() + spending.len());

    for (&category, &budget) in budgets {
        let actual = spending.get(&category).copied().unwrap_or(0.0);
        let (percent_used, is_over_budget) = usage(actual, budget);
        records.push(ComparisonRecord {
            category,
            display_category: category.display_label(),
            budget,
            actual,
            percent_used,
            is_over_budget,
        });
    }

    for (&category, &actual) in spending {
        if budgets.contains_key(&category) {
            continue;
        }
        records.push(ComparisonRecord {
            category,
            display_category: category.display_label(),
            budget: 0.0,
            actual,
            percent_used: 100,
            is_over_budget: true,
        });
    }

    records.sort_by(|a, b| b.percent_used.cmp(&a.percent_used));
    records
}

/// Percentage used and over-budget flag for one budgeted category.
///
/// A zero budget with nonzero spend reports the same 100%/over sentinel as
/// an unbudgeted category instead of dividing; `percent_used` therefore
/// never becomes NaN or infinite.
fn usage(actual: f64, budget: f64) -> (u32, bool) {
    if budget > 0.0 {
        let percent = if actual == 0.0 {
            0
        } else {
            (actual / budget * 100.0).round() as u32
        };
        (percent, actual > budget)
    } else if actual > 0.0 {
        (100, true)
    } else {
        (0, false)
    }
}
