//! Derives dashboard insight groups from comparison records.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::insights::comparison::ComparisonRecord;
use crate::domain::Category;

const NEAR_BUDGET_FLOOR: f64 = 0.8;
const UNDER_UTILIZED_CEILING: f64 = 0.3;

/// The single largest expense category for the period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TopExpense {
    pub category: Category,
    pub display_category: String,
    pub amount: f64,
    pub percent_of_total: u32,
}

/// Grouped budget health for one period.
///
/// The groups are predicates over the same records, not a partition: a
/// record lands wherever its thresholds say, and `actual == budget` is
/// near-budget, never over-budget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpendingInsights {
    pub over_budget_categories: Vec<ComparisonRecord>,
    pub near_budget_categories: Vec<ComparisonRecord>,
    pub under_utilized_categories: Vec<ComparisonRecord>,
    pub top_expense_category: Option<TopExpense>,
    pub total_budget: f64,
    pub total_spending: f64,
    pub overall_percent_used: u32,
}

/// Partitions comparison output into insight groups and overall figures.
///
/// `spending` and `budgets` are the same maps the comparison was built
/// from; totals and the top expense come from them so that unbudgeted
/// spending still counts toward `total_spending`.
pub fn classify(
    records: &[ComparisonRecord],
    spending: &IndexMap<Category, f64>,
    budgets: &IndexMap<Category, f64>,
) -> SpendingInsights {
    let mut over_budget: Vec<ComparisonRecord> = records
        .iter()
        .filter(|r| r.budget > 0.0 && r.actual > r.budget)
        .cloned()
        .collect();
    over_budget.sort_by(|a, b| b.percent_used.cmp(&a.percent_used));

    let mut near_budget: Vec<ComparisonRecord> = records
        .iter()
        .filter(|r| {
            r.budget > 0.0 && r.actual >= r.budget * NEAR_BUDGET_FLOOR && r.actual <= r.budget
        })
        .cloned()
        .collect();
    near_budget.sort_by(|a, b| b.percent_used.cmp(&a.percent_used));

    // Only budgeted categories can be under-utilized; zero spend always
    // qualifies, even against a zero allocation.
    let mut under_utilized: Vec<ComparisonRecord> = records
        .iter()
        .filter(|r| {
            budgets.contains_key(&r.category)
                && (r.actual == 0.0 || r.actual < r.budget * UNDER_UTILIZED_CEILING)
        })
        .cloned()
        .collect();
    under_utilized.sort_by(|a, b| a.percent_used.cmp(&b.percent_used));

    let total_budget: f64 = budgets.values().sum();
    let total_spending: f64 = spending.values().sum();
    let overall_percent_used = if total_budget > 0.0 {
        (total_spending / total_budget * 100.0).round() as u32
    } else {
        0
    };

    // Strict max keeps the first-encountered category on ties.
    let mut top: Option<(Category, f64)> = None;
    for (&category, &amount) in spending {
        if amount > top.map(|(_, a)| a).unwrap_or(0.0) {
            top = Some((category, amount));
        }
    }
    let top_expense_category = top.map(|(category, amount)| TopExpense {
        category,
        display_category: category.display_label(),
        amount,
        percent_of_total: (amount / total_spending * 100.0).round() as u32,
    });

    SpendingInsights {
        over_budget_categories: over_budget,
        near_budget_categories: near_budget,
        under_utilized_categories: under_utilized,
        top_expense_category,
        total_budget,
        total_spending,
        overall_percent_used,
    }
}
