//! End-to-end aggregation scenarios and the pipeline's guarantees:
//! idempotence, partition completeness, the spending sum invariant, the
//! at-budget boundary, and income exclusion.

mod common;

use budgetwise::core::services::ReportService;
use budgetwise::domain::{Category, Period};
use budgetwise::storage::Store;

use common::{date_in, txn};

fn january() -> Period {
    Period::new(0, 2025).unwrap()
}

/// Store for the reference scenario: food and housing spend plus a salary,
/// with 100 budgeted for each expense category.
fn scenario_a_store() -> Store {
    let mut store = Store::new();
    store.add_transaction(txn(-50.0, Category::FoodAndDining, date_in(january(), 10)));
    store.add_transaction(txn(-120.0, Category::Housing, date_in(january(), 4)));
    store.add_transaction(txn(2000.0, Category::Income, date_in(january(), 1)));
    store.upsert_budget(Category::FoodAndDining, 100.0, january());
    store.upsert_budget(Category::Housing, 100.0, january());
    store
}

#[test]
fn scenario_a_comparison_and_insights() {
    let store = scenario_a_store();

    let records = ReportService::monthly_comparison(&store, january());
    assert_eq!(records.len(), 2);

    // Sorted descending by percent used: housing (120%) first.
    assert_eq!(records[0].category, Category::Housing);
    assert_eq!(records[0].budget, 100.0);
    assert_eq!(records[0].actual, 120.0);
    assert_eq!(records[0].percent_used, 120);
    assert!(records[0].is_over_budget);

    assert_eq!(records[1].category, Category::FoodAndDining);
    assert_eq!(records[1].budget, 100.0);
    assert_eq!(records[1].actual, 50.0);
    assert_eq!(records[1].percent_used, 50);
    assert!(!records[1].is_over_budget);

    let insights = ReportService::monthly_insights(&store, january());
    assert_eq!(insights.over_budget_categories.len(), 1);
    assert_eq!(insights.over_budget_categories[0].category, Category::Housing);
    assert_eq!(insights.total_budget, 200.0);
    assert_eq!(insights.total_spending, 170.0);
    assert_eq!(insights.overall_percent_used, 85);
}

#[test]
fn scenario_b_spend_without_budget_gets_the_sentinel() {
    let mut store = Store::new();
    store.add_transaction(txn(-30.0, Category::Travel, date_in(january(), 8)));

    let records = ReportService::monthly_comparison(&store, january());
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].category, Category::Travel);
    assert_eq!(records[0].budget, 0.0);
    assert_eq!(records[0].actual, 30.0);
    assert_eq!(records[0].percent_used, 100);
    assert!(records[0].is_over_budget);
}

#[test]
fn scenario_c_budget_without_spend_is_under_utilized() {
    let mut store = Store::new();
    store.upsert_budget(Category::Education, 250.0, january());

    let records = ReportService::monthly_comparison(&store, january());
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].budget, 250.0);
    assert_eq!(records[0].actual, 0.0);
    assert_eq!(records[0].percent_used, 0);
    assert!(!records[0].is_over_budget);

    let insights = ReportService::monthly_insights(&store, january());
    assert_eq!(insights.under_utilized_categories.len(), 1);
    assert_eq!(
        insights.under_utilized_categories[0].category,
        Category::Education
    );
}

#[test]
fn scenario_d_out_of_month_transactions_do_not_count() {
    let february = Period::new(1, 2025).unwrap();
    let mut store = Store::new();
    store.add_transaction(txn(-40.0, Category::Shopping, date_in(january(), 15)));
    store.add_transaction(txn(-99.0, Category::Shopping, date_in(february, 15)));
    store.upsert_budget(Category::Shopping, 100.0, january());

    let records = ReportService::monthly_comparison(&store, january());
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].actual, 40.0);
}

#[test]
fn rerunning_the_pipeline_is_byte_identical() {
    let store = scenario_a_store();

    let first = ReportService::monthly_insights(&store, january());
    let second = ReportService::monthly_insights(&store, january());
    assert_eq!(first, second);

    let first_json = serde_json::to_vec(&first).unwrap();
    let second_json = serde_json::to_vec(&second).unwrap();
    assert_eq!(first_json, second_json);

    let records_json = serde_json::to_vec(&ReportService::monthly_comparison(&store, january()))
        .unwrap();
    assert_eq!(
        records_json,
        serde_json::to_vec(&ReportService::monthly_comparison(&store, january())).unwrap()
    );
}

#[test]
fn every_category_appears_exactly_once() {
    let mut store = scenario_a_store();
    // Budget with no spend and spend with no budget, on top of the overlap.
    store.upsert_budget(Category::Education, 300.0, january());
    store.add_transaction(txn(-25.0, Category::Travel, date_in(january(), 20)));

    let records = ReportService::monthly_comparison(&store, january());
    assert_eq!(records.len(), 4);

    let mut keys: Vec<&str> = records.iter().map(|r| r.category.key()).collect();
    keys.sort_unstable();
    let before = keys.len();
    keys.dedup();
    assert_eq!(keys.len(), before, "a category appeared in two records");
}

#[test]
fn total_spending_equals_sum_of_nonzero_actuals() {
    let mut store = scenario_a_store();
    store.add_transaction(txn(-25.0, Category::Travel, date_in(january(), 20)));
    store.upsert_budget(Category::Education, 300.0, january());

    let records = ReportService::monthly_comparison(&store, january());
    let insights = ReportService::monthly_insights(&store, january());

    let sum: f64 = records
        .iter()
        .filter(|r| r.actual > 0.0)
        .map(|r| r.actual)
        .sum();
    assert_eq!(sum, insights.total_spending);
}

#[test]
fn spending_exactly_at_budget_is_near_not_over() {
    let mut store = Store::new();
    store.add_transaction(txn(-100.0, Category::Housing, date_in(january(), 2)));
    store.upsert_budget(Category::Housing, 100.0, january());

    let insights = ReportService::monthly_insights(&store, january());
    assert!(insights.over_budget_categories.is_empty());
    assert_eq!(insights.near_budget_categories.len(), 1);
    assert_eq!(insights.near_budget_categories[0].percent_used, 100);
}

#[test]
fn income_never_enters_any_aggregate() {
    let mut store = Store::new();
    store.add_transaction(txn(5000.0, Category::Income, date_in(january(), 1)));
    store.add_transaction(txn(-10.0, Category::Others, date_in(january(), 5)));
    store.upsert_budget(Category::Others, 100.0, january());

    let records = ReportService::monthly_comparison(&store, january());
    assert!(records.iter().all(|r| r.category != Category::Income));

    let insights = ReportService::monthly_insights(&store, january());
    assert_eq!(insights.total_spending, 10.0);
    let top = insights.top_expense_category.expect("top expense");
    assert_eq!(top.category, Category::Others);
}
