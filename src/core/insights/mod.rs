//! Budget-vs-spending aggregation pipeline.
//!
//! Deterministic pure functions over transaction and budget snapshots:
//! filter the period, total spending per category, join against budget
//! allocations, and classify the result into dashboard insight groups.
//! Identical inputs always produce identical, order-stable outputs.

pub mod classifier;
pub mod comparison;
pub mod spending;

pub use classifier::{classify, SpendingInsights, TopExpense};
pub use comparison::{budget_index, build_comparison, ComparisonRecord};
pub use spending::{expenses_in_period, spending_by_category};
