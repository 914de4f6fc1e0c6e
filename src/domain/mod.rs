//! Pure domain models: categories, periods, transactions, and budgets.
//! No I/O, no HTTP, no storage. Only data types and core enums.

pub mod budget;
pub mod category;
pub mod period;
pub mod transaction;

pub use budget::Budget;
pub use category::{Category, UnknownCategory};
pub use period::{InvalidPeriod, Period};
pub use transaction::{Transaction, TransactionKind};
