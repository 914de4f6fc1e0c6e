//! The closed set of transaction and budget categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Canonical categories shared by transactions and budgets.
///
/// The wire representation is the lowercase form (`"food & dining"`); the
/// set is closed so a typo can never mint a new category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    #[serde(rename = "income")]
    Income,
    #[serde(rename = "food & dining")]
    FoodAndDining,
    #[serde(rename = "housing")]
    Housing,
    #[serde(rename = "healthcare")]
    Healthcare,
    #[serde(rename = "education")]
    Education,
    #[serde(rename = "entertainment")]
    Entertainment,
    #[serde(rename = "shopping")]
    Shopping,
    #[serde(rename = "travel")]
    Travel,
    #[serde(rename = "bills & utilities")]
    BillsAndUtilities,
    #[serde(rename = "others")]
    Others,
}

impl Category {
    /// Every category, income first.
    pub const ALL: [Category; 10] = [
        Category::Income,
        Category::FoodAndDining,
        Category::Housing,
        Category::Healthcare,
        Category::Education,
        Category::Entertainment,
        Category::Shopping,
        Category::Travel,
        Category::BillsAndUtilities,
        Category::Others,
    ];

    /// The nine categories a budget may be set for.
    pub const EXPENSES: [Category; 9] = [
        Category::FoodAndDining,
        Category::Housing,
        Category::Healthcare,
        Category::Education,
        Category::Entertainment,
        Category::Shopping,
        Category::Travel,
        Category::BillsAndUtilities,
        Category::Others,
    ];

    /// Canonical lowercase key, identical to the serialized form.
    pub fn key(self) -> &'static str {
        match self {
            Category::Income => "income",
            Category::FoodAndDining => "food & dining",
            Category::Housing => "housing",
            Category::Healthcare => "healthcare",
            Category::Education => "education",
            Category::Entertainment => "entertainment",
            Category::Shopping => "shopping",
            Category::Travel => "travel",
            Category::BillsAndUtilities => "bills & utilities",
            Category::Others => "others",
        }
    }

    /// Human-facing label with each word capitalized.
    pub fn display_label(self) -> String {
        self.key()
            .split(' ')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn is_income(self) -> bool {
        matches!(self, Category::Income)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error produced when parsing a category from free-form text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let canonical = raw.trim().to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|category| category.key() == canonical)
            .ok_or_else(|| UnknownCategory(raw.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_keys_case_insensitively() {
        assert_eq!(
            "Food & Dining".parse::<Category>().unwrap(),
            Category::FoodAndDining
        );
        assert_eq!("  travel ".parse::<Category>().unwrap(), Category::Travel);
    }

    #[test]
    fn rejects_unknown_categories() {
        let err = "groceries".parse::<Category>().expect_err("must fail");
        assert_eq!(err, UnknownCategory("groceries".into()));
    }

    #[test]
    fn display_label_capitalizes_each_word() {
        assert_eq!(Category::FoodAndDining.display_label(), "Food & Dining");
        assert_eq!(
            Category::BillsAndUtilities.display_label(),
            "Bills & Utilities"
        );
        assert_eq!(Category::Housing.display_label(), "Housing");
    }

    #[test]
    fn serializes_to_wire_keys() {
        let json = serde_json::to_string(&Category::BillsAndUtilities).unwrap();
        assert_eq!(json, "\"bills & utilities\"");
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::BillsAndUtilities);
    }

    #[test]
    fn expenses_exclude_income() {
        assert!(Category::EXPENSES.iter().all(|c| !c.is_income()));
        assert_eq!(Category::EXPENSES.len(), Category::ALL.len() - 1);
    }
}
