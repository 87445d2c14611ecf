use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Placeholder for an expense whose category reference does not resolve.
pub const UNCATEGORIZED: &str = "Uncategorized";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: i64,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub expense_date: String,
    #[serde(default)]
    pub vendor_name: String,
    #[serde(default)]
    pub receipt_number: String,
}

impl Expense {
    pub fn new(id: i64, category_id: Option<i64>, amount: f64, expense_date: impl Into<String>) -> Self {
        Self {
            id,
            category_id,
            amount: Some(amount),
            description: String::new(),
            expense_date: expense_date.into(),
            vendor_name: String::new(),
            receipt_number: String::new(),
        }
    }

    pub fn amount(&self) -> f64 {
        self.amount.unwrap_or(0.0)
    }

    /// The calendar year of the expense date, taken from the leading
    /// `YYYY` of the ISO string.
    pub fn year(&self) -> Option<i32> {
        self.expense_date.get(..4).and_then(|y| y.parse().ok())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseCategory {
    pub id: i64,
    pub name: String,
}

impl ExpenseCategory {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Id lookup over the category list; missing references resolve to
/// [`UNCATEGORIZED`] rather than failing.
pub struct CategoryDirectory<'a> {
    by_id: HashMap<i64, &'a ExpenseCategory>,
}

impl<'a> CategoryDirectory<'a> {
    pub fn new(categories: &'a [ExpenseCategory]) -> Self {
        Self {
            by_id: categories.iter().map(|c| (c.id, c)).collect(),
        }
    }

    pub fn name_of(&self, id: Option<i64>) -> &'a str {
        id.and_then(|id| self.by_id.get(&id))
            .map_or(UNCATEGORIZED, |c| c.name.as_str())
    }
}
