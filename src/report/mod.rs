//! Report selection, filtering, and the six aggregation algorithms.

pub mod expense;
pub mod fee_collection;
pub mod filters;
pub mod grouping;
pub mod income_statement;
pub mod outstanding;
pub mod receipt;
pub mod student_balances;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use expense::{ExpenseCategoryGroup, ExpenseReport, ExpenseRow};
pub use fee_collection::{FeeCollectionReport, FeeCollectionRow, FeeTypeGroup};
pub use income_statement::{IncomeStatement, LineItem};
pub use outstanding::{OutstandingReport, StudentBalanceRow};
pub use receipt::ReceiptDetails;
pub use student_balances::{
    FeeTypeBalance, StudentBalanceDetail, StudentBalancesReport, FULLY_PAID,
};

/// Sentinel class-level meaning "no class filter".
pub const ALL_CLASSES: &str = "All";

/// The six report projections, dispatched exhaustively so a new report is
/// a compile-time-checked extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportType {
    FeeCollection,
    Expense,
    IncomeStatement,
    Outstanding,
    StudentBalances,
    Receipt,
}

impl ReportType {
    /// Human-readable report name used in titles and error messages.
    pub fn title(&self) -> &'static str {
        match self {
            ReportType::FeeCollection => "Fee Collection",
            ReportType::Expense => "Expense",
            ReportType::IncomeStatement => "Income Statement",
            ReportType::Outstanding => "Outstanding Fees",
            ReportType::StudentBalances => "Student Balances",
            ReportType::Receipt => "Receipt",
        }
    }

    /// Underscored stem used by the output file-naming convention.
    pub fn file_stem(&self) -> &'static str {
        match self {
            ReportType::FeeCollection => "Fee_Collection",
            ReportType::Expense => "Expense",
            ReportType::IncomeStatement => "Income_Statement",
            ReportType::Outstanding => "Outstanding_Fees",
            ReportType::StudentBalances => "Student_Balances",
            ReportType::Receipt => "Receipt",
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// The filter specification collected by the surrounding UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportFilters {
    pub term: u8,
    pub year: i32,
    /// `"All"` sentinel or a concrete class level.
    pub class_level: String,
    #[serde(default)]
    pub date_from: Option<String>,
    #[serde(default)]
    pub date_to: Option<String>,
    #[serde(default)]
    pub payment_id: Option<i64>,
}

impl ReportFilters {
    pub fn term_year(term: u8, year: i32) -> Self {
        Self {
            term,
            year,
            class_level: ALL_CLASSES.into(),
            date_from: None,
            date_to: None,
            payment_id: None,
        }
    }

    pub fn with_class(mut self, class_level: impl Into<String>) -> Self {
        self.class_level = class_level.into();
        self
    }

    pub fn with_date_range(
        mut self,
        date_from: Option<impl Into<String>>,
        date_to: Option<impl Into<String>>,
    ) -> Self {
        self.date_from = date_from.map(Into::into);
        self.date_to = date_to.map(Into::into);
        self
    }

    pub fn for_payment(mut self, payment_id: i64) -> Self {
        self.payment_id = Some(payment_id);
        self
    }

    pub fn all_classes(&self) -> bool {
        self.class_level == ALL_CLASSES
    }
}
