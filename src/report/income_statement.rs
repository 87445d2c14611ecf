//! Income statement: revenue by fee type against expenses by category,
//! with net income and its sign-dependent labeling contract.

use crate::records::{CategoryDirectory, Expense, ExpenseCategory, FeePayment, Student};
use crate::report::filters::{term_scoped_payments, year_scoped_expenses};
use crate::report::grouping::OrderedGroups;
use crate::report::ReportFilters;

#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub label: String,
    pub amount: f64,
}

#[derive(Debug, Clone)]
pub struct IncomeStatement {
    /// Amount paid per fee type, first-seen order.
    pub revenue: Vec<LineItem>,
    /// Expense amount per resolved category, first-seen order.
    pub expenses: Vec<LineItem>,
    pub total_revenue: f64,
    pub total_expenses: f64,
}

impl IncomeStatement {
    pub fn net_income(&self) -> f64 {
        self.total_revenue - self.total_expenses
    }

    /// Non-negative net income is presented as a surplus; the renderer is
    /// expected to label and color the two cases differently.
    pub fn is_surplus(&self) -> bool {
        self.net_income() >= 0.0
    }
}

pub fn aggregate(
    payments: &[FeePayment],
    expenses: &[Expense],
    categories: &[ExpenseCategory],
    students: &[Student],
    filters: &ReportFilters,
) -> IncomeStatement {
    let mut revenue_by_type: OrderedGroups<String, f64> = OrderedGroups::new();
    for payment in term_scoped_payments(payments, students, filters) {
        *revenue_by_type.entry(payment.fee_type.clone()) += payment.paid();
    }

    // Expenses are scoped to the year only; terms never apply to them.
    let directory = CategoryDirectory::new(categories);
    let mut expense_by_category: OrderedGroups<String, f64> = OrderedGroups::new();
    for expense in year_scoped_expenses(expenses, filters) {
        *expense_by_category.entry(directory.name_of(expense.category_id).to_string()) +=
            expense.amount();
    }

    let revenue: Vec<LineItem> = revenue_by_type
        .into_entries()
        .into_iter()
        .map(|(label, amount)| LineItem { label, amount })
        .collect();
    let expense_lines: Vec<LineItem> = expense_by_category
        .into_entries()
        .into_iter()
        .map(|(label, amount)| LineItem { label, amount })
        .collect();

    let total_revenue = revenue.iter().map(|l| l.amount).sum();
    let total_expenses = expense_lines.iter().map(|l| l.amount).sum();

    IncomeStatement {
        revenue,
        expenses: expense_lines,
        total_revenue,
        total_expenses,
    }
}
