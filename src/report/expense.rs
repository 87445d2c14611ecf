//! Expense report: date-ranged expenses grouped by resolved category
//! name, one row per expense, a subtotal per group, and a grand total.

use crate::records::{CategoryDirectory, Expense, ExpenseCategory};
use crate::report::filters::date_ranged_expenses;
use crate::report::grouping::OrderedGroups;
use crate::report::ReportFilters;

#[derive(Debug, Clone)]
pub struct ExpenseRow {
    pub expense_date: String,
    pub description: String,
    pub vendor_name: String,
    pub receipt_number: String,
    pub amount: f64,
}

/// One category group: its expense rows plus the group subtotal.
#[derive(Debug, Clone)]
pub struct ExpenseCategoryGroup {
    pub category: String,
    pub rows: Vec<ExpenseRow>,
    pub total: f64,
}

#[derive(Debug, Clone)]
pub struct ExpenseReport {
    /// Groups in first-seen category order.
    pub groups: Vec<ExpenseCategoryGroup>,
    pub grand_total: f64,
}

#[derive(Default)]
struct GroupAcc {
    rows: Vec<ExpenseRow>,
    total: f64,
}

pub fn aggregate(
    expenses: &[Expense],
    categories: &[ExpenseCategory],
    filters: &ReportFilters,
) -> ExpenseReport {
    let directory = CategoryDirectory::new(categories);
    let mut groups: OrderedGroups<String, GroupAcc> = OrderedGroups::new();

    for expense in date_ranged_expenses(expenses, filters) {
        let category = directory.name_of(expense.category_id).to_string();
        let group = groups.entry(category);
        group.total += expense.amount();
        group.rows.push(ExpenseRow {
            expense_date: expense.expense_date.clone(),
            description: expense.description.clone(),
            vendor_name: expense.vendor_name.clone(),
            receipt_number: expense.receipt_number.clone(),
            amount: expense.amount(),
        });
    }

    let mut grand_total = 0.0;
    let groups = groups
        .into_entries()
        .into_iter()
        .map(|(category, acc)| {
            grand_total += acc.total;
            ExpenseCategoryGroup {
                category,
                rows: acc.rows,
                total: acc.total,
            }
        })
        .collect();

    ExpenseReport {
        groups,
        grand_total,
    }
}
