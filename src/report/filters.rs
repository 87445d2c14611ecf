//! Filter predicate builder: narrows the raw record collections according
//! to the active report's filter specification.

use std::collections::HashSet;

use crate::records::{Expense, FeePayment, Student};
use crate::report::ReportFilters;

/// Ids of students in the filtered class, or `None` when the `"All"`
/// sentinel is active. Computed once per invocation by exact string match
/// on the class level.
pub fn class_student_ids(students: &[Student], filters: &ReportFilters) -> Option<HashSet<i64>> {
    if filters.all_classes() {
        return None;
    }
    Some(
        students
            .iter()
            .filter(|s| s.class_level == filters.class_level)
            .map(|s| s.id)
            .collect(),
    )
}

/// Payments in the filtered term and year, narrowed to the filtered class
/// when one is active. Used by fee collection, income statement,
/// outstanding fees, and student balances.
pub fn term_scoped_payments<'a>(
    payments: &'a [FeePayment],
    students: &[Student],
    filters: &ReportFilters,
) -> Vec<&'a FeePayment> {
    let class_ids = class_student_ids(students, filters);
    payments
        .iter()
        .filter(|p| p.term == filters.term && p.year == filters.year)
        .filter(|p| match &class_ids {
            None => true,
            Some(ids) => p.student_id.is_some_and(|id| ids.contains(&id)),
        })
        .collect()
}

/// Expenses whose calendar year matches the filtered year.
///
/// Terms do not apply to expenses; the income statement scopes them by
/// year only, while payments keep the full term filter. That asymmetry is
/// part of the report's contract.
pub fn year_scoped_expenses<'a>(
    expenses: &'a [Expense],
    filters: &ReportFilters,
) -> Vec<&'a Expense> {
    expenses
        .iter()
        .filter(|e| e.year() == Some(filters.year))
        .collect()
}

/// Expenses within the inclusive date range, each bound optional.
/// Comparison is lexicographic on ISO `YYYY-MM-DD` strings.
pub fn date_ranged_expenses<'a>(
    expenses: &'a [Expense],
    filters: &ReportFilters,
) -> Vec<&'a Expense> {
    expenses
        .iter()
        .filter(|e| {
            filters
                .date_from
                .as_deref()
                .is_none_or(|from| e.expense_date.as_str() >= from)
                && filters
                    .date_to
                    .as_deref()
                    .is_none_or(|to| e.expense_date.as_str() <= to)
        })
        .collect()
}

/// The single payment selected for a receipt, if any. `None` means the
/// engine performs no work.
pub fn payment_by_id<'a>(
    payments: &'a [FeePayment],
    filters: &ReportFilters,
) -> Option<&'a FeePayment> {
    let wanted = filters.payment_id?;
    payments.iter().find(|p| p.id == wanted)
}
