//! Outstanding fees: per-student balances over the filtered payments,
//! keeping only students who still owe money, worst debtor first.

use crate::records::{FeePayment, Student, StudentDirectory};
use crate::report::filters::term_scoped_payments;
use crate::report::grouping::OrderedGroups;
use crate::report::ReportFilters;

#[derive(Debug, Clone)]
pub struct StudentBalanceRow {
    pub student_id: Option<i64>,
    pub name: String,
    pub class_level: String,
    pub due: f64,
    pub paid: f64,
    pub balance: f64,
}

#[derive(Debug, Clone)]
pub struct OutstandingReport {
    /// Rows sorted descending by balance; ties keep first-seen order.
    pub rows: Vec<StudentBalanceRow>,
    pub total_outstanding: f64,
    pub student_count: usize,
}

#[derive(Default)]
struct Totals {
    due: f64,
    paid: f64,
}

pub fn aggregate(
    payments: &[FeePayment],
    students: &[Student],
    filters: &ReportFilters,
) -> OutstandingReport {
    let directory = StudentDirectory::new(students);
    let mut per_student: OrderedGroups<Option<i64>, Totals> = OrderedGroups::new();

    for payment in term_scoped_payments(payments, students, filters) {
        let totals = per_student.entry(payment.student_id);
        totals.due += payment.due();
        totals.paid += payment.paid();
    }

    let mut rows: Vec<StudentBalanceRow> = per_student
        .into_entries()
        .into_iter()
        .map(|(student_id, totals)| StudentBalanceRow {
            student_id,
            name: directory.name_of(student_id).to_string(),
            class_level: directory.class_of(student_id).to_string(),
            due: totals.due,
            paid: totals.paid,
            balance: totals.due - totals.paid,
        })
        // Fully paid and overpaid students are excluded entirely.
        .filter(|row| row.balance > 0.0)
        .collect();

    rows.sort_by(|a, b| b.balance.total_cmp(&a.balance));

    let total_outstanding = rows.iter().map(|r| r.balance).sum();
    let student_count = rows.len();

    OutstandingReport {
        rows,
        total_outstanding,
        student_count,
    }
}
