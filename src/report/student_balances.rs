//! Student balances: per-student, per-fee-type accumulation with a
//! human-readable "still owing" breakdown. Unlike the outstanding-fees
//! report, fully paid students stay in the output.

use crate::formatting::format_amount;
use crate::records::{FeePayment, Student, StudentDirectory};
use crate::report::filters::term_scoped_payments;
use crate::report::grouping::OrderedGroups;
use crate::report::ReportFilters;

/// Text shown for a student with no fee type still owing.
pub const FULLY_PAID: &str = "Fully Paid";

#[derive(Debug, Clone)]
pub struct FeeTypeBalance {
    pub fee_type: String,
    pub due: f64,
    pub paid: f64,
}

impl FeeTypeBalance {
    pub fn balance(&self) -> f64 {
        self.due - self.paid
    }
}

#[derive(Debug, Clone)]
pub struct StudentBalanceDetail {
    pub student_id: Option<i64>,
    pub name: String,
    pub class_level: String,
    pub total_due: f64,
    pub total_paid: f64,
    /// Per-fee-type totals in first-seen order.
    pub breakdown: Vec<FeeTypeBalance>,
}

impl StudentBalanceDetail {
    pub fn balance(&self) -> f64 {
        self.total_due - self.total_paid
    }

    /// Fee types with money still owing (positive balance only).
    pub fn owing(&self) -> Vec<&FeeTypeBalance> {
        self.breakdown.iter().filter(|b| b.balance() > 0.0).collect()
    }

    /// `"<feeType>: <balance>"` items joined by `separator`, or
    /// [`FULLY_PAID`] when nothing is owed. The document form joins with
    /// newlines, the spreadsheet form with `"; "`.
    pub fn breakdown_text(&self, separator: &str) -> String {
        let owing = self.owing();
        if owing.is_empty() {
            return FULLY_PAID.to_string();
        }
        owing
            .iter()
            .map(|b| format!("{}: {}", b.fee_type, format_amount(b.balance())))
            .collect::<Vec<_>>()
            .join(separator)
    }
}

#[derive(Debug, Clone)]
pub struct StudentBalancesReport {
    /// Rows sorted descending by balance; ties keep first-seen order.
    pub rows: Vec<StudentBalanceDetail>,
    pub total_due: f64,
    pub total_paid: f64,
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
) -> StudentBalancesReport {
    let directory = StudentDirectory::new(students);
    let mut per_student: OrderedGroups<Option<i64>, OrderedGroups<String, Totals>> =
        OrderedGroups::new();

    for payment in term_scoped_payments(payments, students, filters) {
        let per_fee_type = per_student.entry(payment.student_id);
        let totals = per_fee_type.entry(payment.fee_type.clone());
        totals.due += payment.due();
        totals.paid += payment.paid();
    }

    let mut rows: Vec<StudentBalanceDetail> = per_student
        .into_entries()
        .into_iter()
        .map(|(student_id, per_fee_type)| {
            let breakdown: Vec<FeeTypeBalance> = per_fee_type
                .into_entries()
                .into_iter()
                .map(|(fee_type, totals)| FeeTypeBalance {
                    fee_type,
                    due: totals.due,
                    paid: totals.paid,
                })
                .collect();
            let total_due = breakdown.iter().map(|b| b.due).sum();
            let total_paid = breakdown.iter().map(|b| b.paid).sum();
            StudentBalanceDetail {
                student_id,
                name: directory.name_of(student_id).to_string(),
                class_level: directory.class_of(student_id).to_string(),
                total_due,
                total_paid,
                breakdown,
            }
        })
        .collect();

    rows.sort_by(|a, b| b.balance().total_cmp(&a.balance()));

    let total_due = rows.iter().map(|r| r.total_due).sum();
    let total_paid = rows.iter().map(|r| r.total_paid).sum();
    let total_outstanding = rows.iter().map(|r| r.balance()).sum();
    let student_count = rows.len();

    StudentBalancesReport {
        rows,
        total_due,
        total_paid,
        total_outstanding,
        student_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payment(id: i64, student_id: i64, fee_type: &str, due: f64, paid: f64) -> FeePayment {
        let mut p = FeePayment::new(id, Some(student_id), fee_type, 1, 2024);
        p.amount_due = Some(due);
        p.amount_paid = Some(paid);
        p
    }

    #[test]
    fn fully_paid_students_are_retained() {
        let payments = vec![
            payment(1, 1, "Tuition", 500_000.0, 500_000.0),
            payment(2, 2, "Tuition", 300_000.0, 100_000.0),
        ];
        let students = vec![
            Student::new(1, "Student A", "P5"),
            Student::new(2, "Student B", "P5"),
        ];
        let report = aggregate(&payments, &students, &ReportFilters::term_year(1, 2024));

        assert_eq!(report.student_count, 2);
        // Descending balance puts the debtor first.
        assert_eq!(report.rows[0].name, "Student B");
        assert_eq!(
            report.rows[0].breakdown_text("\n"),
            "Tuition: 200,000"
        );
        assert_eq!(report.rows[1].name, "Student A");
        assert_eq!(report.rows[1].breakdown_text("\n"), FULLY_PAID);
    }

    #[test]
    fn breakdown_lists_only_owing_fee_types() {
        let payments = vec![
            payment(1, 1, "Tuition", 400_000.0, 400_000.0),
            payment(2, 1, "Boarding", 200_000.0, 50_000.0),
            payment(3, 1, "Transport", 100_000.0, 80_000.0),
        ];
        let students = vec![Student::new(1, "Student A", "P5")];
        let report = aggregate(&payments, &students, &ReportFilters::term_year(1, 2024));

        let row = &report.rows[0];
        assert_eq!(row.breakdown.len(), 3);
        assert_eq!(row.owing().len(), 2);
        assert_eq!(
            row.breakdown_text("; "),
            "Boarding: 150,000; Transport: 20,000"
        );
        assert_eq!(row.total_due, 700_000.0);
        assert_eq!(row.total_paid, 530_000.0);
        assert_eq!(row.balance(), 170_000.0);
    }

    #[test]
    fn grand_totals_sum_from_rows() {
        let payments = vec![
            payment(1, 1, "Tuition", 100_000.0, 60_000.0),
            payment(2, 2, "Tuition", 200_000.0, 200_000.0),
        ];
        let students = vec![
            Student::new(1, "Student A", "P5"),
            Student::new(2, "Student B", "P6"),
        ];
        let report = aggregate(&payments, &students, &ReportFilters::term_year(1, 2024));
        assert_eq!(report.total_due, 300_000.0);
        assert_eq!(report.total_paid, 260_000.0);
        assert_eq!(report.total_outstanding, 40_000.0);
    }

    #[test]
    fn rows_sort_descending_by_balance() {
        let payments = vec![
            payment(1, 1, "Tuition", 50_000.0, 0.0),
            payment(2, 2, "Tuition", 300_000.0, 0.0),
            payment(3, 3, "Tuition", 100_000.0, 0.0),
        ];
        let students = vec![
            Student::new(1, "Small", "P5"),
            Student::new(2, "Large", "P5"),
            Student::new(3, "Medium", "P5"),
        ];
        let report = aggregate(&payments, &students, &ReportFilters::term_year(1, 2024));
        let names: Vec<_> = report.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Large", "Medium", "Small"]);
    }
}
